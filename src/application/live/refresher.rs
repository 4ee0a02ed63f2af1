//! Debounced profile refresh.
//!
//! Every edit restarts a quiet-period timer. When the timer survives the
//! debounce window, the current centers are sent to the [`ProfileService`]
//! and the answer is applied to the shared [`EnergyCenterState`].
//!
//! Requests are numbered when dispatched. An answer is applied only if its
//! number is higher than the last one applied, so a slow response can never
//! overwrite a newer one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::EnergyCenterState;
use crate::domain::energy::{Attribute, Chakra, EnergyCenter};
use crate::domain::foundation::SessionId;
use crate::ports::{ClientError, ProfileService};

/// Quiet period after the last edit before a refresh is dispatched.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

struct Shared {
    service: Arc<dyn ProfileService>,
    session_id: SessionId,
    state: RwLock<EnergyCenterState>,
    dispatched: AtomicU64,
    applied: Mutex<u64>,
}

/// Owns an [`EnergyCenterState`] and keeps its profile in step with edits.
pub struct ProfileRefresher {
    shared: Arc<Shared>,
    pending: Mutex<Option<JoinHandle<()>>>,
    debounce: Duration,
}

impl ProfileRefresher {
    pub fn new(
        service: Arc<dyn ProfileService>,
        session_id: SessionId,
        state: EnergyCenterState,
    ) -> Self {
        Self::with_debounce(service, session_id, state, DEFAULT_DEBOUNCE)
    }

    pub fn with_debounce(
        service: Arc<dyn ProfileService>,
        session_id: SessionId,
        state: EnergyCenterState,
        debounce: Duration,
    ) -> Self {
        Self {
            shared: Arc::new(Shared {
                service,
                session_id,
                state: RwLock::new(state),
                dispatched: AtomicU64::new(0),
                applied: Mutex::new(0),
            }),
            pending: Mutex::new(None),
            debounce,
        }
    }

    pub fn session_id(&self) -> &SessionId {
        &self.shared.session_id
    }

    /// Copy of the current state.
    pub async fn snapshot(&self) -> EnergyCenterState {
        self.shared.state.read().await.clone()
    }

    /// Moves one slider and schedules a refresh.
    pub async fn set_attribute(&self, chakra: Chakra, attribute: Attribute, value: i32) {
        self.shared
            .state
            .write()
            .await
            .set_attribute(chakra, attribute, value);
        self.schedule().await;
    }

    /// Replaces one center and schedules a refresh.
    pub async fn set_center(&self, chakra: Chakra, center: EnergyCenter) {
        self.shared.state.write().await.set_center(chakra, center);
        self.schedule().await;
    }

    /// Restarts the debounce timer, dropping any refresh not yet dispatched.
    pub async fn schedule(&self) {
        let mut pending = self.pending.lock().await;
        if let Some(handle) = pending.take() {
            handle.abort();
        }

        let shared = Arc::clone(&self.shared);
        let debounce = self.debounce;
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(debounce).await;
            // Detached so a later edit cannot cancel a request already sent.
            tokio::spawn(dispatch(shared));
        }));
    }

    /// Dispatches a refresh now and waits for it to be applied or discarded.
    pub async fn refresh_now(&self) {
        self.cancel().await;
        dispatch(Arc::clone(&self.shared)).await;
    }

    /// Drops a scheduled refresh. Requests already in flight still complete.
    pub async fn cancel(&self) {
        if let Some(handle) = self.pending.lock().await.take() {
            handle.abort();
        }
    }

    /// Reloads the stored history of the session into the state.
    pub async fn load_history(&self) -> Result<(), ClientError> {
        let history = self
            .shared
            .service
            .list_profiles(&self.shared.session_id)
            .await?;
        self.shared.state.write().await.set_history(history);
        Ok(())
    }
}

async fn dispatch(shared: Arc<Shared>) {
    // Numbered under the state lock so sequence order matches the order the
    // centers were read in.
    let (sequence, centers) = {
        let mut state = shared.state.write().await;
        let sequence = shared.dispatched.fetch_add(1, Ordering::SeqCst) + 1;
        state.begin_refresh();
        (sequence, *state.centers())
    };

    debug!(sequence, session_id = %shared.session_id, "dispatching profile refresh");
    let outcome = shared
        .service
        .create_profile(Some(&shared.session_id), &centers)
        .await;

    let mut applied = shared.applied.lock().await;
    if sequence <= *applied {
        debug!(sequence, applied = *applied, "discarding stale profile response");
        return;
    }
    *applied = sequence;

    if let Err(err) = &outcome {
        warn!(sequence, error = %err, "profile refresh failed");
    }

    let mut state = shared.state.write().await;
    state.finish_refresh(outcome);
    if sequence < shared.dispatched.load(Ordering::SeqCst) {
        // a newer request is still out
        state.begin_refresh();
    }
}

impl Drop for ProfileRefresher {
    fn drop(&mut self) {
        if let Ok(mut pending) = self.pending.try_lock() {
            if let Some(handle) = pending.take() {
                handle.abort();
            }
        }
    }
}
