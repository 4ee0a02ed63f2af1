//! Live editing of energy centers with debounced profile refresh.
//!
//! [`EnergyCenterState`] is the explicit state a front end renders from.
//! [`ProfileRefresher`] owns one and recomputes its profile through a
//! [`ProfileService`](crate::ports::ProfileService) once edits go quiet.

mod refresher;
mod state;

pub use refresher::{ProfileRefresher, DEFAULT_DEBOUNCE};
pub use state::{EnergyCenterState, REFRESH_FAILED_NOTICE};
