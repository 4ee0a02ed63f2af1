//! Client-side adapters: the REST client and local session identity.

mod file_session_store;
mod http_profile_client;

pub use file_session_store::{FileSessionStore, SESSION_FILE_NAME};
pub use http_profile_client::{HttpProfileClient, HttpProfileClientConfig};
