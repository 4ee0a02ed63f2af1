//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Server Ports
//!
//! - `ProfileRepository` - Write side for profile records
//! - `ProfileReader` - Session history and statistics
//!
//! ## Client Ports
//!
//! - `ProfileService` - Remote profile backend as seen by a front end
//! - `SessionIdentityStore` - Persistent anonymous session id

mod profile_reader;
mod profile_repository;
mod profile_service;
mod session_identity_store;

pub use profile_reader::ProfileReader;
pub use profile_repository::ProfileRepository;
pub use profile_service::{ClientError, CreatedProfile, ProfileService};
pub use session_identity_store::SessionIdentityStore;
