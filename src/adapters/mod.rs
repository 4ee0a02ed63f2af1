//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `memory` - In-process profile store
//! - `postgres` - PostgreSQL profile store
//! - `http` - axum REST API
//! - `client` - reqwest client for that API and the local session file

pub mod client;
pub mod http;
pub mod memory;
pub mod postgres;

pub use client::{FileSessionStore, HttpProfileClient, HttpProfileClientConfig};
pub use memory::InMemoryProfileStore;
pub use postgres::{PostgresProfileReader, PostgresProfileRepository};
