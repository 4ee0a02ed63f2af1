//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `energy` - The seven energy centers and their derived metrics
//! - `profile` - Pure generation of a spiritual profile from energy centers
//! - `record` - Persisted profile records and per-session statistics

pub mod energy;
pub mod foundation;
pub mod profile;
pub mod record;
