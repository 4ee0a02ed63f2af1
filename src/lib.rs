//! Energy Profile - rule-based spiritual profiles from seven energy centers
//!
//! A pure generator turns frequency/balance/blockage readings into a
//! textual profile. Generated profiles are stored per anonymous session
//! behind a small REST API, and `application::live` keeps a client's
//! displayed profile in step with slider edits.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
