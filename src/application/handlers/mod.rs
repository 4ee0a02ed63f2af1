//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod profile;

pub use profile::{
    CreateProfileCommand, CreateProfileHandler, CreateProfileResult, GetProfileHandler,
    GetProfileQuery, GetSessionStatsHandler, GetSessionStatsQuery, ListSessionProfilesHandler,
    ListSessionProfilesQuery,
};
