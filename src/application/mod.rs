//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).
//! `live` holds the client-side editing loop.

pub mod handlers;
pub mod live;

pub use handlers::{
    CreateProfileCommand, CreateProfileHandler, CreateProfileResult, GetProfileHandler,
    GetProfileQuery, GetSessionStatsHandler, GetSessionStatsQuery, ListSessionProfilesHandler,
    ListSessionProfilesQuery,
};
pub use live::{EnergyCenterState, ProfileRefresher};
