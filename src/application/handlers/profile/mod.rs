//! Profile command and query handlers.

mod create_profile;
mod get_profile;
mod get_session_stats;
mod list_session_profiles;

pub use create_profile::{CreateProfileCommand, CreateProfileHandler, CreateProfileResult};
pub use get_profile::{GetProfileHandler, GetProfileQuery};
pub use get_session_stats::{GetSessionStatsHandler, GetSessionStatsQuery};
pub use list_session_profiles::{ListSessionProfilesHandler, ListSessionProfilesQuery};
