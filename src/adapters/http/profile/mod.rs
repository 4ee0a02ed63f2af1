//! HTTP adapter for profile endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    CreateProfileRequest, CreateProfileResponse, ProfileListResponse, ProfileRecordResponse,
    ProfileResponse,
};
pub(crate) use handlers::invalid_session;
pub use routes::profile_routes;
