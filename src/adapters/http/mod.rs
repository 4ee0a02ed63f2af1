//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.
//! Every failure uses the [`ErrorResponse`] envelope.

pub mod error;
mod health;
pub mod profile;
mod router;
pub mod session;

pub use error::{ApiJson, ErrorResponse};
pub use health::{HealthResponse, SERVICE_MESSAGE, SERVICE_VERSION};
pub use router::{api_router, api_routes, ApiState};
