//! Profile record module - the persisted unit and its session aggregate.

mod aggregate;
mod errors;
mod stats;

pub use aggregate::ProfileRecord;
pub use errors::ProfileError;
pub use stats::SessionStats;
