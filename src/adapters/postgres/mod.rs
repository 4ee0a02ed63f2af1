//! PostgreSQL adapters.

mod profile_reader;
mod profile_repository;

pub use profile_reader::PostgresProfileReader;
pub use profile_repository::PostgresProfileRepository;
