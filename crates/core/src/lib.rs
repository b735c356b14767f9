//! Team Tracker Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic for the team mood and goal tracker.
//! It is database-agnostic and defines repository traits that are implemented
//! by the `storage-sqlite` crate.

pub mod constants;
pub mod errors;
pub mod goals;
pub mod stats;
pub mod team_members;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;

#[cfg(test)]
pub(crate) mod test_utils;
