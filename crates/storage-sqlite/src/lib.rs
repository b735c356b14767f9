//! SQLite storage implementation for the team tracker.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `team-tracker-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations (schema plus the seeded team members)
//! - Repository implementations for team members and goals
//! - Database-specific model types (with Diesel derives)
//!
//! # Architecture
//!
//! ```text
//!   core (domain, traits)
//!          │
//!          ▼
//!   storage-sqlite (this crate)
//!          │
//!          ▼
//!      SQLite DB
//! ```
//!
//! Reads borrow a pooled connection. Writes are sent to a single writer task
//! (`WriteHandle`) that runs each job in an immediate transaction.

pub mod db;
pub mod errors;
pub mod schema;
pub mod utils;

// Repository implementations
pub mod goals;
pub mod team_members;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, ping, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from team-tracker-core for convenience
pub use team_tracker_core::errors::{DatabaseError, Error, Result};
