//! # Campgrounds
//!
//! This crate owns the campground entity and every way of persisting it.
//! Callers talk to a [`CampgroundStore`] and never to the database directly,
//! which keeps the web layer testable against [`MemoryCampgroundStore`].

/// Campground entity, its writable fields and store errors
mod types;
pub use types::*;

/// The store contract shared by every backend
mod store;
pub use store::*;

/// PostgreSQL-backed store
mod pg_store;
pub use pg_store::*;

/// In-memory store used in tests and database-less runs
mod memory_store;
pub use memory_store::*;
