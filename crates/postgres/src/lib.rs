//! # Postgres
//!
//! This crate bootstraps the PostgreSQL connection used by the campground store.
//! The pool is created once at process start and handed to the store explicitly.

/// Connection pool creation, health check and schema bootstrap.
pub mod database;
