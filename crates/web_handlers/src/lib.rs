//! # Web Handlers for the Campground Listings Server
//!
//! This crate provides the request pipeline: the route table, the validation
//! gate in front of writes, the async fault wrapper around store calls and the
//! fault normalizer that turns every failure into a rendered error page.

/// Structured faults and the terminal fault normalizer
mod fault;
pub use fault::*;

/// Pure schema validation of campground payloads
mod schema;
pub use schema::*;

/// JSON and HTML form body parsing into an untyped payload
mod request_body;
pub use request_body::*;

/// Validation gate extractor for create and update routes
mod validation;
pub use validation::*;

/// Routing of failed handler futures into the fault channel
mod async_fault;
pub use async_fault::*;

/// `?_method=` override middleware for HTML forms
mod method_override;
pub use method_override::*;

/// Server-side HTML views
mod views;
pub use views::*;

/// Campground CRUD handlers
mod campground_handlers;
pub use campground_handlers::*;

/// Route table and the unmatched-route fallback
mod routes;
pub use routes::*;
