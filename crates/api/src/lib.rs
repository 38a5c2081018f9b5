//! Clip correction API server library.
//!
//! Exposes the building blocks (config, state, error handling, routes, the
//! eligibility and merge engine) so integration tests and the binary
//! entrypoint can both access them.

pub mod config;
pub mod engine;
pub mod error;
pub mod handlers;
pub mod query;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
