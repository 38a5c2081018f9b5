//! Request handlers.
//!
//! Handlers extract and validate request data, call into the engine or the
//! repositories, and map failures via [`AppError`](crate::error::AppError).

pub mod annotations;
pub mod audio;
pub mod auth;
pub mod items;
