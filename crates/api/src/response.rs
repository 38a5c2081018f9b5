//! Shared response envelope types for API handlers.
//!
//! The listing, login, batch and health endpoints keep the bare shapes their
//! clients already parse. Lookups added on top of them use the `{ "data": ... }`
//! envelope.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
