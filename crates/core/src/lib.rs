//! Domain logic for the clip correction service.
//!
//! Nothing in this crate touches the database or the network. The `db` crate
//! stores and loads rows, the `api` crate wires requests to the rules defined
//! here.

pub mod annotation;
pub mod credentials;
pub mod eligibility;
pub mod error;
pub mod media;
pub mod pagination;
pub mod types;
