//! Row types and DTOs for the clip store.

pub mod annotation;
pub mod item;
