//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that accept
//! `&SqlitePool` as the first argument.

pub mod annotation_repo;
pub mod item_repo;
pub mod login_repo;

pub use annotation_repo::AnnotationRepo;
pub use item_repo::ItemRepo;
pub use login_repo::LoginRepo;
