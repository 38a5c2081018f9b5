//! Annotation distribution engine.
//!
//! Two independent components that share only the database schema: the
//! [`selector`] decides what each annotator sees, the [`merger`] writes their
//! corrections back.

pub mod merger;
pub mod selector;

pub use merger::{AnnotationMerger, MergeError};
pub use selector::EligibilitySelector;
