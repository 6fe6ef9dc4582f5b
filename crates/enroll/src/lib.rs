//! The shared library for Enroll, an extracurricular activity sign-up service.
//!
//! This library provides the pieces shared across the workspace: the activity
//! data structures and wire types, error handling, and logging setup.

pub mod data;
pub mod errors;
pub mod log;

pub use serde;
pub use serde_json;
pub use tracing;
