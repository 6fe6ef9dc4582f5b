//! Backend services for activity and roster management.
//!
//! This module provides the service layer abstractions and implementations
//! for managing activities and their participants. Currently includes an
//! in-memory implementation suitable for development and testing.

pub mod activities;

pub use activities::*;
