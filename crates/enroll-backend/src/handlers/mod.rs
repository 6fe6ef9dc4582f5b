//! HTTP handlers for the activity sign-up API.

pub mod activities;
pub mod health;
