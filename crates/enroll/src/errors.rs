//! Shared error types and utilities for the enroll project.
pub use color_eyre::Report;

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("Failed to install color_eyre")]
    ColorEyre,
    #[error("Failed to install tracing-subscriber")]
    TracingSubscriber(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Failures raised by registry operations, mapped to HTTP statuses by the
/// backend handlers.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Activity {0} not found")]
    ActivityNotFound(String),
    #[error("{email} is already signed up for {activity}")]
    AlreadySignedUp { activity: String, email: String },
    #[error("{email} is not signed up for {activity}")]
    NotSignedUp { activity: String, email: String },
    #[error("{0} is full")]
    ActivityFull(String),
}
