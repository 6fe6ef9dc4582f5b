//! Data structures shared between the backend and its clients.

use serde::{Deserialize, Serialize};

/// An extracurricular activity and its roster of participant emails.
///
/// The activity name is not a field; it is the key the registry stores the
/// activity under, and the key clients see in the `GET /activities` mapping.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: usize,
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: usize,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Seed helper: a new activity with some emails already on the roster.
    pub fn with_participants(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: usize,
        participants: &[&str],
    ) -> Self {
        let mut activity = Self::new(description, schedule, max_participants);
        activity.participants = participants.iter().map(|email| email.to_string()).collect();
        activity
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|entry| entry == email)
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants
    }

    pub fn add_participant(&mut self, email: String) {
        self.participants.push(email);
    }

    pub fn remove_participant(&mut self, email: &str) {
        self.participants.retain(|entry| entry != email);
    }
}

/// Success body returned by signup and unregister.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Message {
    pub message: String,
}

/// Error body returned for rejected requests.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ErrorDetail {
    pub detail: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UptimeInfo {
    pub seconds: i64,
    pub human: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ServiceInfo {
    pub registry: String,
    pub tracked_activities: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub timestamp: String,
    pub started_at: String,
    pub uptime: UptimeInfo,
    pub services: ServiceInfo,
}
