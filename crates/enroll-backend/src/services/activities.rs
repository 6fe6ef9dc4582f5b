use std::collections::HashMap;

use async_trait::async_trait;
use dashmap::DashMap;

use enroll::data::Activity;
use enroll::errors::RegistryError;

/// A trait for managing activities and their participant rosters.
///
/// This trait covers the full surface the HTTP layer needs: listing the
/// registry, looking an activity up, and signing participants up or removing
/// them. It is implementation-agnostic, allowing for in-memory, database,
/// or other storage backends.
#[async_trait]
pub trait ActivityService {
    /// The error type returned by operations on this service.
    type Error;

    /// Returns every activity in the registry, keyed by name.
    ///
    /// The returned map reflects the latest mutations. No filtering or
    /// pagination; the registry is expected to stay small.
    async fn list(&self) -> Result<HashMap<String, Activity>, Self::Error>;

    /// Retrieves a single activity by name.
    ///
    /// # Errors
    ///
    /// Returns an error if no activity exists with the given name.
    async fn get(&self, name: &str) -> Result<Activity, Self::Error>;

    /// Adds an email to the named activity's roster.
    ///
    /// # Errors
    ///
    /// Returns an error if the activity doesn't exist, if the email is
    /// already on the roster, or if the roster is at capacity.
    async fn signup(&self, name: &str, email: &str) -> Result<(), Self::Error>;

    /// Removes an email from the named activity's roster.
    ///
    /// # Errors
    ///
    /// Returns an error if the activity doesn't exist or the email is not
    /// currently on the roster.
    async fn unregister(&self, name: &str, email: &str) -> Result<(), Self::Error>;
}

/// An in-memory implementation of the `ActivityService` trait.
///
/// This implementation uses a `DashMap` to store activities, allowing for
/// concurrent access and modifications. Signup and unregister perform their
/// membership and capacity checks while holding the entry guard, so each
/// call is atomic with respect to other calls on the same activity.
pub struct ActivityServiceInMemory {
    activities: DashMap<String, Activity>,
}

impl ActivityServiceInMemory {
    pub fn new() -> Self {
        Self {
            activities: DashMap::new(),
        }
    }

    /// The registry the server starts with: the school's fixed activity
    /// catalog, including a few pre-registered students.
    pub fn with_defaults() -> Self {
        let service = Self::new();
        service.insert(
            "Chess Club",
            Activity::with_participants(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
                &["michael@mergington.edu", "daniel@mergington.edu"],
            ),
        );
        service.insert(
            "Programming Class",
            Activity::with_participants(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
                &["emma@mergington.edu", "sophia@mergington.edu"],
            ),
        );
        service.insert(
            "Gym Class",
            Activity::with_participants(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
                &["john@mergington.edu", "olivia@mergington.edu"],
            ),
        );
        service
    }

    fn insert(&self, name: &str, activity: Activity) {
        self.activities.insert(name.to_string(), activity);
    }
}

impl Default for ActivityServiceInMemory {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[async_trait]
impl ActivityService for ActivityServiceInMemory {
    type Error = RegistryError;

    async fn list(&self) -> Result<HashMap<String, Activity>, Self::Error> {
        Ok(self
            .activities
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect())
    }

    async fn get(&self, name: &str) -> Result<Activity, Self::Error> {
        self.activities
            .get(name)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| RegistryError::ActivityNotFound(name.to_string()))
    }

    async fn signup(&self, name: &str, email: &str) -> Result<(), Self::Error> {
        let mut entry = self
            .activities
            .get_mut(name)
            .ok_or_else(|| RegistryError::ActivityNotFound(name.to_string()))?;

        if entry.has_participant(email) {
            return Err(RegistryError::AlreadySignedUp {
                activity: name.to_string(),
                email: email.to_string(),
            });
        }
        if entry.is_full() {
            return Err(RegistryError::ActivityFull(name.to_string()));
        }

        entry.add_participant(email.to_string());
        Ok(())
    }

    async fn unregister(&self, name: &str, email: &str) -> Result<(), Self::Error> {
        let mut entry = self
            .activities
            .get_mut(name)
            .ok_or_else(|| RegistryError::ActivityNotFound(name.to_string()))?;

        if !entry.has_participant(email) {
            return Err(RegistryError::NotSignedUp {
                activity: name.to_string(),
                email: email.to_string(),
            });
        }

        entry.remove_participant(email);
        Ok(())
    }
}
