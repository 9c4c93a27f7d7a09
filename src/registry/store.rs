use std::collections::BTreeMap;

use parking_lot::RwLock;

use super::{Activity, RegistryError};

/// Thread-safe in-memory store of activities, keyed by name.
///
/// All mutation is a single check-then-mutate step under the write lock, so
/// two concurrent signups for the same email cannot both observe it as
/// absent. Reads clone under the read lock and never see a half-applied
/// mutation.
///
/// Activities are created once at startup and never added or removed through
/// the API; only participant lists change.
#[derive(Debug, Default)]
pub struct ActivityRegistry {
    activities: RwLock<BTreeMap<String, Activity>>,
}

impl ActivityRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry populated with the given activities.
    pub fn with_activities<I>(activities: I) -> Self
    where
        I: IntoIterator<Item = (String, Activity)>,
    {
        Self {
            activities: RwLock::new(activities.into_iter().collect()),
        }
    }

    /// Snapshot-consistent view of every activity and its participants.
    pub fn snapshot(&self) -> BTreeMap<String, Activity> {
        self.activities.read().clone()
    }

    /// Number of activities in the registry.
    pub fn len(&self) -> usize {
        self.activities.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.read().is_empty()
    }

    /// Add `email` to the end of the activity's participant list.
    pub fn signup(&self, activity_name: &str, email: &str) -> Result<(), RegistryError> {
        let mut activities = self.activities.write();
        let activity = activities
            .get_mut(activity_name)
            .ok_or_else(|| RegistryError::ActivityNotFound(activity_name.to_string()))?;

        if activity.is_registered(email) {
            return Err(RegistryError::AlreadyRegistered {
                activity: activity_name.to_string(),
                email: email.to_string(),
            });
        }

        activity.participants.push(email.to_string());
        tracing::debug!(activity = activity_name, email, "signed up");
        Ok(())
    }

    /// Remove `email` from the activity's participant list, keeping the
    /// relative order of the remaining participants.
    pub fn unregister(&self, activity_name: &str, email: &str) -> Result<(), RegistryError> {
        let mut activities = self.activities.write();
        let activity = activities
            .get_mut(activity_name)
            .ok_or_else(|| RegistryError::ActivityNotFound(activity_name.to_string()))?;

        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or_else(|| RegistryError::NotRegistered {
                activity: activity_name.to_string(),
                email: email.to_string(),
            })?;

        activity.participants.remove(position);
        tracing::debug!(activity = activity_name, email, "unregistered");
        Ok(())
    }
}
