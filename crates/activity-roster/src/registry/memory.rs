//! In-memory registry implementation.

use super::seed::default_activities;
use super::Activity;
use crate::error::RosterError;
use std::collections::{HashMap, HashSet};
use tracing::warn;

/// In-memory activity registry.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    /// Activities indexed by name
    activities: HashMap<String, Activity>,
    /// Activity names in seed order, used for listing
    order: Vec<String>,
}

impl Registry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            activities: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Create a registry holding the built-in activity catalog.
    pub fn seeded() -> Self {
        let mut registry = Self::new();
        for activity in default_activities() {
            registry.order.push(activity.name.clone());
            registry.activities.insert(activity.name.clone(), activity);
        }
        registry
    }

    /// Build a registry from seed activities.
    ///
    /// Rejects duplicate activity names, duplicate participants within an
    /// activity, and zero capacities. A seed roster above capacity is only
    /// logged.
    pub fn from_activities(activities: Vec<Activity>) -> Result<Self, RosterError> {
        let mut registry = Self::new();

        for activity in activities {
            if registry.activities.contains_key(&activity.name) {
                return Err(RosterError::InvalidSeed(format!(
                    "duplicate activity name: {}",
                    activity.name
                )));
            }

            if activity.max_participants == 0 {
                return Err(RosterError::InvalidSeed(format!(
                    "max_participants must be positive for {}",
                    activity.name
                )));
            }

            let mut seen = HashSet::new();
            if let Some(dup) = activity.participants.iter().find(|p| !seen.insert(*p)) {
                return Err(RosterError::InvalidSeed(format!(
                    "duplicate participant {} in {}",
                    dup, activity.name
                )));
            }

            if activity.is_over_capacity() {
                warn!(
                    activity = %activity.name,
                    participants = activity.participants.len(),
                    max_participants = activity.max_participants,
                    "Seed roster exceeds capacity"
                );
            }

            registry.order.push(activity.name.clone());
            registry.activities.insert(activity.name.clone(), activity);
        }

        Ok(registry)
    }

    /// Get an activity by name.
    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.get(name)
    }

    /// List all activities in seed order.
    pub fn list(&self) -> Vec<&Activity> {
        self.order
            .iter()
            .filter_map(|name| self.activities.get(name))
            .collect()
    }

    /// Sign a participant up for an activity.
    ///
    /// Capacity is not checked; an oversubscribed roster is logged and kept.
    pub fn enroll(&mut self, activity_name: &str, email: &str) -> Result<&Activity, RosterError> {
        let activity = self
            .activities
            .get_mut(activity_name)
            .ok_or_else(|| RosterError::ActivityNotFound(activity_name.to_string()))?;

        if activity.is_enrolled(email) {
            return Err(RosterError::AlreadyEnrolled {
                activity: activity_name.to_string(),
                email: email.to_string(),
            });
        }

        activity.participants.push(email.to_string());

        if activity.is_over_capacity() {
            warn!(
                activity = %activity_name,
                participants = activity.participants.len(),
                max_participants = activity.max_participants,
                "Activity is over capacity"
            );
        }

        Ok(activity)
    }

    /// Remove a participant from an activity.
    pub fn withdraw(&mut self, activity_name: &str, email: &str) -> Result<&Activity, RosterError> {
        let activity = self
            .activities
            .get_mut(activity_name)
            .ok_or_else(|| RosterError::ActivityNotFound(activity_name.to_string()))?;

        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or_else(|| RosterError::NotEnrolled {
                activity: activity_name.to_string(),
                email: email.to_string(),
            })?;

        activity.participants.remove(position);
        Ok(activity)
    }

    /// Get the number of activities.
    pub fn count(&self) -> usize {
        self.activities.len()
    }

    /// Get the number of enrollments across all activities.
    pub fn total_participants(&self) -> usize {
        self.activities.values().map(|a| a.participants.len()).sum()
    }
}
