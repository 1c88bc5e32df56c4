//! Activity registry and seed catalog.

mod memory;
pub mod seed;

pub use memory::Registry;
pub use seed::{default_activities, load_seed_file};

use serde::{Deserialize, Serialize};

/// An extracurricular activity and its roster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Activity {
    /// Unique display name (e.g., "Chess Club")
    pub name: String,

    /// Free-text description
    pub description: String,

    /// Free-text meeting schedule
    pub schedule: String,

    /// Stated capacity. Recorded and exposed, but not enforced on signup.
    pub max_participants: u32,

    /// Participant emails in signup order
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    /// Create an activity with an empty roster.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Builder-style helper to pre-populate the roster.
    pub fn with_participants<I, S>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.participants = participants.into_iter().map(Into::into).collect();
        self
    }

    /// Check whether an email is on the roster.
    pub fn is_enrolled(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// Check whether the roster has gone past the stated capacity.
    pub fn is_over_capacity(&self) -> bool {
        self.participants.len() > self.max_participants as usize
    }
}
