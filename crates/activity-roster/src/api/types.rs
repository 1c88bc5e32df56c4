//! API request and response types.

use crate::registry::Activity;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserialize;

/// Query string for signup and unregister, kept as raw pairs.
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct ParticipantQuery(pub Vec<(String, String)>);

impl ParticipantQuery {
    /// Participant email. The last value wins when `email` is repeated.
    /// Opaque, not validated.
    pub fn email(&self) -> Option<&str> {
        self.0
            .iter()
            .rev()
            .find(|(key, _)| key == "email")
            .map(|(_, value)| value.as_str())
    }
}

/// Activity as exposed over HTTP (the name is the map key).
#[derive(Debug, Clone, serde::Serialize)]
pub struct ActivityDetails {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl From<&Activity> for ActivityDetails {
    fn from(activity: &Activity) -> Self {
        Self {
            description: activity.description.clone(),
            schedule: activity.schedule.clone(),
            max_participants: activity.max_participants,
            participants: activity.participants.clone(),
        }
    }
}

/// Every activity keyed by name, serialized as a JSON object in catalog order.
#[derive(Debug, Clone, Default)]
pub struct ActivitiesResponse(pub Vec<(String, ActivityDetails)>);

impl Serialize for ActivitiesResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, details) in &self.0 {
            map.serialize_entry(name, details)?;
        }
        map.end()
    }
}

/// Confirmation for signup and unregister.
#[derive(Debug, serde::Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Health check response.
#[derive(Debug, serde::Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub activity_count: usize,
    pub participant_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(pairs: &[(&str, &str)]) -> ParticipantQuery {
        ParticipantQuery(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_participant_query_email() {
        assert_eq!(
            query(&[("email", "a@mergington.edu")]).email(),
            Some("a@mergington.edu")
        );
        assert_eq!(
            query(&[("email", "a@mergington.edu"), ("email", "b@mergington.edu")]).email(),
            Some("b@mergington.edu")
        );
        assert_eq!(query(&[("name", "x")]).email(), None);
        assert_eq!(ParticipantQuery::default().email(), None);
    }

    #[test]
    fn test_activities_response_keeps_order() {
        let response = ActivitiesResponse(vec![
            (
                "Zoology Club".into(),
                ActivityDetails::from(&Activity::new("Zoology Club", "Animals", "Mondays", 5)),
            ),
            (
                "Art Club".into(),
                ActivityDetails::from(&Activity::new("Art Club", "Painting", "Tuesdays", 5)),
            ),
        ]);

        let json = serde_json::to_string(&response).unwrap();
        let zoology = json.find("Zoology Club").unwrap();
        let art = json.find("Art Club").unwrap();
        assert!(zoology < art);

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["Art Club"]["max_participants"], 5);
        assert!(value["Art Club"]["participants"].as_array().unwrap().is_empty());
    }
}
