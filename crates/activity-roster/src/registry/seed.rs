//! Seed catalog loaded at startup.

use super::Activity;
use crate::error::RosterError;
use std::path::Path;

/// Built-in activity catalog.
pub fn default_activities() -> Vec<Activity> {
    vec![
        Activity::new(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
        )
        .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
        Activity::new(
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
        )
        .with_participants(["emma@mergington.edu", "sophia@mergington.edu"]),
        Activity::new(
            "Basketball Team",
            "Practice drills and compete in interschool basketball games",
            "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
            15,
        )
        .with_participants(["james@mergington.edu"]),
        Activity::new(
            "Soccer Club",
            "Train together and play friendly soccer matches",
            "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
            22,
        )
        .with_participants(["lucas@mergington.edu", "mia@mergington.edu"]),
        Activity::new(
            "Art Club",
            "Explore painting, drawing, and mixed media",
            "Wednesdays, 3:30 PM - 5:00 PM",
            15,
        )
        .with_participants(["ava@mergington.edu"]),
        Activity::new(
            "Drama Club",
            "Act in and stage the school's theater productions",
            "Fridays, 4:00 PM - 6:00 PM",
            20,
        )
        .with_participants(["noah@mergington.edu", "isabella@mergington.edu"]),
        Activity::new(
            "Debate Team",
            "Sharpen public speaking and argue in debate tournaments",
            "Thursdays, 3:30 PM - 5:00 PM",
            12,
        )
        .with_participants(["olivia@mergington.edu"]),
    ]
}

/// Load a seed catalog from a JSON file holding an array of activities.
pub fn load_seed_file(path: &Path) -> Result<Vec<Activity>, RosterError> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        RosterError::InvalidSeed(format!("failed to read {}: {}", path.display(), e))
    })?;

    let activities: Vec<Activity> = serde_json::from_str(&contents)?;
    Ok(activities)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_catalog_within_capacity() {
        for activity in default_activities() {
            assert!(activity.max_participants > 0, "{}", activity.name);
            assert!(!activity.is_over_capacity(), "{}", activity.name);
        }
    }

    #[test]
    fn test_default_catalog_names() {
        let names: Vec<String> = default_activities().into_iter().map(|a| a.name).collect();

        for expected in [
            "Chess Club",
            "Programming Class",
            "Basketball Team",
            "Soccer Club",
            "Art Club",
            "Drama Club",
            "Debate Team",
        ] {
            assert!(names.iter().any(|n| n == expected), "missing {}", expected);
        }
    }

    #[test]
    fn test_load_seed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{
                    "name": "Robotics Club",
                    "description": "Build robots",
                    "schedule": "Mondays",
                    "max_participants": 8,
                    "participants": ["ada@mergington.edu"]
                }}
            ]"#
        )
        .unwrap();

        let activities = load_seed_file(file.path()).unwrap();
        assert_eq!(activities.len(), 1);
        assert_eq!(activities[0].name, "Robotics Club");
        assert_eq!(activities[0].participants, vec!["ada@mergington.edu"]);
    }

    #[test]
    fn test_load_seed_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_seed_file(&dir.path().join("missing.json"));

        assert!(matches!(result, Err(RosterError::InvalidSeed(_))));
    }

    #[test]
    fn test_load_seed_file_malformed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let result = load_seed_file(file.path());
        assert!(matches!(result, Err(RosterError::InvalidSeed(_))));
    }
}
