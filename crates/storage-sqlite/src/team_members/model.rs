//! Database models for team members.

use diesel::prelude::*;

use crate::errors::corrupt_value;
use team_tracker_core::team_members::{Mood, TeamMember};
use team_tracker_core::utils::time_utils::parse_timestamp;
use team_tracker_core::Error;

/// Database model for team members
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::team_members)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TeamMemberDB {
    pub id: i32,
    pub name: String,
    pub current_mood: Option<String>,
    pub mood_updated_at: Option<String>,
}

// Conversion to domain models. Goals are attached by the repository.
impl TryFrom<TeamMemberDB> for TeamMember {
    type Error = Error;

    fn try_from(db: TeamMemberDB) -> Result<Self, Self::Error> {
        let current_mood = db
            .current_mood
            .as_deref()
            .map(|value| {
                value
                    .parse::<Mood>()
                    .map_err(|_| corrupt_value("team_members.current_mood", value))
            })
            .transpose()?;
        let mood_updated_at = db
            .mood_updated_at
            .as_deref()
            .map(|value| {
                parse_timestamp(value)
                    .map_err(|_| corrupt_value("team_members.mood_updated_at", value))
            })
            .transpose()?;

        Ok(Self {
            id: db.id,
            name: db.name,
            current_mood,
            mood_updated_at,
            goals: Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_member_without_mood() {
        let member = TeamMember::try_from(TeamMemberDB {
            id: 1,
            name: "Alice Johnson".to_string(),
            current_mood: None,
            mood_updated_at: None,
        })
        .unwrap();
        assert_eq!(member.current_mood, None);
        assert_eq!(member.mood_updated_at, None);
        assert!(member.goals.is_empty());
    }

    #[test]
    fn test_member_with_mood() {
        let member = TeamMember::try_from(TeamMemberDB {
            id: 2,
            name: "Bob Smith".to_string(),
            current_mood: Some("Stressed".to_string()),
            mood_updated_at: Some("2024-02-29 23:59:59".to_string()),
        })
        .unwrap();
        assert_eq!(member.current_mood, Some(Mood::Stressed));
        assert_eq!(
            member.mood_updated_at,
            Some(Utc.with_ymd_and_hms(2024, 2, 29, 23, 59, 59).unwrap())
        );
    }

    #[test]
    fn test_unknown_stored_mood_is_corrupt() {
        let err = TeamMember::try_from(TeamMemberDB {
            id: 3,
            name: "Carol Davis".to_string(),
            current_mood: Some("Sleepy".to_string()),
            mood_updated_at: Some("2024-02-29 23:59:59".to_string()),
        })
        .unwrap_err();
        assert!(err.to_string().contains("Sleepy"));
    }
}
