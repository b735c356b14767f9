use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{ApiError, ValidationDetails};
use team_tracker_core::constants::{GOAL_TEXT_MAX_CHARS, GOAL_TEXT_MIN_CHARS};
use team_tracker_core::goals as core_goals;
use team_tracker_core::stats as core_stats;
use team_tracker_core::team_members as core_members;

/// Success wrapper for every response body.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DataEnvelope<T> {
    pub data: T,
}

impl<T> DataEnvelope<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Happy,
    Content,
    Neutral,
    Stressed,
    Frustrated,
}

impl From<core_members::Mood> for Mood {
    fn from(m: core_members::Mood) -> Self {
        match m {
            core_members::Mood::Happy => Mood::Happy,
            core_members::Mood::Content => Mood::Content,
            core_members::Mood::Neutral => Mood::Neutral,
            core_members::Mood::Stressed => Mood::Stressed,
            core_members::Mood::Frustrated => Mood::Frustrated,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: i32,
    pub team_member_id: i32,
    pub goal_text: String,
    pub created_at: DateTime<Utc>,
    pub is_completed: bool,
}

impl From<core_goals::Goal> for Goal {
    fn from(g: core_goals::Goal) -> Self {
        Self {
            id: g.id,
            team_member_id: g.team_member_id,
            goal_text: g.goal_text,
            created_at: g.created_at,
            is_completed: g.is_completed,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: i32,
    pub name: String,
    pub current_mood: Option<Mood>,
    pub mood_updated_at: Option<DateTime<Utc>>,
    pub goals: Vec<Goal>,
}

impl From<core_members::TeamMember> for TeamMember {
    fn from(m: core_members::TeamMember) -> Self {
        Self {
            id: m.id,
            name: m.name,
            current_mood: m.current_mood.map(Mood::from),
            mood_updated_at: m.mood_updated_at,
            goals: m.goals.into_iter().map(Goal::from).collect(),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DailyStats {
    pub date: NaiveDate,
    pub total_goals: usize,
    pub completed_goals: usize,
    pub completion_rate: f64,
    /// Mood name to the number of members who reported it on `date`.
    #[schema(value_type = Object)]
    pub mood_breakdown: BTreeMap<String, usize>,
    pub team_size: usize,
}

impl From<core_stats::DailyStats> for DailyStats {
    fn from(s: core_stats::DailyStats) -> Self {
        Self {
            date: s.date,
            total_goals: s.total_goals,
            completed_goals: s.completed_goals,
            completion_rate: s.completion_rate,
            mood_breakdown: s
                .mood_breakdown
                .into_iter()
                .map(|(mood, count)| (mood.as_str().to_string(), count))
                .collect(),
            team_size: s.team_size,
        }
    }
}

fn push_detail(details: &mut ValidationDetails, field: &str, message: String) {
    details.entry(field.to_string()).or_default().push(message);
}

#[derive(Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GoalCreateRequest {
    pub team_member_id: Option<i32>,
    pub goal_text: Option<String>,
}

impl GoalCreateRequest {
    /// Returns the owning member id and the goal text, or every field problem found.
    pub fn validate(self) -> Result<(i32, String), ApiError> {
        let mut details = ValidationDetails::new();

        if self.team_member_id.is_none() {
            push_detail(&mut details, "teamMemberId", "TeamMemberId is required".to_string());
        }

        match self.goal_text.as_deref() {
            Some(text) if !text.trim().is_empty() => {
                let len = text.chars().count();
                if !(GOAL_TEXT_MIN_CHARS..=GOAL_TEXT_MAX_CHARS).contains(&len) {
                    push_detail(
                        &mut details,
                        "goalText",
                        format!(
                            "GoalText must be between {} and {} characters",
                            GOAL_TEXT_MIN_CHARS, GOAL_TEXT_MAX_CHARS
                        ),
                    );
                }
            }
            _ => push_detail(&mut details, "goalText", "GoalText is required".to_string()),
        }

        match (self.team_member_id, self.goal_text) {
            (Some(member_id), Some(text)) if details.is_empty() => Ok((member_id, text)),
            _ => Err(ApiError::Validation { details }),
        }
    }
}

#[derive(Deserialize, ToSchema, Debug, Clone)]
pub struct MoodUpdateRequest {
    #[schema(value_type = Mood)]
    pub mood: Option<String>,
}

impl MoodUpdateRequest {
    pub fn validate(self) -> Result<core_members::Mood, ApiError> {
        match self.mood.as_deref() {
            None => Err(ApiError::invalid_field("mood", "Mood is required")),
            Some(raw) => core_members::Mood::from_str(raw)
                .map_err(|_| ApiError::invalid_field("mood", "Invalid mood value")),
        }
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListTeamMembersQuery {
    #[serde(default, deserialize_with = "bool_ignore_case")]
    pub include_goals: bool,
}

/// Reads `true`/`false` in any letter case.
fn bool_ignore_case<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if raw.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(serde::de::Error::custom(format!(
            "includeGoals must be true or false, got '{raw}'"
        )))
    }
}

#[derive(Deserialize, Debug, Default)]
pub struct StatsQuery {
    pub date: Option<NaiveDate>,
}
