//! Team member domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ValidationError;
use crate::goals::Goal;

/// Member-reported mood. One value is active per member at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Mood {
    Happy,
    Content,
    Neutral,
    Stressed,
    Frustrated,
}

impl Mood {
    pub const ALL: [Mood; 5] = [
        Mood::Happy,
        Mood::Content,
        Mood::Neutral,
        Mood::Stressed,
        Mood::Frustrated,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Content => "Content",
            Mood::Neutral => "Neutral",
            Mood::Stressed => "Stressed",
            Mood::Frustrated => "Frustrated",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = ValidationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Mood::ALL
            .into_iter()
            .find(|mood| mood.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidMood(s.to_string()))
    }
}

/// Domain model representing a team member.
///
/// `current_mood` and `mood_updated_at` are either both set or both empty.
/// `goals` is only populated when a listing explicitly asks for it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: i32,
    pub name: String,
    pub current_mood: Option<Mood>,
    pub mood_updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub goals: Vec<Goal>,
}

impl TeamMember {
    /// Returns the member with mood and timestamp replaced together.
    pub fn with_mood(mut self, mood: Mood, updated_at: DateTime<Utc>) -> Self {
        self.current_mood = Some(mood);
        self.mood_updated_at = Some(updated_at);
        self
    }
}
