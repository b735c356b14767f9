//! Goals domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Domain model representing a goal owned by a team member.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: i32,
    pub team_member_id: i32,
    pub goal_text: String,
    pub created_at: DateTime<Utc>,
    pub is_completed: bool,
}

/// Input model for inserting a new goal. The id is assigned by the store.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub team_member_id: i32,
    pub goal_text: String,
    pub created_at: DateTime<Utc>,
    pub is_completed: bool,
}

impl NewGoal {
    /// A fresh, not yet completed goal stamped with `created_at`.
    pub fn new(team_member_id: i32, goal_text: String, created_at: DateTime<Utc>) -> Self {
        Self {
            team_member_id,
            goal_text,
            created_at,
            is_completed: false,
        }
    }

    /// Attaches the store-assigned id.
    pub fn into_goal(self, id: i32) -> Goal {
        Goal {
            id,
            team_member_id: self.team_member_id,
            goal_text: self.goal_text,
            created_at: self.created_at,
            is_completed: self.is_completed,
        }
    }
}
