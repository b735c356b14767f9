//! Database models for goals.

use diesel::prelude::*;

use crate::errors::corrupt_value;
use crate::team_members::TeamMemberDB;
use team_tracker_core::goals::{Goal, NewGoal};
use team_tracker_core::utils::time_utils::{format_timestamp, parse_timestamp};
use team_tracker_core::Error;

/// Database model for goals
#[derive(Queryable, Identifiable, Associations, Selectable, PartialEq, Debug, Clone)]
#[diesel(belongs_to(TeamMemberDB, foreign_key = team_member_id))]
#[diesel(table_name = crate::schema::goals)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct GoalDB {
    pub id: i32,
    pub team_member_id: i32,
    pub goal_text: String,
    pub created_at: String,
    pub is_completed: bool,
}

/// Database model for creating a new goal
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::goals)]
pub struct NewGoalDB {
    pub team_member_id: i32,
    pub goal_text: String,
    pub created_at: String,
    pub is_completed: bool,
}

// Conversion to domain models
impl TryFrom<GoalDB> for Goal {
    type Error = Error;

    fn try_from(db: GoalDB) -> Result<Self, Self::Error> {
        let created_at = parse_timestamp(&db.created_at)
            .map_err(|_| corrupt_value("goals.created_at", &db.created_at))?;
        Ok(Self {
            id: db.id,
            team_member_id: db.team_member_id,
            goal_text: db.goal_text,
            created_at,
            is_completed: db.is_completed,
        })
    }
}

impl From<NewGoal> for NewGoalDB {
    fn from(domain: NewGoal) -> Self {
        Self {
            team_member_id: domain.team_member_id,
            goal_text: domain.goal_text,
            created_at: format_timestamp(&domain.created_at),
            is_completed: domain.is_completed,
        }
    }
}
