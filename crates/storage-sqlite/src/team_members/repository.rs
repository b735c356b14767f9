use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;

use super::model::TeamMemberDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::{IntoCore, StorageError};
use crate::goals::GoalDB;
use crate::schema::{goals, team_members};
use crate::utils::chunk_for_sqlite;
use team_tracker_core::goals::Goal;
use team_tracker_core::team_members::{Mood, TeamMember, TeamMemberRepositoryTrait};
use team_tracker_core::utils::time_utils::format_timestamp;
use team_tracker_core::Result;

pub struct TeamMemberRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl TeamMemberRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        TeamMemberRepository { pool, writer }
    }

    /// Loads the members' goals newest first and groups them per member,
    /// in the same order as `members`.
    fn load_goals_for(
        conn: &mut SqliteConnection,
        members: &[TeamMemberDB],
    ) -> Result<Vec<Vec<GoalDB>>> {
        let mut goals_db = Vec::new();
        for chunk in chunk_for_sqlite(members) {
            let mut loaded = GoalDB::belonging_to(chunk)
                .select(GoalDB::as_select())
                .order((goals::created_at.desc(), goals::id.desc()))
                .load::<GoalDB>(conn)
                .into_core()?;
            goals_db.append(&mut loaded);
        }
        Ok(goals_db.grouped_by(members))
    }
}

#[async_trait]
impl TeamMemberRepositoryTrait for TeamMemberRepository {
    fn list(&self, include_goals: bool) -> Result<Vec<TeamMember>> {
        let mut conn = get_connection(&self.pool)?;
        let members_db = team_members::table
            .select(TeamMemberDB::as_select())
            .order(team_members::name.asc())
            .load::<TeamMemberDB>(&mut conn)
            .into_core()?;

        if !include_goals {
            return members_db.into_iter().map(TeamMember::try_from).collect();
        }

        let grouped = Self::load_goals_for(&mut conn, &members_db)?;
        members_db
            .into_iter()
            .zip(grouped)
            .map(|(member_db, goals_db)| {
                let mut member = TeamMember::try_from(member_db)?;
                member.goals = goals_db
                    .into_iter()
                    .map(Goal::try_from)
                    .collect::<Result<Vec<_>>>()?;
                Ok(member)
            })
            .collect()
    }

    fn get_by_id(&self, member_id: i32) -> Result<Option<TeamMember>> {
        let mut conn = get_connection(&self.pool)?;
        team_members::table
            .find(member_id)
            .select(TeamMemberDB::as_select())
            .first(&mut conn)
            .optional()
            .into_core()?
            .map(TeamMember::try_from)
            .transpose()
    }

    async fn update_mood(
        &self,
        member_id: i32,
        mood: Mood,
        updated_at: DateTime<Utc>,
    ) -> Result<usize> {
        let stamp = format_timestamp(&updated_at);
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::update(team_members::table.find(member_id))
                    .set((
                        team_members::current_mood.eq(Some(mood.as_str())),
                        team_members::mood_updated_at.eq(Some(stamp)),
                    ))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }
}
