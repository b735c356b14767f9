use log::debug;
use std::sync::Arc;

use super::team_members_model::{Mood, TeamMember};
use super::team_members_traits::{TeamMemberRepositoryTrait, TeamMemberServiceTrait};
use crate::errors::{Error, Result};
use crate::utils::time_utils::now_utc_seconds;

/// Service for listing team members and recording their mood.
pub struct TeamMemberService {
    repository: Arc<dyn TeamMemberRepositoryTrait>,
}

impl TeamMemberService {
    pub fn new(repository: Arc<dyn TeamMemberRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl TeamMemberServiceTrait for TeamMemberService {
    fn list_all(&self, include_goals: bool) -> Result<Vec<TeamMember>> {
        self.repository.list(include_goals)
    }

    async fn update_mood(&self, member_id: i32, mood: Mood) -> Result<TeamMember> {
        let member = self
            .repository
            .get_by_id(member_id)?
            .ok_or(Error::TeamMemberNotFound(member_id))?;

        // Never move the timestamp backwards if the clock went back.
        let now = now_utc_seconds();
        let updated_at = match member.mood_updated_at {
            Some(previous) if previous > now => previous,
            _ => now,
        };

        debug!(
            "Updating mood of team member {} to {} at {}",
            member_id, mood, updated_at
        );
        self.repository
            .update_mood(member_id, mood, updated_at)
            .await?;

        Ok(member.with_mood(mood, updated_at))
    }
}
