use crate::errors::{Error, Result};
use crate::goals::goals_model::{Goal, NewGoal};
use crate::goals::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
use crate::team_members::TeamMemberRepositoryTrait;
use crate::utils::time_utils::now_utc_seconds;
use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

pub struct GoalService {
    goal_repo: Arc<dyn GoalRepositoryTrait>,
    team_member_repo: Arc<dyn TeamMemberRepositoryTrait>,
}

impl GoalService {
    pub fn new(
        goal_repo: Arc<dyn GoalRepositoryTrait>,
        team_member_repo: Arc<dyn TeamMemberRepositoryTrait>,
    ) -> Self {
        GoalService {
            goal_repo,
            team_member_repo,
        }
    }
}

#[async_trait]
impl GoalServiceTrait for GoalService {
    async fn create_goal(&self, team_member_id: i32, goal_text: String) -> Result<Goal> {
        if self.team_member_repo.get_by_id(team_member_id)?.is_none() {
            return Err(Error::TeamMemberNotFound(team_member_id));
        }

        let new_goal = NewGoal::new(team_member_id, goal_text, now_utc_seconds());
        let goal = self.goal_repo.insert(new_goal).await?;
        debug!("Created goal {} for team member {}", goal.id, team_member_id);
        Ok(goal)
    }

    async fn toggle_completion(&self, goal_id: i32) -> Result<Goal> {
        // The update is a no-op on a missing row; absence shows up in the re-read.
        self.goal_repo.toggle_completion(goal_id).await?;

        self.goal_repo
            .get_by_id(goal_id)?
            .ok_or(Error::GoalNotFound(goal_id))
    }

    async fn delete_goal(&self, goal_id: i32) -> Result<()> {
        let rows_affected = self.goal_repo.delete(goal_id).await?;
        if rows_affected == 0 {
            return Err(Error::GoalNotFound(goal_id));
        }
        debug!("Deleted goal {}", goal_id);
        Ok(())
    }
}
