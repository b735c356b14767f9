use crate::errors::Result;
use crate::goals::goals_model::{Goal, NewGoal};
use async_trait::async_trait;

/// Trait for goal repository operations
#[async_trait]
pub trait GoalRepositoryTrait: Send + Sync {
    async fn insert(&self, new_goal: NewGoal) -> Result<Goal>;
    fn get_by_id(&self, goal_id: i32) -> Result<Option<Goal>>;
    /// Flips the completion flag unconditionally. Returns affected rows.
    async fn toggle_completion(&self, goal_id: i32) -> Result<usize>;
    /// Returns affected rows.
    async fn delete(&self, goal_id: i32) -> Result<usize>;
}

/// Trait for goal service operations
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    async fn create_goal(&self, team_member_id: i32, goal_text: String) -> Result<Goal>;
    async fn toggle_completion(&self, goal_id: i32) -> Result<Goal>;
    async fn delete_goal(&self, goal_id: i32) -> Result<()>;
}
