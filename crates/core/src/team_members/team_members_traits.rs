//! Team member repository and service traits.
//!
//! These traits define the contract for team member operations without any
//! database-specific types, allowing for different storage implementations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::team_members_model::{Mood, TeamMember};
use crate::errors::Result;

/// Trait defining the contract for TeamMember repository operations.
#[async_trait]
pub trait TeamMemberRepositoryTrait: Send + Sync {
    /// Lists all team members ordered by name.
    ///
    /// With `include_goals`, each member carries its goals newest first.
    fn list(&self, include_goals: bool) -> Result<Vec<TeamMember>>;

    /// Retrieves a team member by id, without goals.
    fn get_by_id(&self, member_id: i32) -> Result<Option<TeamMember>>;

    /// Writes mood and timestamp in one statement.
    ///
    /// Returns the number of updated records.
    async fn update_mood(
        &self,
        member_id: i32,
        mood: Mood,
        updated_at: DateTime<Utc>,
    ) -> Result<usize>;
}

/// Trait defining the contract for TeamMember service operations.
#[async_trait]
pub trait TeamMemberServiceTrait: Send + Sync {
    /// Lists all team members, alphabetically.
    fn list_all(&self, include_goals: bool) -> Result<Vec<TeamMember>>;

    /// Sets the member's mood and stamps it with the current time.
    async fn update_mood(&self, member_id: i32, mood: Mood) -> Result<TeamMember>;
}
