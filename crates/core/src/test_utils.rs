//! In-memory repositories for service tests.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Mutex;

use crate::errors::Result;
use crate::goals::{Goal, GoalRepositoryTrait, NewGoal};
use crate::team_members::{Mood, TeamMember, TeamMemberRepositoryTrait};

/// Backs both repository traits with plain vectors.
#[derive(Default)]
pub struct InMemoryStore {
    pub members: Mutex<Vec<TeamMember>>,
    pub goals: Mutex<Vec<Goal>>,
    next_goal_id: Mutex<i32>,
    pub writes: Mutex<usize>,
}

impl InMemoryStore {
    pub fn with_members(names: &[(i32, &str)]) -> Self {
        let store = InMemoryStore::default();
        {
            let mut members = store.members.lock().unwrap();
            for (id, name) in names {
                members.push(TeamMember {
                    id: *id,
                    name: name.to_string(),
                    current_mood: None,
                    mood_updated_at: None,
                    goals: Vec::new(),
                });
            }
        }
        store
    }

    pub fn write_count(&self) -> usize {
        *self.writes.lock().unwrap()
    }

    fn record_write(&self) {
        *self.writes.lock().unwrap() += 1;
    }
}

#[async_trait]
impl TeamMemberRepositoryTrait for InMemoryStore {
    fn list(&self, include_goals: bool) -> Result<Vec<TeamMember>> {
        let mut members = self.members.lock().unwrap().clone();
        members.sort_by(|a, b| a.name.cmp(&b.name));
        if include_goals {
            let goals = self.goals.lock().unwrap();
            for member in members.iter_mut() {
                let mut owned: Vec<Goal> = goals
                    .iter()
                    .filter(|g| g.team_member_id == member.id)
                    .cloned()
                    .collect();
                owned.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
                member.goals = owned;
            }
        }
        Ok(members)
    }

    fn get_by_id(&self, member_id: i32) -> Result<Option<TeamMember>> {
        Ok(self
            .members
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.id == member_id)
            .cloned())
    }

    async fn update_mood(
        &self,
        member_id: i32,
        mood: Mood,
        updated_at: DateTime<Utc>,
    ) -> Result<usize> {
        self.record_write();
        let mut members = self.members.lock().unwrap();
        match members.iter_mut().find(|m| m.id == member_id) {
            Some(member) => {
                member.current_mood = Some(mood);
                member.mood_updated_at = Some(updated_at);
                Ok(1)
            }
            None => Ok(0),
        }
    }
}

#[async_trait]
impl GoalRepositoryTrait for InMemoryStore {
    async fn insert(&self, new_goal: NewGoal) -> Result<Goal> {
        self.record_write();
        let id = {
            let mut next = self.next_goal_id.lock().unwrap();
            *next += 1;
            *next
        };
        let goal = new_goal.into_goal(id);
        self.goals.lock().unwrap().push(goal.clone());
        Ok(goal)
    }

    fn get_by_id(&self, goal_id: i32) -> Result<Option<Goal>> {
        Ok(self
            .goals
            .lock()
            .unwrap()
            .iter()
            .find(|g| g.id == goal_id)
            .cloned())
    }

    async fn toggle_completion(&self, goal_id: i32) -> Result<usize> {
        self.record_write();
        let mut goals = self.goals.lock().unwrap();
        match goals.iter_mut().find(|g| g.id == goal_id) {
            Some(goal) => {
                goal.is_completed = !goal.is_completed;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, goal_id: i32) -> Result<usize> {
        self.record_write();
        let mut goals = self.goals.lock().unwrap();
        let before = goals.len();
        goals.retain(|g| g.id != goal_id);
        Ok(before - goals.len())
    }
}
