use async_trait::async_trait;
use chrono::NaiveDate;
use log::debug;
use std::collections::BTreeMap;
use std::sync::Arc;

use super::stats_model::DailyStats;
use crate::errors::Result;
use crate::team_members::{TeamMember, TeamMemberRepositoryTrait};
use crate::utils::time_utils::utc_date;

#[async_trait]
pub trait StatsServiceTrait: Send + Sync {
    fn daily_stats(&self, date: NaiveDate) -> Result<DailyStats>;
}

pub struct StatsService {
    team_member_repo: Arc<dyn TeamMemberRepositoryTrait>,
}

impl StatsService {
    pub fn new(team_member_repo: Arc<dyn TeamMemberRepositoryTrait>) -> Self {
        Self { team_member_repo }
    }
}

#[async_trait]
impl StatsServiceTrait for StatsService {
    fn daily_stats(&self, date: NaiveDate) -> Result<DailyStats> {
        let members = self.team_member_repo.list(true)?;
        debug!("Computing stats for {} over {} members", date, members.len());
        Ok(summarize(date, &members))
    }
}

/// Folds members (with goals) into the summary for `date`.
pub fn summarize(date: NaiveDate, members: &[TeamMember]) -> DailyStats {
    let mut total_goals = 0;
    let mut completed_goals = 0;
    let mut mood_breakdown = BTreeMap::new();

    for member in members {
        for goal in member.goals.iter().filter(|g| utc_date(&g.created_at) == date) {
            total_goals += 1;
            if goal.is_completed {
                completed_goals += 1;
            }
        }

        if let (Some(mood), Some(updated_at)) = (member.current_mood, member.mood_updated_at) {
            if utc_date(&updated_at) == date {
                *mood_breakdown.entry(mood).or_insert(0) += 1;
            }
        }
    }

    let completion_rate = if total_goals == 0 {
        0.0
    } else {
        completed_goals as f64 / total_goals as f64
    };

    DailyStats {
        date,
        total_goals,
        completed_goals,
        completion_rate,
        mood_breakdown,
        team_size: members.len(),
    }
}
