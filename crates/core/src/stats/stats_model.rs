use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::team_members::Mood;

/// Summary of one UTC day of team activity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyStats {
    pub date: NaiveDate,
    /// Goals created on `date`.
    pub total_goals: usize,
    /// Goals created on `date` that are completed.
    pub completed_goals: usize,
    /// `completed_goals / total_goals`, 0 when no goals were created.
    pub completion_rate: f64,
    /// Moods reported on `date`, by value.
    pub mood_breakdown: BTreeMap<Mood, usize>,
    pub team_size: usize,
}
