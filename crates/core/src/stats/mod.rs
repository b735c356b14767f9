//! Stats module - read-only daily summary over members and goals.

mod stats_model;
mod stats_service;

pub use stats_model::DailyStats;
pub use stats_service::{summarize, StatsService, StatsServiceTrait};
