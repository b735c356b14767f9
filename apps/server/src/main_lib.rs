use std::sync::Arc;

use crate::config::Config;
use team_tracker_core::{
    goals::{GoalService, GoalServiceTrait},
    stats::{StatsService, StatsServiceTrait},
    team_members::{TeamMemberService, TeamMemberServiceTrait},
};
use team_tracker_storage_sqlite::{
    db::{self, write_actor, DbPool},
    goals::GoalRepository,
    team_members::TeamMemberRepository,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub team_member_service: Arc<dyn TeamMemberServiceTrait + Send + Sync>,
    pub goal_service: Arc<dyn GoalServiceTrait + Send + Sync>,
    pub stats_service: Arc<dyn StatsServiceTrait + Send + Sync>,
    pub pool: Arc<DbPool>,
}

pub fn init_tracing() {
    let log_format = std::env::var("TT_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = write_actor::spawn_writer((*pool).clone());

    let team_member_repo = Arc::new(TeamMemberRepository::new(pool.clone(), writer.clone()));
    let goal_repo = Arc::new(GoalRepository::new(pool.clone(), writer));

    let team_member_service = Arc::new(TeamMemberService::new(team_member_repo.clone()));
    let goal_service = Arc::new(GoalService::new(goal_repo, team_member_repo.clone()));
    let stats_service = Arc::new(StatsService::new(team_member_repo));

    Ok(Arc::new(AppState {
        team_member_service,
        goal_service,
        stats_service,
        pool,
    }))
}
