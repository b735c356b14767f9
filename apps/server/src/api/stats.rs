use std::sync::Arc;

use crate::{
    error::ApiResult,
    extract::ApiQuery,
    main_lib::AppState,
    models::{DailyStats, DataEnvelope, StatsQuery},
};
use axum::{extract::State, routing::get, Json, Router};
use team_tracker_core::utils::time_utils::today_utc;

#[utoipa::path(
    get,
    path = "/api/stats",
    params(("date" = Option<String>, Query, description = "UTC day as YYYY-MM-DD, defaults to today")),
    responses((status = 200, description = "Daily summary, wrapped in `data`", body = DailyStats))
)]
pub async fn get_daily_stats(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<StatsQuery>,
) -> ApiResult<Json<DataEnvelope<DailyStats>>> {
    let date = query.date.unwrap_or_else(today_utc);
    let stats = state.stats_service.daily_stats(date)?;
    Ok(Json(DataEnvelope::new(DailyStats::from(stats))))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/stats", get(get_daily_stats))
}
