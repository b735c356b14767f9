use std::sync::Arc;

use crate::{
    error::ApiResult,
    extract::{ApiJson, ApiPath},
    main_lib::AppState,
    models::{DataEnvelope, Goal, GoalCreateRequest},
};
use axum::{
    extract::State,
    http::StatusCode,
    routing::{delete, post, put},
    Json, Router,
};

#[utoipa::path(
    post,
    path = "/api/goals",
    request_body = GoalCreateRequest,
    responses(
        (status = 201, description = "Created goal, wrapped in `data`", body = Goal),
        (status = 400, description = "VALIDATION_ERROR"),
        (status = 404, description = "TEAM_MEMBER_NOT_FOUND")
    )
)]
pub async fn create_goal(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<GoalCreateRequest>,
) -> ApiResult<(StatusCode, Json<DataEnvelope<Goal>>)> {
    let (team_member_id, goal_text) = payload.validate()?;
    let goal = state
        .goal_service
        .create_goal(team_member_id, goal_text)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(DataEnvelope::new(Goal::from(goal))),
    ))
}

#[utoipa::path(
    put,
    path = "/api/goals/{id}/toggle",
    params(("id" = i32, Path, description = "Goal id")),
    responses(
        (status = 200, description = "Goal after the flip, wrapped in `data`", body = Goal),
        (status = 404, description = "GOAL_NOT_FOUND")
    )
)]
pub async fn toggle_goal(
    ApiPath(id): ApiPath<i32>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<DataEnvelope<Goal>>> {
    let goal = state.goal_service.toggle_completion(id).await?;
    Ok(Json(DataEnvelope::new(Goal::from(goal))))
}

#[utoipa::path(
    delete,
    path = "/api/goals/{id}",
    params(("id" = i32, Path, description = "Goal id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "GOAL_NOT_FOUND")
    )
)]
pub async fn delete_goal(
    ApiPath(id): ApiPath<i32>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.goal_service.delete_goal(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/goals", post(create_goal))
        .route("/goals/{id}/toggle", put(toggle_goal))
        .route("/goals/{id}", delete(delete_goal))
}
