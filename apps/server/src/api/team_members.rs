use std::sync::Arc;

use crate::{
    error::ApiResult,
    extract::{ApiJson, ApiPath, ApiQuery},
    main_lib::AppState,
    models::{DataEnvelope, ListTeamMembersQuery, MoodUpdateRequest, TeamMember},
};
use axum::{
    extract::State,
    routing::{get, put},
    Json, Router,
};

#[utoipa::path(
    get,
    path = "/api/team-members",
    params(("includeGoals" = Option<bool>, Query, description = "Nest each member's goals, newest first")),
    responses((status = 200, description = "Members ordered by name, wrapped in `data`", body = [TeamMember]))
)]
pub async fn list_team_members(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<ListTeamMembersQuery>,
) -> ApiResult<Json<DataEnvelope<Vec<TeamMember>>>> {
    let members = state.team_member_service.list_all(query.include_goals)?;
    Ok(Json(DataEnvelope::new(
        members.into_iter().map(TeamMember::from).collect(),
    )))
}

#[utoipa::path(
    put,
    path = "/api/team-members/{id}/mood",
    params(("id" = i32, Path, description = "Team member id")),
    request_body = MoodUpdateRequest,
    responses(
        (status = 200, description = "Updated member, wrapped in `data`", body = TeamMember),
        (status = 400, description = "VALIDATION_ERROR"),
        (status = 404, description = "TEAM_MEMBER_NOT_FOUND")
    )
)]
pub async fn update_mood(
    ApiPath(id): ApiPath<i32>,
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<MoodUpdateRequest>,
) -> ApiResult<Json<DataEnvelope<TeamMember>>> {
    let mood = payload.validate()?;
    let member = state.team_member_service.update_mood(id, mood).await?;
    Ok(Json(DataEnvelope::new(TeamMember::from(member))))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/team-members", get(list_team_members))
        .route("/team-members/{id}/mood", put(update_mood))
}
