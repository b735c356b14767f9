use std::sync::Arc;

use axum::{error_handling::HandleErrorLayer, http::HeaderValue, routing::get, Json, Router};
use tower::{timeout::TimeoutLayer, ServiceBuilder};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::{
    config::Config,
    error::{handle_middleware_error, method_not_allowed},
    main_lib::AppState,
    models,
};

pub mod goals;
pub mod health;
pub mod stats;
pub mod team_members;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthz,
        health::readyz,
        team_members::list_team_members,
        team_members::update_mood,
        goals::create_goal,
        goals::toggle_goal,
        goals::delete_goal,
        stats::get_daily_stats
    ),
    components(schemas(
        models::Mood,
        models::Goal,
        models::TeamMember,
        models::DailyStats,
        models::GoalCreateRequest,
        models::MoodUpdateRequest
    )),
    tags((name = "team-tracker"))
)]
pub struct ApiDoc;

fn cors_layer(config: &Config) -> CorsLayer {
    let base = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if config.cors_allow.iter().any(|o| o == "*") {
        return base.allow_origin(Any);
    }

    let origins = config
        .cors_allow
        .iter()
        .filter_map(|o| match o.parse() {
            Ok(origin) => Some(origin),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", o);
                None
            }
        })
        .collect::<Vec<HeaderValue>>();
    base.allow_origin(origins)
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let openapi = ApiDoc::openapi();

    let api = Router::new()
        .merge(health::router())
        .merge(team_members::router())
        .merge(goals::router())
        .merge(stats::router())
        .method_not_allowed_fallback(method_not_allowed);

    Router::new()
        .nest("/api", api)
        .route("/openapi.json", get(|| async { Json(openapi) }))
        .with_state(state)
        .layer(cors_layer(config))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_middleware_error))
                .layer(TimeoutLayer::new(config.request_timeout)),
        )
        .layer(TraceLayer::new_for_http())
}
