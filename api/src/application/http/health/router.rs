use super::handlers::liveness::{__path_liveness, liveness};
use super::handlers::readiness::{__path_readiness, readiness};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(liveness, readiness))]
pub struct HealthApiDoc;

pub fn health_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(&format!("{}/health", state.args.server.root_path), get(liveness))
        .route(
            &format!("{}/health/readiness", state.args.server.root_path),
            get(readiness),
        )
}
