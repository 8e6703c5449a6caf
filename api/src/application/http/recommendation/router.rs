use super::handlers::recommend::{__path_recommend, recommend};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(recommend))]
pub struct RecommendationApiDoc;

pub fn recommendation_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/llm/recommend", state.args.server.root_path),
        post(recommend),
    )
}
