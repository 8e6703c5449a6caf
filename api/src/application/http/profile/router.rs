use super::handlers::get_profile::{__path_get_profile, get_profile};
use super::handlers::update_profile::{__path_update_profile, update_profile};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(update_profile, get_profile))]
pub struct ProfileApiDoc;

pub fn profile_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/profile", state.args.server.root_path),
            post(update_profile),
        )
        .route(
            &format!("{}/profile/{{user_id}}", state.args.server.root_path),
            get(get_profile),
        )
}
