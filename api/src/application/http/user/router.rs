use super::handlers::login::{__path_login, login};
use super::handlers::register::{__path_register, register};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(register, login))]
pub struct UserApiDoc;

pub fn user_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/register", state.args.server.root_path),
            post(register),
        )
        .route(&format!("{}/login", state.args.server.root_path), post(login))
}
