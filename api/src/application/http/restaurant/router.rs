use super::handlers::list_restaurants::{__path_list_restaurants, list_restaurants};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(list_restaurants))]
pub struct RestaurantApiDoc;

pub fn restaurant_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/restaurants", state.args.server.root_path),
        get(list_restaurants),
    )
}
