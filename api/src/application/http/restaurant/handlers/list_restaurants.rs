use axum::extract::State;
use serde::{Deserialize, Serialize};
use smarteats_core::domain::menu::entities::RestaurantMenu;
use smarteats_core::domain::menu::ports::MenuRepository;
use utoipa::ToSchema;

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ListRestaurantsResponse {
    pub data: Vec<RestaurantMenu>,
}

#[utoipa::path(
    get,
    path = "/restaurants",
    tag = "restaurant",
    summary = "List restaurants",
    description = "Returns the full menu catalog: every restaurant with its menu items.",
    responses(
        (status = 200, body = ListRestaurantsResponse)
    )
)]
pub async fn list_restaurants(
    State(state): State<AppState>,
) -> Result<Response<ListRestaurantsResponse>, ApiError> {
    let catalog = state
        .service
        .menu_repository
        .fetch_catalog()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ListRestaurantsResponse { data: catalog }))
}
