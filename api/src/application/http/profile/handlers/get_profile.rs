use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use smarteats_core::domain::preference::ports::PreferenceService;
use smarteats_core::domain::preference::value_objects::GetProfileInput;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ProfileResponse {
    pub user_id: Uuid,
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub diets: Vec<String>,
    pub allergens: Vec<String>,
    pub food_preferences: Vec<String>,
}

#[utoipa::path(
    get,
    path = "/profile/{user_id}",
    tag = "profile",
    summary = "Get profile",
    description = "Returns the user together with their current diet, allergen and \
                   food-preference names.",
    params(
        ("user_id" = Uuid, Path, description = "User id"),
    ),
    responses(
        (status = 200, body = ProfileResponse),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_profile(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<ProfileResponse>, ApiError> {
    let (user, profile) = state
        .service
        .get_profile(GetProfileInput { user_id })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ProfileResponse {
        user_id: user.id,
        display_name: user.display_name,
        email: user.email,
        diets: profile.diet_names(),
        allergens: profile.allergen_names(),
        food_preferences: profile.food_preference_names(),
    }))
}
