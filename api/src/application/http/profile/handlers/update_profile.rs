use axum::extract::State;
use serde::{Deserialize, Serialize};
use smarteats_core::domain::preference::helpers::parse_name_list;
use smarteats_core::domain::preference::ports::PreferenceService;
use smarteats_core::domain::preference::value_objects::UpdateProfileInput;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::profile::validators::UpdateProfileValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateProfileResponse {
    pub user_id: Uuid,
    pub diets: Vec<String>,
    pub allergens: Vec<String>,
    pub food_preferences: Vec<String>,
}

#[utoipa::path(
    post,
    path = "/profile",
    tag = "profile",
    summary = "Update profile",
    description = "Replaces the user's diet, allergen and food-preference sets with the \
                   submitted values. Each category is replaced as a whole.",
    responses(
        (status = 200, body = UpdateProfileResponse),
        (status = 404, description = "User not found")
    ),
    request_body = UpdateProfileValidator
)]
pub async fn update_profile(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdateProfileValidator>,
) -> Result<Response<UpdateProfileResponse>, ApiError> {
    let (user_id, profile) = state
        .service
        .update_profile(UpdateProfileInput {
            user_id: payload.user_id,
            diets: parse_name_list(payload.diet_preferences.as_deref().unwrap_or_default()),
            allergens: parse_name_list(payload.allergies.as_deref().unwrap_or_default()),
            food_preferences: parse_name_list(
                payload.restricted_foods.as_deref().unwrap_or_default(),
            ),
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateProfileResponse {
        user_id,
        diets: profile.diet_names(),
        allergens: profile.allergen_names(),
        food_preferences: profile.food_preference_names(),
    }))
}
