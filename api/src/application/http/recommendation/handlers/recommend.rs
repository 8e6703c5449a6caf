use axum::extract::State;
use serde::{Deserialize, Serialize};
use smarteats_core::domain::recommendation::ports::RecommendationService;
use smarteats_core::domain::recommendation::value_objects::{
    ProfileSummary, RecommendInput, RecommendationOutcome,
};
use utoipa::ToSchema;

use crate::application::http::recommendation::validators::RecommendValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RecommendResponse {
    pub profile_used: ProfileSummary,
    pub user_message: String,
    /// Absent when every menu item was excluded by the user's allergens.
    pub llm_answer: Option<String>,
    pub no_safe_items: bool,
}

#[utoipa::path(
    post,
    path = "/llm/recommend",
    tag = "recommendation",
    summary = "Recommend a meal",
    description = "Filters the menu catalog by the user's allergens and asks the language \
                   model for one recommendation from the remaining items.",
    responses(
        (status = 200, body = RecommendResponse),
        (status = 404, description = "User not found"),
        (status = 503, description = "Model service unreachable"),
        (status = 504, description = "Model request timed out")
    ),
    request_body = RecommendValidator
)]
pub async fn recommend(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<RecommendValidator>,
) -> Result<Response<RecommendResponse>, ApiError> {
    let outcome = state
        .service
        .recommend(RecommendInput {
            user_id: payload.user_id,
            message: payload.message.clone(),
        })
        .await
        .map_err(ApiError::from)?;

    let response = match outcome {
        RecommendationOutcome::Reply { profile, answer } => RecommendResponse {
            profile_used: profile,
            user_message: payload.message,
            llm_answer: Some(answer),
            no_safe_items: false,
        },
        RecommendationOutcome::NoSafeItems { profile } => RecommendResponse {
            profile_used: profile,
            user_message: payload.message,
            llm_answer: None,
            no_safe_items: true,
        },
    };

    Ok(Response::OK(response))
}
