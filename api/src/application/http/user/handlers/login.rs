use axum::extract::State;
use serde::{Deserialize, Serialize};
use smarteats_core::domain::user::ports::UserService;
use smarteats_core::domain::user::value_objects::LoginInput;
use utoipa::ToSchema;

use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::http::user::handlers::register::UserResponse;
use crate::application::http::user::validators::LoginValidator;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct LoginResponse {
    pub data: UserResponse,
}

#[utoipa::path(
    post,
    path = "/login",
    tag = "user",
    summary = "Log in",
    description = "Checks the supplied credentials and returns the matching user.",
    responses(
        (status = 200, body = LoginResponse),
        (status = 401, description = "Unknown email or wrong password")
    ),
    request_body = LoginValidator
)]
pub async fn login(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<LoginValidator>,
) -> Result<Response<LoginResponse>, ApiError> {
    let user = state
        .service
        .login(LoginInput {
            email: payload.email,
            password: payload.password,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(LoginResponse { data: user.into() }))
}
