use axum::extract::State;
use serde::{Deserialize, Serialize};
use smarteats_core::domain::user::entities::User;
use smarteats_core::domain::user::ports::UserService;
use smarteats_core::domain::user::value_objects::RegisterUserInput;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::http::user::validators::RegisterValidator;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UserResponse {
    pub user_id: Uuid,
    pub display_name: Option<String>,
    pub email: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            user_id: user.id,
            display_name: user.display_name,
            email: user.email,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RegisterResponse {
    pub data: UserResponse,
}

#[utoipa::path(
    post,
    path = "/register",
    tag = "user",
    summary = "Register user",
    description = "Creates a new user account. The email must not already be registered.",
    responses(
        (status = 201, body = RegisterResponse),
        (status = 400, description = "Email already registered or malformed input")
    ),
    request_body = RegisterValidator
)]
pub async fn register(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<RegisterValidator>,
) -> Result<Response<RegisterResponse>, ApiError> {
    let user = state
        .service
        .register(RegisterUserInput {
            name: payload.name,
            email: payload.email,
            password: payload.password,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(RegisterResponse {
        data: user.into(),
    }))
}
