use axum::Json;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use utoipa::ToSchema;
use validator::Validate;

use smarteats_core::domain::common::entities::app_errors::CoreError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    UnprocessableEntity(String),

    #[error("{0}")]
    ServiceUnavailable(String),

    #[error("{0}")]
    GatewayTimeout(String),

    #[error("{0}")]
    InternalServerError(String),
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiErrorResponse {
    pub code: String,
    pub message: String,
    pub status: u16,
}

impl ApiError {
    fn parts(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            ApiError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "unauthorized"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            ApiError::UnprocessableEntity(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "unprocessable_entity")
            }
            ApiError::ServiceUnavailable(_) => {
                (StatusCode::SERVICE_UNAVAILABLE, "service_unavailable")
            }
            ApiError::GatewayTimeout(_) => (StatusCode::GATEWAY_TIMEOUT, "gateway_timeout"),
            ApiError::InternalServerError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_server_error")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, code) = self.parts();
        let body = ApiErrorResponse {
            code: code.to_owned(),
            message: self.to_string(),
            status: status.as_u16(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::InvalidInput(message) => ApiError::BadRequest(message),
            CoreError::EmailAlreadyExists => {
                ApiError::BadRequest("this email address is already registered".to_owned())
            }
            CoreError::UserNotFound => ApiError::NotFound("user not found".to_owned()),
            CoreError::InvalidCredentials => {
                ApiError::Unauthorized("invalid email or password".to_owned())
            }
            CoreError::AnonymousAccessDenied => {
                ApiError::Unauthorized("a user id is required".to_owned())
            }
            CoreError::ModelUnavailable(message) => ApiError::ServiceUnavailable(message),
            CoreError::ModelTimeout(message) => ApiError::GatewayTimeout(message),
            CoreError::UniqueViolation | CoreError::InternalServerError => {
                ApiError::InternalServerError("internal server error".to_owned())
            }
        }
    }
}

/// Json extractor that also runs `validator` rules before the handler sees
/// the payload.
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| ApiError::UnprocessableEntity(errors.to_string()))?;

        Ok(ValidateJson(value))
    }
}
