use axum::extract::State;
use smarteats_core::domain::health::entities::DatabaseHealthStatus;
use smarteats_core::domain::health::ports::HealthCheckService;

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    get,
    path = "/health/readiness",
    tag = "health",
    summary = "Readiness",
    description = "Pings the database and reports the round-trip latency.",
    responses(
        (status = 200, body = DatabaseHealthStatus),
        (status = 500, description = "Database unreachable")
    )
)]
pub async fn readiness(
    State(state): State<AppState>,
) -> Result<Response<DatabaseHealthStatus>, ApiError> {
    let status = state.service.readiness().await.map_err(ApiError::from)?;

    Ok(Response::OK(status))
}
