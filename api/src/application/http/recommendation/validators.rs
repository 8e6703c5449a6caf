use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

fn default_message() -> String {
    "What should I eat today?".to_owned()
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct RecommendValidator {
    /// Absent means the request runs under the default identity policy.
    #[serde(default)]
    pub user_id: Option<Uuid>,

    #[serde(default = "default_message")]
    #[validate(length(min = 1, message = "message must not be empty"))]
    pub message: String,
}
