use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Profile form payload. The three preference fields arrive as
/// comma-separated free text ("vegan, gluten-free"), matching what the
/// profile form submits.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProfileValidator {
    /// Absent means the request runs under the default identity policy.
    #[serde(default)]
    pub user_id: Option<Uuid>,

    #[serde(default)]
    pub diet_preferences: Option<String>,

    #[serde(default)]
    pub allergies: Option<String>,

    #[serde(default)]
    pub restricted_foods: Option<String>,
}
