use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::preference::entities::PreferenceProfile;

pub struct RecommendInput {
    /// Absent means the configured default-identity policy applies.
    pub user_id: Option<Uuid>,
    pub message: String,
}

/// Plain-name view of a profile, the shape the prompt renders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProfileSummary {
    pub diets: Vec<String>,
    pub allergens: Vec<String>,
    pub food_preferences: Vec<String>,
}

impl From<&PreferenceProfile> for ProfileSummary {
    fn from(profile: &PreferenceProfile) -> Self {
        Self {
            diets: profile.diet_names(),
            allergens: profile.allergen_names(),
            food_preferences: profile.food_preference_names(),
        }
    }
}

/// Outcome of a recommendation request. Filtering the whole catalog away is a
/// normal result, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecommendationOutcome {
    Reply {
        profile: ProfileSummary,
        answer: String,
    },
    NoSafeItems {
        profile: ProfileSummary,
    },
}
