use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

/// The three independent namespaces a user can hold preferences in. Each
/// category has its own set of canonical entities; names are only unique
/// within one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PreferenceCategory {
    Diet,
    Allergen,
    FoodPreference,
}

impl PreferenceCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            PreferenceCategory::Diet => "diet",
            PreferenceCategory::Allergen => "allergen",
            PreferenceCategory::FoodPreference => "food_preference",
        }
    }
}

impl std::fmt::Display for PreferenceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single deduplicated record for a named diet / allergen / food
/// preference. Shared across users and never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CanonicalEntity {
    pub id: Uuid,
    pub category: PreferenceCategory,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl CanonicalEntity {
    pub fn new(category: PreferenceCategory, name: String) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            category,
            name,
            created_at: now,
        }
    }
}

/// A user's resolved links, one list per category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PreferenceProfile {
    pub diets: Vec<CanonicalEntity>,
    pub allergens: Vec<CanonicalEntity>,
    pub food_preferences: Vec<CanonicalEntity>,
}

impl PreferenceProfile {
    pub fn allergen_names(&self) -> Vec<String> {
        self.allergens.iter().map(|e| e.name.clone()).collect()
    }

    pub fn diet_names(&self) -> Vec<String> {
        self.diets.iter().map(|e| e.name.clone()).collect()
    }

    pub fn food_preference_names(&self) -> Vec<String> {
        self.food_preferences.iter().map(|e| e.name.clone()).collect()
    }
}
