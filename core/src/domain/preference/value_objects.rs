use uuid::Uuid;

pub struct UpdateProfileInput {
    /// Absent means the configured default-identity policy applies.
    pub user_id: Option<Uuid>,
    pub diets: Vec<String>,
    pub allergens: Vec<String>,
    pub food_preferences: Vec<String>,
}

pub struct GetProfileInput {
    pub user_id: Uuid,
}
