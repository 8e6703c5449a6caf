use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub display_name: Option<String>,
    pub email: Option<String>,
    #[serde(skip_serializing)]
    pub password_hash: Option<String>,
    pub is_guest: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(display_name: Option<String>, email: String, password_hash: String) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            display_name,
            email: Some(email),
            password_hash: Some(password_hash),
            is_guest: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Shared anonymous identity. Carries no credentials; uniqueness is
    /// enforced by the store (at most one guest row can exist).
    pub fn guest(display_name: String) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            display_name: Some(display_name),
            email: None,
            password_hash: None,
            is_guest: true,
            created_at: now,
            updated_at: now,
        }
    }
}
