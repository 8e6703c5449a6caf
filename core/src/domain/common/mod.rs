use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp, Uuid};

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct SmartEatsConfig {
    pub database: DatabaseConfig,
    pub model: ModelConfig,
    pub identity: IdentityConfig,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
}

#[derive(Clone, Debug)]
pub struct ModelConfig {
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
}

/// Policy applied when a request carries no user identifier.
#[derive(Clone, Debug)]
pub struct IdentityConfig {
    pub default_identity: DefaultIdentity,
}

#[derive(Clone, Debug)]
pub enum DefaultIdentity {
    /// Anonymous requests are served under a single shared guest user,
    /// created lazily on first use.
    Guest { display_name: String },
    /// Anonymous requests are rejected.
    RequireUser,
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, 0);

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}
