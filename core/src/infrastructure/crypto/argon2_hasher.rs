use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};
use tracing::error;

use crate::domain::{common::entities::app_errors::CoreError, crypto::ports::HasherRepository};

#[derive(Debug, Clone, Default)]
pub struct Argon2HasherRepository;

impl Argon2HasherRepository {
    pub fn new() -> Self {
        Self
    }
}

impl HasherRepository for Argon2HasherRepository {
    async fn hash_password(&self, password: String) -> Result<String, CoreError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| {
                error!("Failed to hash password: {e}");
                CoreError::InternalServerError
            })?;

        Ok(hash.to_string())
    }

    async fn verify_password(&self, password: String, hash: String) -> Result<bool, CoreError> {
        let parsed = PasswordHash::new(&hash).map_err(|e| {
            error!("Stored password hash is malformed: {e}");
            CoreError::InternalServerError
        })?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}
