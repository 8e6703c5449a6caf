use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    user::{
        entities::User,
        value_objects::{LoginInput, RegisterUserInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    fn get_by_id(&self, user_id: Uuid)
    -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    fn get_by_email(
        &self,
        email: String,
    ) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    /// Returns the shared guest row, if one has been created.
    fn get_guest(&self) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    /// Inserts a new user. A uniqueness conflict (email, or the single-guest
    /// index) surfaces as [`CoreError::UniqueViolation`].
    fn create_user(&self, user: User) -> impl Future<Output = Result<User, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait UserService: Send + Sync {
    fn register(
        &self,
        input: RegisterUserInput,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn login(&self, input: LoginInput) -> impl Future<Output = Result<User, CoreError>> + Send;

    /// Resolves an optional caller-supplied user id to a concrete [`User`],
    /// applying the configured default-identity policy when it is absent.
    fn resolve_identity(
        &self,
        user_id: Option<Uuid>,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;
}
