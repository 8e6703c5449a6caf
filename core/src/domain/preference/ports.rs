use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    preference::{
        entities::{CanonicalEntity, PreferenceCategory, PreferenceProfile},
        value_objects::{GetProfileInput, UpdateProfileInput},
    },
    user::entities::User,
};

#[cfg_attr(test, mockall::automock)]
pub trait PreferenceRepository: Send + Sync {
    /// Exact-match lookup on the trimmed name within one category.
    fn get_by_name(
        &self,
        category: PreferenceCategory,
        name: String,
    ) -> impl Future<Output = Result<Option<CanonicalEntity>, CoreError>> + Send;

    /// Inserts a new canonical entity. A concurrent insert of the same
    /// `(category, name)` surfaces as [`CoreError::UniqueViolation`].
    fn insert_entity(
        &self,
        entity: CanonicalEntity,
    ) -> impl Future<Output = Result<CanonicalEntity, CoreError>> + Send;

    fn list_for_user(
        &self,
        user_id: Uuid,
        category: PreferenceCategory,
    ) -> impl Future<Output = Result<Vec<CanonicalEntity>, CoreError>> + Send;

    /// Replaces the user's link set for one category: delete-old plus
    /// insert-new runs inside a single transaction, so concurrent readers
    /// never observe a partial state.
    fn replace_links(
        &self,
        user_id: Uuid,
        category: PreferenceCategory,
        entity_ids: Vec<Uuid>,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait PreferenceService: Send + Sync {
    /// Resolves a free-text name to the canonical entity of its category,
    /// creating one on first use. Idempotent.
    fn resolve(
        &self,
        category: PreferenceCategory,
        name: String,
    ) -> impl Future<Output = Result<CanonicalEntity, CoreError>> + Send;

    /// Replace-all reconciliation of one user's links in one category.
    fn reconcile(
        &self,
        user_id: Uuid,
        category: PreferenceCategory,
        names: Vec<String>,
    ) -> impl Future<Output = Result<Vec<CanonicalEntity>, CoreError>> + Send;

    fn update_profile(
        &self,
        input: UpdateProfileInput,
    ) -> impl Future<Output = Result<(Uuid, PreferenceProfile), CoreError>> + Send;

    /// Returns the user together with their resolved links per category.
    fn get_profile(
        &self,
        input: GetProfileInput,
    ) -> impl Future<Output = Result<(User, PreferenceProfile), CoreError>> + Send;
}
