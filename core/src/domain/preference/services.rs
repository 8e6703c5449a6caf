use tracing::debug;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    menu::ports::MenuRepository,
    preference::{
        entities::{CanonicalEntity, PreferenceCategory, PreferenceProfile},
        helpers::normalize_names,
        ports::{PreferenceRepository, PreferenceService},
        value_objects::{GetProfileInput, UpdateProfileInput},
    },
    recommendation::ports::ModelClient,
    user::{
        entities::User,
        ports::{UserRepository, UserService},
    },
};

impl<U, P, M, HC, H, LM> PreferenceService for Service<U, P, M, HC, H, LM>
where
    U: UserRepository,
    P: PreferenceRepository,
    M: MenuRepository,
    HC: HealthCheckRepository,
    H: HasherRepository,
    LM: ModelClient,
{
    async fn resolve(
        &self,
        category: PreferenceCategory,
        name: String,
    ) -> Result<CanonicalEntity, CoreError> {
        let name = name.trim().to_owned();
        if name.is_empty() {
            return Err(CoreError::InvalidInput(format!(
                "{category} name must not be empty"
            )));
        }

        if let Some(existing) = self
            .preference_repository
            .get_by_name(category, name.clone())
            .await?
        {
            return Ok(existing);
        }

        let entity = CanonicalEntity::new(category, name.clone());
        match self.preference_repository.insert_entity(entity).await {
            Ok(created) => {
                debug!(%category, name, "created canonical entity");
                Ok(created)
            }
            // Lost the creation race; the unique index on (category, name)
            // is the authority. Return the winner's row.
            Err(CoreError::UniqueViolation) => self
                .preference_repository
                .get_by_name(category, name)
                .await?
                .ok_or(CoreError::InternalServerError),
            Err(e) => Err(e),
        }
    }

    async fn reconcile(
        &self,
        user_id: Uuid,
        category: PreferenceCategory,
        names: Vec<String>,
    ) -> Result<Vec<CanonicalEntity>, CoreError> {
        self.user_repository
            .get_by_id(user_id)
            .await?
            .ok_or(CoreError::UserNotFound)?;

        let mut entities = Vec::new();
        for name in normalize_names(names) {
            entities.push(self.resolve(category, name).await?);
        }

        let entity_ids = entities.iter().map(|e| e.id).collect();
        self.preference_repository
            .replace_links(user_id, category, entity_ids)
            .await?;

        debug!(%user_id, %category, count = entities.len(), "reconciled preference links");
        Ok(entities)
    }

    async fn update_profile(
        &self,
        input: UpdateProfileInput,
    ) -> Result<(Uuid, PreferenceProfile), CoreError> {
        let user = self.resolve_identity(input.user_id).await?;

        // The three categories reconcile independently; an allergen failure
        // after diets committed leaves the diets in place.
        let diets = self
            .reconcile(user.id, PreferenceCategory::Diet, input.diets)
            .await?;
        let allergens = self
            .reconcile(user.id, PreferenceCategory::Allergen, input.allergens)
            .await?;
        let food_preferences = self
            .reconcile(
                user.id,
                PreferenceCategory::FoodPreference,
                input.food_preferences,
            )
            .await?;

        Ok((
            user.id,
            PreferenceProfile {
                diets,
                allergens,
                food_preferences,
            },
        ))
    }

    async fn get_profile(
        &self,
        input: GetProfileInput,
    ) -> Result<(User, PreferenceProfile), CoreError> {
        let user = self
            .user_repository
            .get_by_id(input.user_id)
            .await?
            .ok_or(CoreError::UserNotFound)?;

        let diets = self
            .preference_repository
            .list_for_user(input.user_id, PreferenceCategory::Diet)
            .await?;
        let allergens = self
            .preference_repository
            .list_for_user(input.user_id, PreferenceCategory::Allergen)
            .await?;
        let food_preferences = self
            .preference_repository
            .list_for_user(input.user_id, PreferenceCategory::FoodPreference)
            .await?;

        Ok((
            user,
            PreferenceProfile {
                diets,
                allergens,
                food_preferences,
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::services::test_support::mock_service;
    use crate::domain::user::entities::User;
    use mockall::predicate::eq;

    fn entity(category: PreferenceCategory, name: &str) -> CanonicalEntity {
        CanonicalEntity::new(category, name.to_owned())
    }

    #[tokio::test]
    async fn resolve_returns_existing_entity_without_insert() {
        let mut service = mock_service();
        let vegan = entity(PreferenceCategory::Diet, "vegan");
        let existing = vegan.clone();
        service
            .preference_repository
            .expect_get_by_name()
            .with(eq(PreferenceCategory::Diet), eq("vegan".to_owned()))
            .returning(move |_, _| Box::pin(std::future::ready(Ok(Some(existing.clone())))));
        service.preference_repository.expect_insert_entity().never();

        let resolved = service
            .resolve(PreferenceCategory::Diet, " vegan ".to_owned())
            .await
            .unwrap();

        assert_eq!(resolved.id, vegan.id);
    }

    #[tokio::test]
    async fn resolve_creates_on_first_use() {
        let mut service = mock_service();
        service
            .preference_repository
            .expect_get_by_name()
            .returning(|_, _| Box::pin(std::future::ready(Ok(None))));
        service
            .preference_repository
            .expect_insert_entity()
            .withf(|e| e.category == PreferenceCategory::Allergen && e.name == "peanut")
            .returning(|e| Box::pin(std::future::ready(Ok(e))));

        let resolved = service
            .resolve(PreferenceCategory::Allergen, "peanut".to_owned())
            .await
            .unwrap();

        assert_eq!(resolved.name, "peanut");
    }

    #[tokio::test]
    async fn resolve_rejects_blank_name() {
        let service = mock_service();

        let result = service
            .resolve(PreferenceCategory::Diet, "   ".to_owned())
            .await;

        assert!(matches!(result, Err(CoreError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn resolve_lost_race_returns_winner() {
        let mut service = mock_service();
        let winner = entity(PreferenceCategory::Allergen, "milk");
        let winner_id = winner.id;

        let mut lookups = 0;
        service
            .preference_repository
            .expect_get_by_name()
            .returning(move |_, _| {
                lookups += 1;
                if lookups == 1 {
                    Box::pin(std::future::ready(Ok(None)))
                } else {
                    Box::pin(std::future::ready(Ok(Some(winner.clone()))))
                }
            });
        service
            .preference_repository
            .expect_insert_entity()
            .returning(|_| Box::pin(std::future::ready(Err(CoreError::UniqueViolation))));

        let resolved = service
            .resolve(PreferenceCategory::Allergen, "milk".to_owned())
            .await
            .unwrap();

        assert_eq!(resolved.id, winner_id);
    }

    #[tokio::test]
    async fn reconcile_replaces_links_with_resolved_set() {
        let mut service = mock_service();
        let user = User::new(None, "a@b.c".into(), "h".into());
        let user_id = user.id;
        service
            .user_repository
            .expect_get_by_id()
            .returning(move |_| Box::pin(std::future::ready(Ok(Some(user.clone())))));

        let vegan = entity(PreferenceCategory::Diet, "vegan");
        let keto = entity(PreferenceCategory::Diet, "keto");
        let (vegan_id, keto_id) = (vegan.id, keto.id);
        service
            .preference_repository
            .expect_get_by_name()
            .returning(move |_, name| match name.as_str() {
                "vegan" => Box::pin(std::future::ready(Ok(Some(vegan.clone())))),
                "keto" => Box::pin(std::future::ready(Ok(Some(keto.clone())))),
                _ => Box::pin(std::future::ready(Ok(None))),
            });
        service
            .preference_repository
            .expect_replace_links()
            .with(
                eq(user_id),
                eq(PreferenceCategory::Diet),
                eq(vec![vegan_id, keto_id]),
            )
            .times(1)
            .returning(|_, _, _| Box::pin(std::future::ready(Ok(()))));

        let entities = service
            .reconcile(
                user_id,
                PreferenceCategory::Diet,
                vec!["vegan".to_owned(), "keto".to_owned()],
            )
            .await
            .unwrap();

        assert_eq!(entities.len(), 2);
    }

    #[tokio::test]
    async fn reconcile_collapses_duplicate_names_to_one_link() {
        let mut service = mock_service();
        let user = User::new(None, "a@b.c".into(), "h".into());
        let user_id = user.id;
        service
            .user_repository
            .expect_get_by_id()
            .returning(move |_| Box::pin(std::future::ready(Ok(Some(user.clone())))));

        let peanut = entity(PreferenceCategory::Allergen, "peanut");
        let peanut_id = peanut.id;
        service
            .preference_repository
            .expect_get_by_name()
            .with(eq(PreferenceCategory::Allergen), eq("peanut".to_owned()))
            .times(1)
            .returning(move |_, _| Box::pin(std::future::ready(Ok(Some(peanut.clone())))));
        service
            .preference_repository
            .expect_replace_links()
            .with(eq(user_id), eq(PreferenceCategory::Allergen), eq(vec![peanut_id]))
            .times(1)
            .returning(|_, _, _| Box::pin(std::future::ready(Ok(()))));

        let entities = service
            .reconcile(
                user_id,
                PreferenceCategory::Allergen,
                vec![" peanut ".to_owned(), "peanut".to_owned()],
            )
            .await
            .unwrap();

        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].name, "peanut");
    }

    #[tokio::test]
    async fn reconcile_unknown_user_mutates_nothing() {
        let mut service = mock_service();
        service
            .user_repository
            .expect_get_by_id()
            .returning(|_| Box::pin(std::future::ready(Ok(None))));
        service.preference_repository.expect_replace_links().never();

        let result = service
            .reconcile(
                Uuid::new_v4(),
                PreferenceCategory::Diet,
                vec!["vegan".to_owned()],
            )
            .await;

        assert_eq!(result, Err(CoreError::UserNotFound));
    }

    #[tokio::test]
    async fn get_profile_returns_user_and_resolved_names() {
        let mut service = mock_service();
        let user = User::new(Some("Alice".into()), "a@b.c".into(), "h".into());
        let user_id = user.id;
        let stored = user.clone();
        service
            .user_repository
            .expect_get_by_id()
            .returning(move |_| Box::pin(std::future::ready(Ok(Some(stored.clone())))));

        let vegan = entity(PreferenceCategory::Diet, "vegan");
        service
            .preference_repository
            .expect_list_for_user()
            .returning(move |_, category| {
                if category == PreferenceCategory::Diet {
                    Box::pin(std::future::ready(Ok(vec![vegan.clone()])))
                } else {
                    Box::pin(std::future::ready(Ok(vec![])))
                }
            });

        let (returned, profile) = service
            .get_profile(GetProfileInput { user_id })
            .await
            .unwrap();

        assert_eq!(returned.display_name.as_deref(), Some("Alice"));
        assert_eq!(returned.email.as_deref(), Some("a@b.c"));
        assert_eq!(profile.diet_names(), vec!["vegan".to_owned()]);
        assert!(profile.allergens.is_empty());
    }
}
