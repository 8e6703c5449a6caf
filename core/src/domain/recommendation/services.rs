use tracing::info;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    menu::{filter::filter_safe, ports::MenuRepository},
    preference::{
        ports::{PreferenceRepository, PreferenceService},
        value_objects::GetProfileInput,
    },
    recommendation::{
        ports::{ModelClient, RecommendationService},
        prompt::build_prompt,
        value_objects::{ProfileSummary, RecommendInput, RecommendationOutcome},
    },
    user::ports::{UserRepository, UserService},
};

impl<U, P, M, HC, H, LM> RecommendationService for Service<U, P, M, HC, H, LM>
where
    U: UserRepository,
    P: PreferenceRepository,
    M: MenuRepository,
    HC: HealthCheckRepository,
    H: HasherRepository,
    LM: ModelClient,
{
    async fn recommend(&self, input: RecommendInput) -> Result<RecommendationOutcome, CoreError> {
        let user = self.resolve_identity(input.user_id).await?;
        let (_, profile) = self
            .get_profile(GetProfileInput { user_id: user.id })
            .await?;
        let summary = ProfileSummary::from(&profile);

        let catalog = self.menu_repository.fetch_catalog().await?;
        let safe_catalog = filter_safe(catalog, &summary.allergens);

        if safe_catalog.is_empty() {
            info!(user_id = %user.id, "no safe menu items for user allergens");
            return Ok(RecommendationOutcome::NoSafeItems { profile: summary });
        }

        let prompt = build_prompt(&summary, &safe_catalog, &input.message);
        let answer = self.model_client.complete(prompt).await?;

        Ok(RecommendationOutcome::Reply {
            profile: summary,
            answer,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::{generate_uuid_v7, services::test_support::mock_service},
        menu::entities::{MenuItem, Restaurant, RestaurantMenu},
        preference::entities::{CanonicalEntity, PreferenceCategory},
        user::entities::User,
    };

    fn seeded_service(
        allergens: Vec<&str>,
        catalog: Vec<RestaurantMenu>,
    ) -> crate::domain::common::services::test_support::MockService {
        let mut service = mock_service();

        let user = User::new(None, "a@b.c".into(), "h".into());
        service
            .user_repository
            .expect_get_by_id()
            .returning(move |_| Box::pin(std::future::ready(Ok(Some(user.clone())))));

        let allergen_entities: Vec<CanonicalEntity> = allergens
            .into_iter()
            .map(|name| CanonicalEntity::new(PreferenceCategory::Allergen, name.to_owned()))
            .collect();
        service
            .preference_repository
            .expect_list_for_user()
            .returning(move |_, category| {
                if category == PreferenceCategory::Allergen {
                    Box::pin(std::future::ready(Ok(allergen_entities.clone())))
                } else {
                    Box::pin(std::future::ready(Ok(vec![])))
                }
            });

        service
            .menu_repository
            .expect_fetch_catalog()
            .returning(move || Box::pin(std::future::ready(Ok(catalog.clone()))));

        service
    }

    fn one_item_catalog(allergy_tag: Option<&str>) -> Vec<RestaurantMenu> {
        let id = generate_uuid_v7();
        vec![RestaurantMenu {
            restaurant: Restaurant {
                id,
                name: "R1".to_owned(),
                location: None,
                price_range: None,
            },
            items: vec![MenuItem {
                id: generate_uuid_v7(),
                restaurant_id: id,
                name: "Peanut Soup".to_owned(),
                price: None,
                allergy_tag: allergy_tag.map(str::to_owned),
                description: None,
            }],
        }]
    }

    #[tokio::test]
    async fn emptied_catalog_short_circuits_without_model_call() {
        let mut service = seeded_service(vec!["peanut"], one_item_catalog(Some("peanut")));
        service.model_client.expect_complete().never();

        let outcome = service
            .recommend(RecommendInput {
                user_id: Some(generate_uuid_v7()),
                message: "lunch?".to_owned(),
            })
            .await
            .unwrap();

        assert!(matches!(outcome, RecommendationOutcome::NoSafeItems { .. }));
    }

    #[tokio::test]
    async fn safe_catalog_reaches_the_model() {
        let mut service = seeded_service(vec!["peanut"], one_item_catalog(None));
        service
            .model_client
            .expect_complete()
            .withf(|prompt| prompt.contains("Peanut Soup") && prompt.contains("lunch?"))
            .returning(|_| Box::pin(std::future::ready(Ok("Try the soup.".to_owned()))));

        let outcome = service
            .recommend(RecommendInput {
                user_id: Some(generate_uuid_v7()),
                message: "lunch?".to_owned(),
            })
            .await
            .unwrap();

        match outcome {
            RecommendationOutcome::Reply { profile, answer } => {
                assert_eq!(answer, "Try the soup.");
                assert_eq!(profile.allergens, vec!["peanut".to_owned()]);
            }
            other => panic!("expected reply, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn model_errors_propagate() {
        let mut service = seeded_service(vec![], one_item_catalog(None));
        service
            .model_client
            .expect_complete()
            .returning(|_| Box::pin(std::future::ready(Err(CoreError::ModelTimeout("deadline exceeded".into())))));

        let result = service
            .recommend(RecommendInput {
                user_id: Some(generate_uuid_v7()),
                message: "dinner?".to_owned(),
            })
            .await;

        assert!(matches!(result, Err(CoreError::ModelTimeout(_))));
    }
}
