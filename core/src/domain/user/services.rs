use tracing::info;

use crate::domain::{
    common::{
        DefaultIdentity, entities::app_errors::CoreError, services::Service,
    },
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    menu::ports::MenuRepository,
    preference::ports::PreferenceRepository,
    recommendation::ports::ModelClient,
    user::{
        entities::User,
        ports::{UserRepository, UserService},
        value_objects::{LoginInput, RegisterUserInput},
    },
};

impl<U, P, M, HC, H, LM> UserService for Service<U, P, M, HC, H, LM>
where
    U: UserRepository,
    P: PreferenceRepository,
    M: MenuRepository,
    HC: HealthCheckRepository,
    H: HasherRepository,
    LM: ModelClient,
{
    async fn register(&self, input: RegisterUserInput) -> Result<User, CoreError> {
        let email = input.email.trim().to_owned();
        if email.is_empty() {
            return Err(CoreError::InvalidInput("email must not be empty".into()));
        }

        if self
            .user_repository
            .get_by_email(email.clone())
            .await?
            .is_some()
        {
            return Err(CoreError::EmailAlreadyExists);
        }

        let password_hash = self.hasher_repository.hash_password(input.password).await?;
        let user = User::new(input.name, email, password_hash);

        match self.user_repository.create_user(user).await {
            Ok(user) => {
                info!(user_id = %user.id, "registered new user");
                Ok(user)
            }
            // Concurrent registration with the same email; the unique index
            // on the email column is the authority.
            Err(CoreError::UniqueViolation) => Err(CoreError::EmailAlreadyExists),
            Err(e) => Err(e),
        }
    }

    async fn login(&self, input: LoginInput) -> Result<User, CoreError> {
        let user = self
            .user_repository
            .get_by_email(input.email.trim().to_owned())
            .await?
            .ok_or(CoreError::InvalidCredentials)?;

        let hash = user
            .password_hash
            .clone()
            .ok_or(CoreError::InvalidCredentials)?;

        if !self
            .hasher_repository
            .verify_password(input.password, hash)
            .await?
        {
            return Err(CoreError::InvalidCredentials);
        }

        Ok(user)
    }

    async fn resolve_identity(&self, user_id: Option<uuid::Uuid>) -> Result<User, CoreError> {
        let Some(user_id) = user_id else {
            return match &self.config.identity.default_identity {
                DefaultIdentity::RequireUser => Err(CoreError::AnonymousAccessDenied),
                DefaultIdentity::Guest { display_name } => {
                    self.get_or_create_guest(display_name.clone()).await
                }
            };
        };

        self.user_repository
            .get_by_id(user_id)
            .await?
            .ok_or(CoreError::UserNotFound)
    }
}

impl<U, P, M, HC, H, LM> Service<U, P, M, HC, H, LM>
where
    U: UserRepository,
    P: PreferenceRepository,
    M: MenuRepository,
    HC: HealthCheckRepository,
    H: HasherRepository,
    LM: ModelClient,
{
    /// At most one guest user ever exists: a partial unique index over the
    /// guest flag backs the creation race, and a loser re-reads the winner.
    async fn get_or_create_guest(&self, display_name: String) -> Result<User, CoreError> {
        if let Some(guest) = self.user_repository.get_guest().await? {
            return Ok(guest);
        }

        match self.user_repository.create_user(User::guest(display_name)).await {
            Ok(guest) => {
                info!(user_id = %guest.id, "created shared guest user");
                Ok(guest)
            }
            Err(CoreError::UniqueViolation) => self
                .user_repository
                .get_guest()
                .await?
                .ok_or(CoreError::InternalServerError),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::services::test_support::mock_service;
    use uuid::Uuid;

    #[tokio::test]
    async fn register_rejects_taken_email() {
        let mut service = mock_service();
        let existing = User::new(None, "a@b.c".into(), "h".into());
        service
            .user_repository
            .expect_get_by_email()
            .returning(move |_| Box::pin(std::future::ready(Ok(Some(existing.clone())))));

        let result = service
            .register(RegisterUserInput {
                name: Some("A".into()),
                email: "a@b.c".into(),
                password: "pw".into(),
            })
            .await;

        assert_eq!(result, Err(CoreError::EmailAlreadyExists));
    }

    #[tokio::test]
    async fn register_hashes_and_creates() {
        let mut service = mock_service();
        service
            .user_repository
            .expect_get_by_email()
            .returning(|_| Box::pin(std::future::ready(Ok(None))));
        service
            .hasher_repository
            .expect_hash_password()
            .returning(|_| Box::pin(std::future::ready(Ok("hashed".into()))));
        service
            .user_repository
            .expect_create_user()
            .withf(|user| user.password_hash.as_deref() == Some("hashed") && !user.is_guest)
            .returning(|user| Box::pin(std::future::ready(Ok(user))));

        let user = service
            .register(RegisterUserInput {
                name: Some("Alice".into()),
                email: " alice@example.com ".into(),
                password: "secret".into(),
            })
            .await
            .unwrap();

        assert_eq!(user.email.as_deref(), Some("alice@example.com"));
    }

    #[tokio::test]
    async fn register_lost_race_maps_to_email_taken() {
        let mut service = mock_service();
        service
            .user_repository
            .expect_get_by_email()
            .returning(|_| Box::pin(std::future::ready(Ok(None))));
        service
            .hasher_repository
            .expect_hash_password()
            .returning(|_| Box::pin(std::future::ready(Ok("hashed".into()))));
        service
            .user_repository
            .expect_create_user()
            .returning(|_| Box::pin(std::future::ready(Err(CoreError::UniqueViolation))));

        let result = service
            .register(RegisterUserInput {
                name: None,
                email: "a@b.c".into(),
                password: "pw".into(),
            })
            .await;

        assert_eq!(result, Err(CoreError::EmailAlreadyExists));
    }

    #[tokio::test]
    async fn login_wrong_password_is_invalid_credentials() {
        let mut service = mock_service();
        let user = User::new(None, "a@b.c".into(), "stored-hash".into());
        service
            .user_repository
            .expect_get_by_email()
            .returning(move |_| Box::pin(std::future::ready(Ok(Some(user.clone())))));
        service
            .hasher_repository
            .expect_verify_password()
            .returning(|_, _| Box::pin(std::future::ready(Ok(false))));

        let result = service
            .login(LoginInput {
                email: "a@b.c".into(),
                password: "nope".into(),
            })
            .await;

        assert_eq!(result, Err(CoreError::InvalidCredentials));
    }

    #[tokio::test]
    async fn resolve_identity_unknown_id_is_not_found() {
        let mut service = mock_service();
        service
            .user_repository
            .expect_get_by_id()
            .returning(|_| Box::pin(std::future::ready(Ok(None))));

        let result = service.resolve_identity(Some(Uuid::new_v4())).await;

        assert_eq!(result, Err(CoreError::UserNotFound));
    }

    #[tokio::test]
    async fn resolve_identity_guest_race_returns_winner() {
        let mut service = mock_service();
        let winner = User::guest("Guest".into());
        let winner_id = winner.id;

        // First read misses, insert loses the race, second read sees the
        // winner created by the concurrent request.
        let mut reads = 0;
        let reread = winner.clone();
        service.user_repository.expect_get_guest().returning(move || {
            reads += 1;
            if reads == 1 {
                Box::pin(std::future::ready(Ok(None)))
            } else {
                Box::pin(std::future::ready(Ok(Some(reread.clone()))))
            }
        });
        service
            .user_repository
            .expect_create_user()
            .returning(|_| Box::pin(std::future::ready(Err(CoreError::UniqueViolation))));

        let guest = service.resolve_identity(None).await.unwrap();

        assert_eq!(guest.id, winner_id);
        assert!(guest.is_guest);
    }
}
