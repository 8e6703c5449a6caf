use crate::domain::{
    common::SmartEatsConfig, crypto::ports::HasherRepository, health::ports::HealthCheckRepository,
    menu::ports::MenuRepository, preference::ports::PreferenceRepository,
    recommendation::ports::ModelClient, user::ports::UserRepository,
};

/// Aggregate over every repository and external client the domain services
/// need. Each service trait is implemented on this struct, so one value wired
/// with concrete infrastructure serves the whole application.
#[derive(Debug, Clone)]
pub struct Service<U, P, M, HC, H, LM>
where
    U: UserRepository,
    P: PreferenceRepository,
    M: MenuRepository,
    HC: HealthCheckRepository,
    H: HasherRepository,
    LM: ModelClient,
{
    pub user_repository: U,
    pub preference_repository: P,
    pub menu_repository: M,
    pub health_check_repository: HC,
    pub hasher_repository: H,
    pub model_client: LM,
    pub config: SmartEatsConfig,
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
    pub fn new(
        user_repository: U,
        preference_repository: P,
        menu_repository: M,
        health_check_repository: HC,
        hasher_repository: H,
        model_client: LM,
        config: SmartEatsConfig,
    ) -> Self {
        Self {
            user_repository,
            preference_repository,
            menu_repository,
            health_check_repository,
            hasher_repository,
            model_client,
            config,
        }
    }
}

#[cfg(test)]
pub mod test_support {
    use super::Service;
    use crate::domain::{
        common::{
            DatabaseConfig, DefaultIdentity, IdentityConfig, ModelConfig, SmartEatsConfig,
        },
        crypto::ports::MockHasherRepository,
        health::ports::MockHealthCheckRepository,
        menu::ports::MockMenuRepository,
        preference::ports::MockPreferenceRepository,
        recommendation::ports::MockModelClient,
        user::ports::MockUserRepository,
    };

    pub type MockService = Service<
        MockUserRepository,
        MockPreferenceRepository,
        MockMenuRepository,
        MockHealthCheckRepository,
        MockHasherRepository,
        MockModelClient,
    >;

    pub fn test_config() -> SmartEatsConfig {
        SmartEatsConfig {
            database: DatabaseConfig {
                host: "localhost".into(),
                port: 5432,
                username: "postgres".into(),
                password: "postgres".into(),
                name: "smart_eats".into(),
            },
            model: ModelConfig {
                base_url: "http://localhost:11434".into(),
                model: "gemma3:4b".into(),
                timeout_secs: 60,
            },
            identity: IdentityConfig {
                default_identity: DefaultIdentity::Guest {
                    display_name: "Guest".into(),
                },
            },
        }
    }

    pub fn mock_service() -> MockService {
        Service::new(
            MockUserRepository::new(),
            MockPreferenceRepository::new(),
            MockMenuRepository::new(),
            MockHealthCheckRepository::new(),
            MockHasherRepository::new(),
            MockModelClient::new(),
            test_config(),
        )
    }
}
