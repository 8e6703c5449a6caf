use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    menu::ports::MenuRepository,
    preference::ports::PreferenceRepository,
    recommendation::ports::ModelClient,
    user::ports::UserRepository,
};

impl<U, P, M, HC, H, LM> HealthCheckService for Service<U, P, M, HC, H, LM>
where
    U: UserRepository,
    P: PreferenceRepository,
    M: MenuRepository,
    HC: HealthCheckRepository,
    H: HasherRepository,
    LM: ModelClient,
{
    async fn readiness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readiness().await
    }
}
