use crate::domain::common::{SmartEatsConfig, services::Service};
use crate::infrastructure::{
    crypto::argon2_hasher::Argon2HasherRepository,
    db::postgres::{Postgres, PostgresConfig},
    health::repository::PostgresHealthCheckRepository,
    llm::ollama_client::OllamaModelClient,
    menu::repositories::PostgresMenuRepository,
    preference::repositories::PostgresPreferenceRepository,
    user::repository::PostgresUserRepository,
};

pub type SmartEatsService = Service<
    PostgresUserRepository,
    PostgresPreferenceRepository,
    PostgresMenuRepository,
    PostgresHealthCheckRepository,
    Argon2HasherRepository,
    OllamaModelClient,
>;

pub async fn create_service(config: SmartEatsConfig) -> Result<SmartEatsService, anyhow::Error> {
    let database_url = format!(
        "postgres://{}:{}@{}:{}/{}",
        config.database.username,
        config.database.password,
        config.database.host,
        config.database.port,
        config.database.name
    );
    let postgres = Postgres::new(PostgresConfig { database_url }).await?;
    let db = postgres.get_db();

    let model_client = OllamaModelClient::new(&config.model)?;

    Ok(Service::new(
        PostgresUserRepository::new(db.clone()),
        PostgresPreferenceRepository::new(db.clone()),
        PostgresMenuRepository::new(db.clone()),
        PostgresHealthCheckRepository::new(db),
        Argon2HasherRepository::new(),
        model_client,
        config,
    ))
}
