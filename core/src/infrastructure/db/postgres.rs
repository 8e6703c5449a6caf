use sea_orm::{Database, DatabaseConnection, DbErr, SqlErr};
use tracing::{error, info};

use crate::domain::common::entities::app_errors::CoreError;

#[derive(Debug, Clone)]
pub struct PostgresConfig {
    pub database_url: String,
}

#[derive(Debug, Clone)]
pub struct Postgres {
    db: DatabaseConnection,
}

impl Postgres {
    pub async fn new(config: PostgresConfig) -> Result<Self, anyhow::Error> {
        let db = Database::connect(&config.database_url).await?;

        sqlx::migrate!("./migrations")
            .run(db.get_postgres_connection_pool())
            .await?;
        info!("database connected, migrations applied");

        Ok(Self { db })
    }

    pub fn get_db(&self) -> DatabaseConnection {
        self.db.clone()
    }
}

/// Maps a database error, keeping unique-constraint conflicts distinguishable
/// so callers can resolve creation races instead of failing.
pub fn map_db_err(context: &str, e: DbErr) -> CoreError {
    if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
        return CoreError::UniqueViolation;
    }

    error!("{context}: {e}");
    CoreError::InternalServerError
}
