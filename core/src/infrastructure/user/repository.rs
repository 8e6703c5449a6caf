use sea_orm::ActiveValue::Set;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use uuid::Uuid;

use crate::domain::{common::entities::app_errors::CoreError, user::entities::User};
use crate::domain::user::ports::UserRepository;
use crate::entity::users::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity,
};
use crate::infrastructure::db::postgres::map_db_err;

#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pub db: DatabaseConnection,
}

impl PostgresUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl UserRepository for PostgresUserRepository {
    async fn get_by_id(&self, user_id: Uuid) -> Result<Option<User>, CoreError> {
        let user = UserEntity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| map_db_err("Failed to get user by id", e))?
            .map(User::from);

        Ok(user)
    }

    async fn get_by_email(&self, email: String) -> Result<Option<User>, CoreError> {
        let user = UserEntity::find()
            .filter(UserColumn::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| map_db_err("Failed to get user by email", e))?
            .map(User::from);

        Ok(user)
    }

    async fn get_guest(&self) -> Result<Option<User>, CoreError> {
        let user = UserEntity::find()
            .filter(UserColumn::IsGuest.eq(true))
            .one(&self.db)
            .await
            .map_err(|e| map_db_err("Failed to get guest user", e))?
            .map(User::from);

        Ok(user)
    }

    async fn create_user(&self, user: User) -> Result<User, CoreError> {
        let created = UserEntity::insert(UserActiveModel {
            id: Set(user.id),
            display_name: Set(user.display_name),
            email: Set(user.email),
            password_hash: Set(user.password_hash),
            is_guest: Set(user.is_guest),
            created_at: Set(user.created_at),
            updated_at: Set(user.updated_at),
        })
        .exec_with_returning(&self.db)
        .await
        .map(User::from)
        .map_err(|e| map_db_err("Failed to create user", e))?;

        Ok(created)
    }
}
