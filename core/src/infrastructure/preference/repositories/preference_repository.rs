use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait, TransactionError, TransactionTrait,
};
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    preference::{
        entities::{CanonicalEntity, PreferenceCategory},
        ports::PreferenceRepository,
    },
};
use crate::entity::preference_entities::{
    ActiveModel as PreferenceEntityActiveModel, Column as PreferenceEntityColumn,
    Entity as PreferenceEntityEntity, Relation as PreferenceEntityRelation,
};
use crate::entity::sea_orm_active_enums::PreferenceCategory as DbPreferenceCategory;
use crate::entity::user_preferences::{
    ActiveModel as UserPreferenceActiveModel, Column as UserPreferenceColumn,
    Entity as UserPreferenceEntity,
};
use crate::infrastructure::db::postgres::map_db_err;

#[derive(Debug, Clone)]
pub struct PostgresPreferenceRepository {
    pub db: DatabaseConnection,
}

impl PostgresPreferenceRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl PreferenceRepository for PostgresPreferenceRepository {
    async fn get_by_name(
        &self,
        category: PreferenceCategory,
        name: String,
    ) -> Result<Option<CanonicalEntity>, CoreError> {
        let entity = PreferenceEntityEntity::find()
            .filter(PreferenceEntityColumn::Category.eq(DbPreferenceCategory::from(category)))
            .filter(PreferenceEntityColumn::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| map_db_err("Failed to get preference entity by name", e))?
            .map(CanonicalEntity::from);

        Ok(entity)
    }

    async fn insert_entity(&self, entity: CanonicalEntity) -> Result<CanonicalEntity, CoreError> {
        let created = PreferenceEntityEntity::insert(PreferenceEntityActiveModel {
            id: Set(entity.id),
            category: Set(entity.category.into()),
            name: Set(entity.name),
            created_at: Set(entity.created_at),
        })
        .exec_with_returning(&self.db)
        .await
        .map(CanonicalEntity::from)
        .map_err(|e| map_db_err("Failed to insert preference entity", e))?;

        Ok(created)
    }

    async fn list_for_user(
        &self,
        user_id: Uuid,
        category: PreferenceCategory,
    ) -> Result<Vec<CanonicalEntity>, CoreError> {
        let entities = PreferenceEntityEntity::find()
            .join(JoinType::InnerJoin, PreferenceEntityRelation::UserPreferences.def())
            .filter(UserPreferenceColumn::UserId.eq(user_id))
            .filter(UserPreferenceColumn::Category.eq(DbPreferenceCategory::from(category)))
            .order_by_asc(PreferenceEntityColumn::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| map_db_err("Failed to list preference links for user", e))?
            .into_iter()
            .map(CanonicalEntity::from)
            .collect();

        Ok(entities)
    }

    async fn replace_links(
        &self,
        user_id: Uuid,
        category: PreferenceCategory,
        entity_ids: Vec<Uuid>,
    ) -> Result<(), CoreError> {
        let db_category = DbPreferenceCategory::from(category);

        // Delete-old plus insert-new is one transaction so a concurrent
        // reader sees all-old or all-new, never an empty window.
        self.db
            .transaction::<_, (), DbErr>(|txn| {
                Box::pin(async move {
                    UserPreferenceEntity::delete_many()
                        .filter(UserPreferenceColumn::UserId.eq(user_id))
                        .filter(UserPreferenceColumn::Category.eq(db_category.clone()))
                        .exec(txn)
                        .await?;

                    if !entity_ids.is_empty() {
                        let now = Utc::now();
                        let links =
                            entity_ids
                                .into_iter()
                                .map(|entity_id| UserPreferenceActiveModel {
                                    user_id: Set(user_id),
                                    category: Set(db_category.clone()),
                                    entity_id: Set(entity_id),
                                    created_at: Set(now),
                                });
                        UserPreferenceEntity::insert_many(links).exec(txn).await?;
                    }

                    Ok(())
                })
            })
            .await
            .map_err(|e| match e {
                TransactionError::Connection(e) => map_db_err("Failed to replace links", e),
                TransactionError::Transaction(e) => map_db_err("Failed to replace links", e),
            })
    }
}
