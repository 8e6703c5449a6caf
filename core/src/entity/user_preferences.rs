use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::PreferenceCategory;

/// User-to-entity link rows with set semantics: the composite key is the
/// whole identity, there is no payload to update in place.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_preferences")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub entity_id: Uuid,
    pub category: PreferenceCategory,
    pub created_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::preference_entities::Entity",
        from = "Column::EntityId",
        to = "super::preference_entities::Column::Id"
    )]
    PreferenceEntity,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::preference_entities::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PreferenceEntity.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
