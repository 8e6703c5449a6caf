use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use crate::domain::{
    common::entities::app_errors::CoreError,
    menu::{
        entities::{MenuCatalog, MenuItem, Restaurant, RestaurantMenu},
        ports::MenuRepository,
    },
};
use crate::entity::menu_items::{Column as MenuItemColumn, Entity as MenuItemEntity};
use crate::entity::restaurants::{Column as RestaurantColumn, Entity as RestaurantEntity};
use crate::infrastructure::db::postgres::map_db_err;

#[derive(Debug, Clone)]
pub struct PostgresMenuRepository {
    pub db: DatabaseConnection,
}

impl PostgresMenuRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl MenuRepository for PostgresMenuRepository {
    async fn fetch_catalog(&self) -> Result<MenuCatalog, CoreError> {
        // Uuid v7 ids are time-ordered, so sorting by id reproduces
        // insertion order on every read.
        let groups = RestaurantEntity::find()
            .find_with_related(MenuItemEntity)
            .order_by_asc(RestaurantColumn::Id)
            .order_by_asc(MenuItemColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| map_db_err("Failed to fetch menu catalog", e))?;

        let catalog = groups
            .into_iter()
            .map(|(restaurant, items)| RestaurantMenu {
                restaurant: Restaurant::from(restaurant),
                items: items.into_iter().map(MenuItem::from).collect(),
            })
            .collect();

        Ok(catalog)
    }
}
