use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Restaurant {
    pub id: Uuid,
    pub name: String,
    pub location: Option<String>,
    pub price_range: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MenuItem {
    pub id: Uuid,
    pub restaurant_id: Uuid,
    pub name: String,
    pub price: Option<Decimal>,
    /// Free-text allergen note as entered by the restaurant, possibly
    /// listing several allergens ("peanut, dairy"). Absent means the item
    /// carries no declared allergens.
    pub allergy_tag: Option<String>,
    pub description: Option<String>,
}

/// One restaurant with its menu, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RestaurantMenu {
    pub restaurant: Restaurant,
    pub items: Vec<MenuItem>,
}

/// Ordered restaurant -> items catalog as read from the store.
pub type MenuCatalog = Vec<RestaurantMenu>;
