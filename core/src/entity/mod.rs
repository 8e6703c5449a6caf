pub mod menu_items;
pub mod preference_entities;
pub mod restaurants;
pub mod sea_orm_active_enums;
pub mod user_preferences;
pub mod users;
