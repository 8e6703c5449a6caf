use sea_orm::entity::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
pub enum PreferenceCategory {
    #[sea_orm(string_value = "diet")]
    Diet,
    #[sea_orm(string_value = "allergen")]
    Allergen,
    #[sea_orm(string_value = "food_preference")]
    FoodPreference,
}
