use crate::domain::preference::entities::{CanonicalEntity, PreferenceCategory};
use crate::entity::preference_entities::Model as PreferenceEntityModel;
use crate::entity::sea_orm_active_enums::PreferenceCategory as DbPreferenceCategory;

impl From<PreferenceCategory> for DbPreferenceCategory {
    fn from(category: PreferenceCategory) -> Self {
        match category {
            PreferenceCategory::Diet => DbPreferenceCategory::Diet,
            PreferenceCategory::Allergen => DbPreferenceCategory::Allergen,
            PreferenceCategory::FoodPreference => DbPreferenceCategory::FoodPreference,
        }
    }
}

impl From<DbPreferenceCategory> for PreferenceCategory {
    fn from(category: DbPreferenceCategory) -> Self {
        match category {
            DbPreferenceCategory::Diet => PreferenceCategory::Diet,
            DbPreferenceCategory::Allergen => PreferenceCategory::Allergen,
            DbPreferenceCategory::FoodPreference => PreferenceCategory::FoodPreference,
        }
    }
}

impl From<PreferenceEntityModel> for CanonicalEntity {
    fn from(model: PreferenceEntityModel) -> Self {
        CanonicalEntity {
            id: model.id,
            category: model.category.into(),
            name: model.name,
            created_at: model.created_at,
        }
    }
}
