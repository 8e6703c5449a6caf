use crate::domain::menu::entities::{MenuItem, Restaurant};
use crate::entity::menu_items::Model as MenuItemModel;
use crate::entity::restaurants::Model as RestaurantModel;

impl From<RestaurantModel> for Restaurant {
    fn from(model: RestaurantModel) -> Self {
        Restaurant {
            id: model.id,
            name: model.name,
            location: model.location,
            price_range: model.price_range,
        }
    }
}

impl From<MenuItemModel> for MenuItem {
    fn from(model: MenuItemModel) -> Self {
        MenuItem {
            id: model.id,
            restaurant_id: model.restaurant_id,
            name: model.name,
            price: model.price,
            allergy_tag: model.allergy_tag,
            description: model.description,
        }
    }
}
