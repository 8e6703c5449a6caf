use crate::domain::menu::entities::MenuCatalog;

/// Drops every menu item that is unsafe for the given allergen set, then
/// drops restaurants left without items. Pure: input ordering is preserved
/// and identical inputs produce identical outputs.
///
/// An item with no allergy tag is always safe. A tagged item is unsafe when
/// any allergen name occurs case-insensitively as a substring of the tag.
/// Substring matching is deliberately lossy: allergen "peanut" also excludes
/// an item tagged "peanut oil-free". Erring toward exclusion is the safe
/// direction for allergy data.
pub fn filter_safe(catalog: MenuCatalog, allergen_names: &[String]) -> MenuCatalog {
    let needles: Vec<String> = allergen_names
        .iter()
        .map(|name| name.trim().to_lowercase())
        .filter(|name| !name.is_empty())
        .collect();

    catalog
        .into_iter()
        .map(|mut entry| {
            entry.items.retain(|item| match item.allergy_tag.as_deref() {
                None => true,
                Some(tag) => {
                    let tag = tag.to_lowercase();
                    !needles.iter().any(|needle| tag.contains(needle))
                }
            });
            entry
        })
        .filter(|entry| !entry.items.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::generate_uuid_v7,
        menu::entities::{MenuItem, Restaurant, RestaurantMenu},
    };

    fn item(restaurant_id: uuid::Uuid, name: &str, allergy_tag: Option<&str>) -> MenuItem {
        MenuItem {
            id: generate_uuid_v7(),
            restaurant_id,
            name: name.to_owned(),
            price: None,
            allergy_tag: allergy_tag.map(str::to_owned),
            description: None,
        }
    }

    fn restaurant(name: &str) -> Restaurant {
        Restaurant {
            id: generate_uuid_v7(),
            name: name.to_owned(),
            location: None,
            price_range: None,
        }
    }

    fn catalog_one(items: Vec<MenuItem>) -> MenuCatalog {
        let r = restaurant("R1");
        vec![RestaurantMenu {
            restaurant: r,
            items,
        }]
    }

    #[test]
    fn tagged_item_is_removed_untagged_survives() {
        let r = restaurant("R1");
        let catalog = vec![RestaurantMenu {
            restaurant: r.clone(),
            items: vec![
                item(r.id, "Peanut Soup", Some("peanut, dairy")),
                item(r.id, "Rice", None),
            ],
        }];

        let safe = filter_safe(catalog, &["peanut".to_owned()]);

        assert_eq!(safe.len(), 1);
        assert_eq!(safe[0].items.len(), 1);
        assert_eq!(safe[0].items[0].name, "Rice");
    }

    #[test]
    fn empty_allergen_set_leaves_catalog_unchanged() {
        let r = restaurant("R1");
        let catalog = vec![RestaurantMenu {
            restaurant: r.clone(),
            items: vec![
                item(r.id, "Peanut Soup", Some("peanut, dairy")),
                item(r.id, "Rice", None),
            ],
        }];

        let safe = filter_safe(catalog.clone(), &[]);

        assert_eq!(safe, catalog);
    }

    #[test]
    fn restaurant_with_no_safe_items_is_dropped() {
        let r = restaurant("R1");
        let catalog = vec![RestaurantMenu {
            restaurant: r.clone(),
            items: vec![item(r.id, "Peanut Soup", Some("peanut"))],
        }];

        let safe = filter_safe(catalog, &["peanut".to_owned()]);

        assert!(safe.is_empty());
    }

    #[test]
    fn matching_is_case_insensitive_substring() {
        let id = generate_uuid_v7();
        let catalog = catalog_one(vec![
            item(id, "Satay", Some("contains PEANUT oil")),
            item(id, "Trail Mix", Some("Peanuts")),
            item(id, "Salad", Some("sesame")),
        ]);

        let safe = filter_safe(catalog, &["peanut".to_owned()]);

        assert_eq!(safe[0].items.len(), 1);
        assert_eq!(safe[0].items[0].name, "Salad");
    }

    #[test]
    fn blank_allergen_names_are_ignored() {
        let id = generate_uuid_v7();
        let catalog = catalog_one(vec![item(id, "Rice", Some("soy"))]);

        let safe = filter_safe(catalog.clone(), &["  ".to_owned()]);

        assert_eq!(safe, catalog);
    }

    #[test]
    fn ordering_is_preserved() {
        let r1 = restaurant("A");
        let r2 = restaurant("B");
        let catalog = vec![
            RestaurantMenu {
                restaurant: r1.clone(),
                items: vec![item(r1.id, "One", None), item(r1.id, "Two", None)],
            },
            RestaurantMenu {
                restaurant: r2.clone(),
                items: vec![item(r2.id, "Three", None)],
            },
        ];

        let safe = filter_safe(catalog.clone(), &["peanut".to_owned()]);

        assert_eq!(safe, catalog);
    }
}
