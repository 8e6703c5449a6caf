use std::fmt::Write;

use crate::domain::{menu::entities::MenuCatalog, recommendation::value_objects::ProfileSummary};

fn join_or(names: &[String], fallback: &str) -> String {
    if names.is_empty() {
        fallback.to_owned()
    } else {
        names.join(", ")
    }
}

/// Renders the instruction block sent to the model. Identical inputs yield
/// byte-identical output: no timestamps, no randomness, and the catalog is
/// rendered in the order it was given.
pub fn build_prompt(profile: &ProfileSummary, safe_catalog: &MenuCatalog, message: &str) -> String {
    let mut prompt = String::new();

    prompt.push_str("You are a meal recommendation assistant.\n\n");
    prompt.push_str("Restaurants and menu items that are safe for this user:\n");
    for entry in safe_catalog {
        match &entry.restaurant.location {
            Some(location) => {
                let _ = writeln!(prompt, "- {} ({location}):", entry.restaurant.name);
            }
            None => {
                let _ = writeln!(prompt, "- {}:", entry.restaurant.name);
            }
        }
        for item in &entry.items {
            let _ = write!(prompt, "  * {}", item.name);
            if let Some(description) = &item.description {
                let _ = write!(prompt, " - {description}");
            }
            if let Some(price) = &item.price {
                let _ = write!(prompt, " ({price})");
            }
            prompt.push('\n');
        }
    }

    let _ = write!(
        prompt,
        "\nUser profile:\n\
         - Dietary preferences: {}\n\
         - Favorite foods: {}\n\
         Items matching the user's allergens are already excluded from the list above.\n",
        join_or(&profile.diets, "not specified"),
        join_or(&profile.food_preferences, "none"),
    );

    let _ = write!(prompt, "\nThe user says:\n\"\"\"{message}\"\"\"\n");

    prompt.push_str(
        "\nRules:\n\
         - Only choose among the menu items listed above.\n\
         - Recommend exactly one item and name the restaurant that serves it.\n\
         - Never mention a dish that is not on the list.\n\
         - Keep the explanation short and clear.\n",
    );

    prompt
}
