pub mod list_restaurants;
