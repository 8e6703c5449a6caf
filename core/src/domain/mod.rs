pub mod common;
pub mod crypto;
pub mod health;
pub mod menu;
pub mod preference;
pub mod recommendation;
pub mod user;
