pub mod health;
pub mod profile;
pub mod recommendation;
pub mod restaurant;
pub mod server;
pub mod user;
