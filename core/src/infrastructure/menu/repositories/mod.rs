pub mod menu_repository;

pub use menu_repository::PostgresMenuRepository;
