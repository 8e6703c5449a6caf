pub mod preference_repository;

pub use preference_repository::PostgresPreferenceRepository;
