pub mod connection;
pub mod story_repository;

pub use connection::SqliteStorage;
pub use story_repository::SqliteStoryRepository;
