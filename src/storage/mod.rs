pub mod sqlite;
pub mod traits;

pub use sqlite::{SqliteStorage, SqliteStoryRepository};
pub use traits::StoryRepository;
