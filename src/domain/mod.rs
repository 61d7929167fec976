pub mod selection;
pub mod snapshot;
pub mod source;
pub mod stored_story;
pub mod story;

pub use selection::SelectionCounts;
pub use snapshot::Snapshot;
pub use source::Source;
pub use stored_story::StoredStory;
pub use story::Story;
