use crate::domain::StoredStory;
use crate::errors::MixerResult;

#[cfg_attr(test, mockall::automock)]
pub trait StoryRepository: Send + Sync {
    /// Truncate the table, then insert the given rows in order. Returns the
    /// number of rows written.
    fn replace_all(&self, stories: &[StoredStory]) -> MixerResult<usize>;

    /// All stored rows in insertion order.
    fn get_all(&self) -> MixerResult<Vec<StoredStory>>;
}
