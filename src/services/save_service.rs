use crate::domain::{SelectionCounts, Snapshot, StoredStory};
use crate::errors::MixerResult;
use crate::storage::traits::StoryRepository;

/// Persists a selection to the record store. The table only ever holds the
/// most recent selection; the repository truncates before inserting.
pub struct SaveService<R: StoryRepository> {
    repository: R,
}

impl<R: StoryRepository> SaveService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Returns the number of rows written.
    pub fn save(&self, snapshot: &Snapshot, counts: &SelectionCounts) -> MixerResult<usize> {
        let records: Vec<StoredStory> = snapshot
            .selected(counts)?
            .into_iter()
            .map(|(source, story)| StoredStory::from_story(source, story))
            .collect();

        self.repository.replace_all(&records)
    }
}
