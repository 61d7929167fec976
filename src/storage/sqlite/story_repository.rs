use crate::domain::StoredStory;
use crate::errors::{MixerError, MixerResult};
use crate::storage::sqlite::SqliteStorage;
use crate::storage::traits::StoryRepository;

pub struct SqliteStoryRepository {
    storage: SqliteStorage,
}

impl SqliteStoryRepository {
    pub fn new(storage: SqliteStorage) -> Self {
        Self { storage }
    }
}

impl StoryRepository for SqliteStoryRepository {
    fn replace_all(&self, stories: &[StoredStory]) -> MixerResult<usize> {
        let mut conn = self.storage.connection()?;
        let tx = conn.transaction()?;

        // The table holds only the most recent selection, never history.
        tx.execute("DELETE FROM selected_stories", [])?;

        {
            let mut stmt = tx.prepare(
                "INSERT INTO selected_stories (headline, news_feed, publication_date) VALUES (?1, ?2, ?3)",
            )?;
            for story in stories {
                stmt.execute((
                    &story.headline,
                    &story.news_feed,
                    &story.publication_date,
                ))?;
            }
        }

        tx.commit()?;
        Ok(stories.len())
    }

    fn get_all(&self) -> MixerResult<Vec<StoredStory>> {
        let conn = self.storage.connection()?;
        let mut stmt = conn.prepare(
            "SELECT id, headline, news_feed, publication_date FROM selected_stories ORDER BY id",
        )?;

        let stories = stmt.query_map([], |row| {
            Ok(StoredStory {
                id: Some(row.get(0)?),
                headline: row.get(1)?,
                news_feed: row.get(2)?,
                publication_date: row.get(3)?,
            })
        })?;

        stories
            .collect::<Result<Vec<_>, _>>()
            .map_err(MixerError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_repo() -> SqliteStoryRepository {
        let storage = SqliteStorage::in_memory().unwrap();
        SqliteStoryRepository::new(storage)
    }

    fn record(headline: &str, feed: &str, date: &str) -> StoredStory {
        StoredStory {
            id: None,
            headline: headline.to_string(),
            news_feed: feed.to_string(),
            publication_date: date.to_string(),
        }
    }

    #[test]
    fn test_replace_all_inserts_in_order() {
        let repo = setup_repo();
        let rows = vec![
            record("A1", "ABC News", "2019-10-14T01:00"),
            record("W1", "Weatherzone", "2019-10-14"),
            record("W2", "Weatherzone", "2019-10-14"),
        ];

        let written = repo.replace_all(&rows).unwrap();
        assert_eq!(written, 3);

        let stored = repo.get_all().unwrap();
        assert_eq!(stored.len(), 3);
        assert_eq!(stored[0].headline, "A1");
        assert_eq!(stored[0].news_feed, "ABC News");
        assert_eq!(stored[1].headline, "W1");
        assert_eq!(stored[2].headline, "W2");
        assert!(stored.iter().all(|s| s.id.is_some()));
    }

    #[test]
    fn test_replace_all_is_idempotent() {
        let repo = setup_repo();
        let rows = vec![
            record("A1", "ABC News", "2019-10-14T01:00"),
            record("S1", "SBS News", "N/A"),
        ];

        repo.replace_all(&rows).unwrap();
        repo.replace_all(&rows).unwrap();

        let stored = repo.get_all().unwrap();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].headline, "A1");
        assert_eq!(stored[1].headline, "S1");
    }

    #[test]
    fn test_replace_all_discards_previous_selection() {
        let repo = setup_repo();

        repo.replace_all(&[record("Old", "ABC News", "yesterday")])
            .unwrap();
        repo.replace_all(&[record("New", "SBS News", "N/A")]).unwrap();

        let stored = repo.get_all().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].headline, "New");
    }

    #[test]
    fn test_empty_replace_truncates_table() {
        let repo = setup_repo();

        repo.replace_all(&[record("Old", "ABC News", "yesterday")])
            .unwrap();
        repo.replace_all(&[]).unwrap();

        assert!(repo.get_all().unwrap().is_empty());
    }
}
