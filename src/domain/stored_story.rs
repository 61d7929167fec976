use serde::{Deserialize, Serialize};

use crate::domain::{Source, Story};

/// Row shape of the `selected_stories` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredStory {
    pub id: Option<i64>,
    pub headline: String,
    pub news_feed: String,
    pub publication_date: String,
}

impl StoredStory {
    pub fn from_story(source: Source, story: &Story) -> Self {
        Self {
            id: None,
            headline: story.title.clone(),
            news_feed: source.display_name().to_string(),
            publication_date: story.published.clone(),
        }
    }
}
