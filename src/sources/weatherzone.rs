use std::path::PathBuf;

use regex::Regex;

use crate::domain::{Source, Story};
use crate::sources::patterns::{self, capture_all};
use crate::sources::traits::{NewsSource, Origin};

/// Weatherzone news from an archived RSS snapshot.
///
/// The title pattern also matches the document's own `<title>` and the
/// channel-image title, so the first two matches are skipped. The snapshot
/// exposes a document-level `<pubDate>` that is reused for every story — a
/// known approximation of the source data, kept as-is.
pub struct WeatherzoneSource {
    path: PathBuf,
    title: Regex,
    date: Regex,
    description: Regex,
}

impl WeatherzoneSource {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            title: Regex::new(patterns::ARCHIVE_TITLE).unwrap(),
            date: Regex::new(patterns::WEATHERZONE_DATE).unwrap(),
            description: Regex::new(patterns::WEATHERZONE_DESCRIPTION).unwrap(),
        }
    }
}

impl NewsSource for WeatherzoneSource {
    fn source(&self) -> Source {
        Source::Weatherzone
    }

    fn origin(&self) -> Origin {
        Origin::Archived(self.path.clone())
    }

    fn extract(&self, raw: &str) -> Vec<Story> {
        let titles = capture_all(&self.title, raw);
        let dates = capture_all(&self.date, raw);
        let descriptions = capture_all(&self.description, raw);

        let titles = titles
            .get(patterns::WEATHERZONE_TITLE_SKIP..)
            .unwrap_or_default();
        let descriptions = descriptions
            .get(patterns::WEATHERZONE_DESCRIPTION_SKIP..)
            .unwrap_or_default();

        let published = dates
            .first()
            .cloned()
            .unwrap_or_else(|| Story::NO_DATE.to_string());

        titles
            .iter()
            .enumerate()
            .map(|(i, title)| {
                Story::new(title.clone(), published.clone())
                    .with_description(descriptions.get(i).cloned())
            })
            .collect()
    }
}
