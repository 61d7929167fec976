use std::collections::HashMap;

use serde::Serialize;

use crate::domain::{SelectionCounts, Source, Story};
use crate::errors::{MixerError, MixerResult};

/// Immutable result of the one-time startup extraction: one story list per
/// source. Every action (preview, export, save) reads the same snapshot, so
/// the three are always consistent with each other within a run.
pub struct Snapshot {
    stories: HashMap<Source, Vec<Story>>,
}

/// Per-source availability, printable as JSON by the counts command.
#[derive(Debug, Serialize)]
pub struct AvailableCounts {
    pub abc: usize,
    pub sbs: usize,
    pub weatherzone: usize,
    pub courier_mail: usize,
}

impl Snapshot {
    pub fn new(stories: HashMap<Source, Vec<Story>>) -> Self {
        Self { stories }
    }

    pub fn available(&self, source: Source) -> usize {
        self.stories.get(&source).map_or(0, Vec::len)
    }

    pub fn available_counts(&self) -> AvailableCounts {
        AvailableCounts {
            abc: self.available(Source::Abc),
            sbs: self.available(Source::Sbs),
            weatherzone: self.available(Source::Weatherzone),
            courier_mail: self.available(Source::CourierMail),
        }
    }

    /// First `n` stories of a source. The CLI validates its counts through
    /// here, so a request past the end is a user error, not a truncation.
    pub fn select(&self, source: Source, n: usize) -> MixerResult<&[Story]> {
        let available = self.available(source);
        if n > available {
            return Err(MixerError::InvalidCount {
                source: source.display_name(),
                requested: n,
                available,
            });
        }

        let stories = match self.stories.get(&source) {
            Some(stories) => &stories[..n],
            None => &[],
        };
        Ok(stories)
    }

    /// All selected stories across sources, flattened in the fixed source
    /// order shared by preview, digest and save.
    pub fn selected(&self, counts: &SelectionCounts) -> MixerResult<Vec<(Source, &Story)>> {
        let mut selected = Vec::new();
        for source in Source::ALL {
            for story in self.select(source, counts.get(source))? {
                selected.push((source, story));
            }
        }
        Ok(selected)
    }
}
