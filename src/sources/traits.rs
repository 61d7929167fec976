use std::path::PathBuf;

use url::Url;

use crate::domain::{Source, Story};

/// Where a source's raw text comes from.
#[derive(Debug, Clone)]
pub enum Origin {
    /// Fetched over the network at run time.
    Live(Url),
    /// Read from a local, static snapshot file.
    Archived(PathBuf),
}

pub trait NewsSource: Send + Sync {
    /// Identifies this source
    fn source(&self) -> Source;

    /// Where to fetch this source's raw text from
    fn origin(&self) -> Origin;

    /// Apply this source's pattern set and slicing rules to raw text.
    /// Deterministic; zero matches yields an empty list, never an error.
    fn extract(&self, raw: &str) -> Vec<Story>;
}
