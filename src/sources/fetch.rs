use std::fs;
use std::io::ErrorKind;

use reqwest::blocking::Client;

use crate::errors::{MixerError, MixerResult};
use crate::sources::traits::Origin;

/// Retrieves raw text for a source: a blocking GET for live origins, a file
/// read for archived ones. No retries and no timeout — a failure here is
/// fatal for that source's data this run.
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    pub fn fetch(&self, origin: &Origin) -> MixerResult<String> {
        match origin {
            Origin::Live(url) => {
                let response = self.client.get(url.as_str()).send()?;
                Ok(response.error_for_status()?.text()?)
            }
            Origin::Archived(path) => fs::read_to_string(path).map_err(|e| {
                if e.kind() == ErrorKind::NotFound {
                    MixerError::ArchiveNotFound(path.display().to_string())
                } else {
                    MixerError::Io(e)
                }
            }),
        }
    }
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}
