use regex::Regex;
use url::Url;

use crate::domain::{Source, Story};
use crate::sources::patterns::{self, capture_all};
use crate::sources::traits::{NewsSource, Origin};

/// SBS weather news, scraped from JSON embedded in the live page markup.
///
/// The page exposes no publication dates, so every story is recorded as
/// undated. The first and last title matches are fixed page chrome (menu and
/// footer), and the last image match is the footer logo.
pub struct SbsSource {
    title: Regex,
    image: Regex,
}

impl SbsSource {
    pub fn new() -> Self {
        Self {
            title: Regex::new(patterns::SBS_TITLE).unwrap(),
            image: Regex::new(patterns::SBS_IMAGE).unwrap(),
        }
    }
}

impl Default for SbsSource {
    fn default() -> Self {
        Self::new()
    }
}

impl NewsSource for SbsSource {
    fn source(&self) -> Source {
        Source::Sbs
    }

    fn origin(&self) -> Origin {
        Origin::Live(Url::parse(patterns::SBS_URL).unwrap())
    }

    fn extract(&self, raw: &str) -> Vec<Story> {
        let mut titles = capture_all(&self.title, raw);
        let mut images = capture_all(&self.image, raw);

        if titles.len() < 2 {
            return Vec::new();
        }
        titles.remove(0);
        titles.pop();
        images.pop();

        titles
            .into_iter()
            .enumerate()
            .map(|(i, title)| Story::undated(title).with_image(images.get(i).cloned()))
            .collect()
    }
}
