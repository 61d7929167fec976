use regex::Regex;
use url::Url;

use crate::domain::{Source, Story};
use crate::sources::patterns::{self, capture_all};
use crate::sources::traits::{NewsSource, Origin};

/// ABC weather news, scraped from JSON embedded in the live page markup.
///
/// The page carries more title and image matches than dated articles (nav
/// and promo entries appear earlier in the markup), so both lists are
/// right-aligned against the date list: the trailing N matches belong to the
/// N dated articles.
pub struct AbcSource {
    title: Regex,
    date: Regex,
    image: Regex,
    description: Regex,
}

impl AbcSource {
    pub fn new() -> Self {
        Self {
            title: Regex::new(patterns::ABC_TITLE).unwrap(),
            date: Regex::new(patterns::ABC_DATE).unwrap(),
            image: Regex::new(patterns::ABC_IMAGE).unwrap(),
            description: Regex::new(patterns::ABC_DESCRIPTION).unwrap(),
        }
    }
}

impl Default for AbcSource {
    fn default() -> Self {
        Self::new()
    }
}

/// Last `keep` elements of `list`, or all of it when shorter.
fn keep_tail(mut list: Vec<String>, keep: usize) -> Vec<String> {
    let start = list.len().saturating_sub(keep);
    list.split_off(start)
}

impl NewsSource for AbcSource {
    fn source(&self) -> Source {
        Source::Abc
    }

    fn origin(&self) -> Origin {
        Origin::Live(Url::parse(patterns::ABC_URL).unwrap())
    }

    fn extract(&self, raw: &str) -> Vec<Story> {
        let titles = capture_all(&self.title, raw);
        let dates = capture_all(&self.date, raw);
        let images = capture_all(&self.image, raw);
        let mut descriptions = capture_all(&self.description, raw);

        // The ninth raw synopsis belongs to the first article; the page
        // embeds it out of order.
        if descriptions.len() > patterns::ABC_DESCRIPTION_ROTATE_INDEX {
            let element = descriptions.remove(patterns::ABC_DESCRIPTION_ROTATE_INDEX);
            descriptions.insert(0, element);
        }

        let titles = keep_tail(titles, dates.len());
        let images = keep_tail(images, dates.len());
        let descriptions = keep_tail(descriptions, dates.len());

        titles
            .into_iter()
            .zip(dates)
            .enumerate()
            .map(|(i, (title, date))| {
                Story::new(title, date)
                    .with_description(descriptions.get(i).cloned())
                    .with_image(images.get(i).cloned())
            })
            .collect()
    }
}
