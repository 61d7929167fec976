use serde::{Deserialize, Serialize};

use crate::domain::Source;

/// A single extracted headline. Fields that a source does not expose stay
/// `None`; `published` falls back to "N/A" rather than an option because the
/// record store requires a non-null date column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    pub title: String,
    pub published: String,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl Story {
    pub const NO_DATE: &'static str = "N/A";

    pub fn new(title: String, published: String) -> Self {
        Self {
            title,
            published,
            description: None,
            image: None,
        }
    }

    pub fn undated(title: String) -> Self {
        Self::new(title, Self::NO_DATE.to_string())
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn with_image(mut self, image: Option<String>) -> Self {
        self.image = image;
        self
    }

    /// One-line rendering for the preview command. SBS exposes no dates at
    /// all, so its tag omits the date segment entirely.
    pub fn preview_line(&self, source: Source) -> String {
        match source {
            Source::Sbs => format!("\"{}\" [{}]", self.title, source.display_name()),
            _ => format!(
                "\"{}\" [{} - {}]",
                self.title,
                source.display_name(),
                self.published
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_line_with_date() {
        let story = Story::new("Storm warning".to_string(), "2019-10-14".to_string());
        assert_eq!(
            story.preview_line(Source::Abc),
            "\"Storm warning\" [ABC News - 2019-10-14]"
        );
    }

    #[test]
    fn test_preview_line_sbs_has_no_date_segment() {
        let story = Story::undated("Flood update".to_string());
        assert_eq!(story.preview_line(Source::Sbs), "\"Flood update\" [SBS News]");
    }
}
