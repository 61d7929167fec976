//! Static pattern catalog: one hand-tuned regex set per source, plus the
//! slicing rules that separate real headlines from boilerplate matches.
//! These patterns are deliberately brittle — each one targets the exact
//! markup its source served when the scraper was written, not any general
//! feed format.

use regex::Regex;

// Live source URLs
pub const ABC_URL: &str = "https://www.abc.net.au/news/weather";
pub const SBS_URL: &str = "https://www.sbs.com.au/news/tag/subject/weather";

// ABC embeds its article data as JSON inside the page markup.
pub const ABC_TITLE: &str = r#""title":\{"children":"(.*?)"\},"mediaIndicator""#;
pub const ABC_DATE: &str = r#""firstPublished":"(.*?)","#;
pub const ABC_IMAGE: &str = r#""imgSrc":"(.*?)","#;
pub const ABC_DESCRIPTION: &str = r#""synopsis":"(.*?)","#;

// ABC's markup embeds one synopsis out of document order: the ninth raw
// match belongs to the first article. Source-specific workaround, not a
// general rule.
pub const ABC_DESCRIPTION_ROTATE_INDEX: usize = 8;

pub const SBS_TITLE: &str = r#""title":"(.*?)","#;
pub const SBS_IMAGE: &str = r#""image":"(.*?)","#;

// Archived RSS snapshots
pub const ARCHIVE_TITLE: &str = r"<title>(.*)</title>";
pub const WEATHERZONE_DESCRIPTION: &str = r"<description>(.*)</description>";
pub const WEATHERZONE_DATE: &str = r"<pubDate>(.*)</pubDate>";
pub const COURIER_MAIL_DESCRIPTION: &str = r"<description><!\[CDATA\[(.*)</description>";
pub const COURIER_MAIL_DATE: &str = r"<lastBuildDate>(.*)</lastBuildDate>";

// Leading title matches that are document boilerplate, not articles: the
// weatherzone snapshot's own <title> plus its channel-image title, and the
// courier-mail snapshot's own <title>.
pub const WEATHERZONE_TITLE_SKIP: usize = 2;
pub const WEATHERZONE_DESCRIPTION_SKIP: usize = 1;
pub const COURIER_MAIL_TITLE_SKIP: usize = 1;
pub const COURIER_MAIL_DESCRIPTION_SKIP: usize = 0;

/// All first-group captures of `re` in `text`, in document order. Zero
/// matches is a legitimate empty result.
pub fn capture_all(re: &Regex, text: &str) -> Vec<String> {
    re.captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_patterns_compile() {
        for pattern in [
            ABC_TITLE,
            ABC_DATE,
            ABC_IMAGE,
            ABC_DESCRIPTION,
            SBS_TITLE,
            SBS_IMAGE,
            ARCHIVE_TITLE,
            WEATHERZONE_DESCRIPTION,
            WEATHERZONE_DATE,
            COURIER_MAIL_DESCRIPTION,
            COURIER_MAIL_DATE,
        ] {
            assert!(Regex::new(pattern).is_ok(), "pattern failed: {}", pattern);
        }
    }

    #[test]
    fn test_capture_all_returns_first_group() {
        let re = Regex::new(ARCHIVE_TITLE).unwrap();
        let text = "<title>One</title>\n<item><title>Two</title></item>";
        assert_eq!(capture_all(&re, text), vec!["One", "Two"]);
    }

    #[test]
    fn test_capture_all_no_matches_is_empty() {
        let re = Regex::new(ARCHIVE_TITLE).unwrap();
        assert!(capture_all(&re, "<h1>not a feed</h1>").is_empty());
    }

    #[test]
    fn test_abc_title_pattern_requires_media_indicator() {
        let re = Regex::new(ABC_TITLE).unwrap();
        let text = concat!(
            r#""title":{"children":"Real headline"},"mediaIndicator":null"#,
            r#""title":{"children":"Nav entry"},"somethingElse":null"#,
        );
        assert_eq!(capture_all(&re, text), vec!["Real headline"]);
    }
}
