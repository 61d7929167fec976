use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

use chrono::Local;

use crate::domain::{SelectionCounts, Snapshot, Source, Story};
use crate::errors::MixerResult;

const HTML_HEADER: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Your Weather News Mix</title>
    <style>
        body {
            background-color: #b5ffff;
            font-family: Arial, sans-serif;
            margin: 0;
            padding: 0;
        }
        header {
            text-align: center;
            padding-top: 20px;
            padding-bottom: 10px;
        }
        img {
            display: block;
            margin: 0 auto;
            max-width: 100%;
            height: auto;
        }
        h1 {
            color: #007BFF;
            margin: 0;
        }
        h2 {
            text-align: center;
            color: #333333;
        }
        p.description {
            text-align: left;
            margin-left: 15%;
            margin-right: 15%;
            line-height: 1.6;
            color: #555555;
        }
        h3.sources {
            padding-left: 20px;
        }
        h3.date {
            text-align: center;
            color: #666666;
            padding-bottom: 20px;
        }
        p.sources {
            text-align: left;
            color: #777777;
        }
        hr.divider {
            border: 2px solid #0096fa;
            width: 95%;
            margin-bottom: 20px;
        }
        hr.newsDivider {
            border: 1px solid #0096fa;
            width: 75%;
            margin-top: 20px;
            margin-bottom: 40px;
        }
        p.errorMessage {
            text-align: center;
            color: #ff0000;
        }
    </style>
</head>
<body>
    <header>
        <h1>Your Weather News Mix</h1>
"#;

const HTML_FOOTER: &str = r#"    <hr class="divider">
    <h3 class="sources">Sources</h3>
    <ul>
        <li>
            <p class="sources">ABC Weather News: <a href="https://www.abc.net.au/news/weather">https://www.abc.net.au/news/weather</a></p>
        </li>
        <li>
            <p class="sources">SBS Weather News: <a href="https://www.sbs.com.au/news/tag/subject/weather">https://www.sbs.com.au/news/tag/subject/weather</a></p>
        </li>
        <li>
            <p class="sources">Weatherzone News: <a href="https://rss.weatherzone.com.au/?u=12994-1285&news=1">https://rss.weatherzone.com.au/?u=12994-1285&news=1</a></p>
        </li>
        <li>
            <p class="sources">Courier Mail News: <a href="https://www.couriermail.com.au/news/queensland/weather/rss">https://www.couriermail.com.au/news/queensland/weather/rss</a></p>
        </li>
    </ul>
</body>
</html>
"#;

const NO_IMAGE: &str =
    r#"<p class="errorMessage">No image available for this news website</p>"#;
const NO_DESCRIPTION: &str =
    r#"<p class="errorMessage">No description available for this news website</p>"#;

/// Renders a selection as a static HTML digest and writes it to a fixed
/// output path, overwriting whatever was there.
pub struct DigestService {
    output_path: PathBuf,
}

impl DigestService {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    pub fn render(&self, snapshot: &Snapshot, counts: &SelectionCounts) -> MixerResult<String> {
        let mut html = String::from(HTML_HEADER);
        let _ = writeln!(
            html,
            "        <p class=\"sources\">Generated on {}</p>",
            Local::now().format("%Y-%m-%d %H:%M")
        );
        html.push_str("        <br>\n        <hr class=\"divider\">\n    </header>\n");

        for (source, story) in snapshot.selected(counts)? {
            render_story(&mut html, source, story);
        }

        html.push_str(HTML_FOOTER);
        Ok(html)
    }

    pub fn export(&self, snapshot: &Snapshot, counts: &SelectionCounts) -> MixerResult<()> {
        let html = self.render(snapshot, counts)?;
        fs::write(&self.output_path, html)?;
        Ok(())
    }
}

fn render_story(html: &mut String, source: Source, story: &Story) {
    let _ = writeln!(html, "    <h2>{}</h2>", story.title);

    match &story.image {
        Some(src) => {
            let _ = writeln!(html, "    <img src=\"{}\" style=\"width: 250px;\">", src);
        }
        None => {
            let _ = writeln!(html, "    {}", NO_IMAGE);
        }
    }

    match &story.description {
        Some(description) => {
            let _ = writeln!(html, "    <p class=\"description\">{}</p>", description);
        }
        None => {
            let _ = writeln!(html, "    {}", NO_DESCRIPTION);
        }
    }

    let date_line = match source {
        Source::Sbs => format!("[{}]", source.display_name()),
        _ => format!("[{} - {}]", source.display_name(), story.published),
    };
    let _ = writeln!(html, "    <h3 class=\"date\">{}</h3>", date_line);
    html.push_str("    <hr class=\"newsDivider\">\n");
}
