use std::path::PathBuf;

const DEFAULT_DB_PATH: &str = "news_log.db";
const DEFAULT_HTML_PATH: &str = "news.html";
const DEFAULT_WEATHERZONE_PATH: &str = "data/xml_files/2019-10-14-weatherzone.xml";
const DEFAULT_COURIER_MAIL_PATH: &str = "data/xml_files/2019-10-14-courier-mail.xml";

#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: String,
    pub html_path: PathBuf,
    pub weatherzone_path: PathBuf,
    pub courier_mail_path: PathBuf,
}

impl Config {
    /// Every setting has a working default, so loading cannot fail; the env
    /// vars (and an optional .env file) only override.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            db_path: std::env::var("NEWSMIX_DB_PATH")
                .unwrap_or_else(|_| DEFAULT_DB_PATH.to_string()),
            html_path: std::env::var("NEWSMIX_HTML_PATH")
                .unwrap_or_else(|_| DEFAULT_HTML_PATH.to_string())
                .into(),
            weatherzone_path: std::env::var("NEWSMIX_WEATHERZONE_PATH")
                .unwrap_or_else(|_| DEFAULT_WEATHERZONE_PATH.to_string())
                .into(),
            courier_mail_path: std::env::var("NEWSMIX_COURIER_MAIL_PATH")
                .unwrap_or_else(|_| DEFAULT_COURIER_MAIL_PATH.to_string())
                .into(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: DEFAULT_DB_PATH.to_string(),
            html_path: DEFAULT_HTML_PATH.into(),
            weatherzone_path: DEFAULT_WEATHERZONE_PATH.into(),
            courier_mail_path: DEFAULT_COURIER_MAIL_PATH.into(),
        }
    }
}
