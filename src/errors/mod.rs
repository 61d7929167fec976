use thiserror::Error;

#[derive(Error, Debug)]
pub enum MixerError {
    // Network errors
    #[error("HTTP request failed: {0}")]
    Fetch(#[from] reqwest::Error),

    // Archived snapshot errors
    #[error("Archived snapshot not found: {0}")]
    ArchiveNotFound(String),

    // Startup extraction failure, tagged with the source it came from so one
    // broken source is never mistaken for another
    #[error("{source} unavailable: {cause}")]
    SourceUnavailable {
        source: &'static str,
        #[source]
        cause: Box<MixerError>,
    },

    // Storage errors
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // User input errors
    #[error("Invalid count for {source}: requested {requested}, only {available} available")]
    InvalidCount {
        // `r#` keeps thiserror from inferring this string as the error's source()
        r#source: &'static str,
        requested: usize,
        available: usize,
    },
}

pub type MixerResult<T> = Result<T, MixerError>;
