use thiserror::Error;

/// Everything that can stop a run
#[derive(Error, Debug)]
pub enum Error {
    /// Connection, timeout or body read failure
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// A response body that is not the expected JSON
    #[error("Deserialization error: {0}")]
    DeserializationError(#[from] serde_json::Error),

    /// A status code the client cannot work with
    #[error("{service} API unexpected response: {message}")]
    UnexpectedResponse {
        /// Name of the remote service
        service: &'static str,
        /// What was requested and what came back
        message: String,
    },

    /// The catalog has no artist matching the name
    #[error("Could not find an artist named {0:?}, did you spell the artist name correctly?")]
    ArtistNotFound(String),

    /// The artist exists but has no recordings
    #[error("Could not find any tracks for {0}, did you spell the artist name correctly?")]
    NoTracks(String),

    /// None of the artist's tracks had lyrics
    #[error("No lyrics found for the artist {0}, did you spell the artist name correctly?")]
    NoLyrics(String),

    /// Invalid environment settings
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Writing the report failed
    #[error("Output error: {0}")]
    OutputError(#[from] std::io::Error),
}

impl From<std::env::VarError> for Error {
    fn from(err: std::env::VarError) -> Self {
        Error::ConfigurationError(err.to_string())
    }
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, Error>;
