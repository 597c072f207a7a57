use crate::Difficulty;
use thiserror::Error;

/// Error type for the question pipeline.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Transport-level failure from the HTTP client.
    #[error("unable to download: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The server answered with something other than 200.
    #[error("unable to download {url} (status {status})")]
    Download {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The question index was not valid JSON.
    #[error("malformed question index: {0}")]
    Parse(#[from] serde_json::Error),

    /// The difficulty and paid-only filter left nothing to pick from.
    #[error("no free {} questions available", .0.name())]
    NoQuestions(Difficulty),

    /// The question page has no description container.
    #[error("question description not found")]
    DescriptionNotFound,
}
