use session::SessionError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalystError {
    /// No API key is configured. The analysis feature is disabled;
    /// nothing else is affected.
    #[error("no API key configured; terrain analysis is disabled")]
    MissingApiKey,

    #[error("analysis request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("analysis API error ({status}): {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("analysis response contained no text")]
    EmptyResponse,

    #[error("{0}")]
    Session(#[from] SessionError),
}
