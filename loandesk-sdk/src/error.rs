pub use reqwest::StatusCode;
use thiserror::Error as ThisError;

/// Client error taxonomy. Transport failures cover an unreachable
/// server or an unparseable response body; application errors are
/// non-2xx responses carrying the server's `{"error": "..."}` payload.
#[derive(Debug, ThisError)]
pub enum Error {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{message}")]
    Api { status: StatusCode, message: String },
}

impl Error {
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }
}
