use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to connect to tenor: {0}")]
    Connection(#[source] reqwest::Error),
    #[error("Tenor returned status {0}: {1}")]
    Status(StatusCode, #[source] reqwest::Error),
    #[error("Request failed: {0}")]
    Request(#[source] reqwest::Error),
    #[error("Failed to parse url: {0}")]
    Url(#[from] url::ParseError),
}

impl Error {
    /// The HTTP status code, when the failure was an error response.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Status(status, _) => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        if error.is_connect() {
            Error::Connection(error)
        } else if let Some(status) = error.status() {
            Error::Status(status, error)
        } else {
            Error::Request(error)
        }
    }
}
