use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Errors returned by the transport and passed through unchanged by
/// [`UsersService`](crate::UsersService).
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The configured base URL cannot serve as a base for relative paths
    #[error("Invalid base URL '{url}': must be absolute and end with '/'")]
    InvalidBaseUrl { url: String },

    /// A request path could not be resolved against the base URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Header value rejected while building the HTTP client
    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    /// Request body could not be serialized to JSON
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// Network or connection failure
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// GitHub answered with a non-2xx status
    #[error("GitHub API error ({status}): {message}")]
    Api {
        status: StatusCode,
        message: String,
        errors: Vec<FieldError>,
    },

    /// Response body was not valid JSON or did not match the expected shape
    #[error("Failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),
}

impl Error {
    /// HTTP status of an API error, if this is one.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// One entry of the `errors` array in a GitHub error document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FieldError {
    #[serde(default)]
    pub resource: String,
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub code: String,
}

/// Body GitHub sends alongside a failing status.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorResponse {
    pub message: String,
    #[serde(default)]
    pub errors: Vec<FieldError>,
}

impl ErrorResponse {
    /// Builds an [`Error::Api`] from a status and raw body. Bodies that are not
    /// a GitHub error document become the message verbatim.
    pub(crate) fn into_error(status: StatusCode, body: &str) -> Error {
        match serde_json::from_str::<ErrorResponse>(body) {
            Ok(doc) => Error::Api {
                status,
                message: doc.message,
                errors: doc.errors,
            },
            Err(_) => Error::Api {
                status,
                message: body.trim().to_owned(),
                errors: Vec::new(),
            },
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
