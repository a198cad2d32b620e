// SPDX-License-Identifier: MPL-2.0
use thiserror::Error;

/// Why a request to the dog image API did not produce usable data.
///
/// Cloneable so results can travel inside iced messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchFailure {
    /// The request could not be sent or the body could not be read.
    #[error("transport error: {0}")]
    Transport(String),

    /// The server answered with a non-success HTTP status.
    #[error("HTTP status {0}")]
    Http(u16),

    /// The body was not the JSON shape the endpoint documents.
    #[error("unexpected response body: {0}")]
    Decode(String),

    /// The body was well-formed but reported a failure.
    #[error("API reported status `{status}`")]
    Api { status: String },
}

impl From<reqwest::Error> for FetchFailure {
    fn from(err: reqwest::Error) -> Self {
        FetchFailure::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for FetchFailure {
    fn from(err: serde_json::Error) -> Self {
        FetchFailure::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_http_status() {
        assert_eq!(FetchFailure::Http(404).to_string(), "HTTP status 404");
    }

    #[test]
    fn api_failure_display_names_status() {
        let err = FetchFailure::Api {
            status: "error".into(),
        };
        assert_eq!(err.to_string(), "API reported status `error`");
    }

    #[test]
    fn json_error_becomes_decode_variant() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(FetchFailure::from(err), FetchFailure::Decode(_)));
    }
}
