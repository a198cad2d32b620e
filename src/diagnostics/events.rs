// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types.

use crate::api::FetchFailure;
use std::fmt;
use std::time::Instant;

/// Which network request an event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    /// The random image shown in the main view.
    MainImage,
    /// The batch that fills the thumbnail row.
    Thumbnails,
    /// Raw bytes of an image already listed by one of the above.
    ImageBytes,
    /// Building the HTTP client, before any request is sent.
    Client,
}

impl fmt::Display for FetchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FetchKind::MainImage => "main_image",
            FetchKind::Thumbnails => "thumbnails",
            FetchKind::ImageBytes => "image_bytes",
            FetchKind::Client => "client",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DiagnosticEventKind {
    FetchFailed {
        request: FetchKind,
        failure: FetchFailure,
    },
    /// Settings could not be read; the message is the warning key.
    ConfigWarning { key: String },
}

/// A timestamped diagnostic event.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    pub at: Instant,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            at: Instant::now(),
            kind,
        }
    }

    #[must_use]
    pub fn fetch_failed(request: FetchKind, failure: FetchFailure) -> Self {
        Self::new(DiagnosticEventKind::FetchFailed { request, failure })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_kind_display_is_snake_case() {
        assert_eq!(FetchKind::MainImage.to_string(), "main_image");
        assert_eq!(FetchKind::Thumbnails.to_string(), "thumbnails");
        assert_eq!(FetchKind::ImageBytes.to_string(), "image_bytes");
        assert_eq!(FetchKind::Client.to_string(), "client");
    }

    #[test]
    fn fetch_failed_constructor_sets_kind() {
        let event = DiagnosticEvent::fetch_failed(FetchKind::Thumbnails, FetchFailure::Http(500));
        assert_eq!(
            event.kind,
            DiagnosticEventKind::FetchFailed {
                request: FetchKind::Thumbnails,
                failure: FetchFailure::Http(500),
            }
        );
    }
}
