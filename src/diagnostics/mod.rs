// SPDX-License-Identifier: MPL-2.0
//! In-memory record of things that went wrong while the app was running.
//!
//! Failures never reach the user interface. They are logged through
//! `tracing` and kept here, in a memory-bounded circular buffer, so that
//! tests and debugging sessions can inspect them.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: A timestamped [`DiagnosticEventKind`]
//! - [`BufferCapacity`]: Newtype for validated buffer capacity bounds

mod buffer;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use events::{DiagnosticEvent, DiagnosticEventKind, FetchKind};

/// Buffer of the events recorded during this session.
pub type DiagnosticLog = CircularBuffer<DiagnosticEvent>;

/// Counts recorded fetch failures for one request kind.
#[must_use]
pub fn fetch_failures(log: &DiagnosticLog, request: FetchKind) -> usize {
    log.iter()
        .filter(|event| {
            matches!(
                &event.kind,
                DiagnosticEventKind::FetchFailed { request: r, .. } if *r == request
            )
        })
        .count()
}
