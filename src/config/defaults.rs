// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **API**: dog.ceo endpoint and thumbnail batch parameters
//! - **Diagnostics**: Event buffer bounds

// ==========================================================================
// API Defaults
// ==========================================================================

/// Base URL of the public dog image API.
pub const DEFAULT_API_BASE_URL: &str = "https://dog.ceo/api";

/// Breed whose images fill the thumbnail row.
pub const DEFAULT_THUMBNAIL_BREED: &str = "hound";

/// Number of thumbnails requested at startup.
pub const DEFAULT_THUMBNAIL_COUNT: u32 = 10;

/// Minimum number of thumbnails that can be requested.
pub const MIN_THUMBNAIL_COUNT: u32 = 1;

/// Maximum number of thumbnails the API serves in one batch.
pub const MAX_THUMBNAIL_COUNT: u32 = 50;

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("DogGallery/", env!("CARGO_PKG_VERSION"));

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of diagnostic events kept in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 256;

/// Minimum diagnostic buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 1;

/// Maximum diagnostic buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10_000;

const _: () = {
    assert!(MIN_THUMBNAIL_COUNT <= DEFAULT_THUMBNAIL_COUNT);
    assert!(DEFAULT_THUMBNAIL_COUNT <= MAX_THUMBNAIL_COUNT);
    assert!(MIN_DIAGNOSTICS_BUFFER_CAPACITY <= DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
};
