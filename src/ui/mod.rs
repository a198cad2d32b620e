// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! - [`gallery`] - The gallery screen (main image, thumbnails, favorites)
//! - [`image_store`] - Downloaded image handles keyed by URL
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod gallery;
pub mod image_store;
pub mod styles;
pub mod theming;
