// SPDX-License-Identifier: MPL-2.0
//! `dog_gallery` is a small desktop gallery of random dog photos built with
//! the Iced GUI framework.
//!
//! It shows one random dog with its breed, a row of hound thumbnails that can
//! be promoted to the main view, and a session-only list of favorites. Images
//! come from the public dog.ceo API.

#![doc(html_root_url = "https://docs.rs/dog_gallery/0.1.0")]

pub mod api;
pub mod app;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod ui;
