// SPDX-License-Identifier: MPL-2.0
//! Downloaded image handles, keyed by image URL.
//!
//! Every URL is downloaded at most once per session. Favorites reuse the
//! handles of the thumbnail or main image they were created from.

use iced::widget::image::Handle;
use std::collections::HashMap;

/// Render state of one image URL.
#[derive(Debug, Clone)]
pub enum ImageSlot {
    Loading,
    Ready(Handle),
    Failed,
}

#[derive(Debug, Default)]
pub struct ImageStore {
    slots: HashMap<String, ImageSlot>,
}

impl ImageStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `url` as loading unless it is already known.
    ///
    /// Returns `true` when the caller should start a download.
    pub fn request(&mut self, url: &str) -> bool {
        if url.is_empty() || self.slots.contains_key(url) {
            return false;
        }
        self.slots.insert(url.to_string(), ImageSlot::Loading);
        true
    }

    pub fn set_ready(&mut self, url: String, handle: Handle) {
        self.slots.insert(url, ImageSlot::Ready(handle));
    }

    pub fn set_failed(&mut self, url: String) {
        self.slots.insert(url, ImageSlot::Failed);
    }

    #[must_use]
    pub fn get(&self, url: &str) -> Option<&ImageSlot> {
        self.slots.get(url)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
