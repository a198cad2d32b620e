// SPDX-License-Identifier: MPL-2.0
//! User-curated favorites, unique by image URL.

use super::dog::DogImage;
use std::fmt;

/// Session-unique handle of a favorite entry.
///
/// Ids are issued by [`Favorites`] from a monotonic counter, so every new id is
/// strictly greater than all ids issued before it in the same session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FavoriteId(u64);

impl fmt::Display for FavoriteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteEntry {
    pub id: FavoriteId,
    pub dog: DogImage,
}

/// Insertion-ordered favorites collection.
#[derive(Debug, Default)]
pub struct Favorites {
    entries: Vec<FavoriteEntry>,
    next_id: u64,
}

impl Favorites {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `dog` unless an entry with the same image URL already exists.
    ///
    /// Returns the id of the new entry, or `None` when the image was already a
    /// favorite.
    pub fn add(&mut self, dog: &DogImage) -> Option<FavoriteId> {
        if self.contains_image(&dog.image) {
            return None;
        }

        let id = FavoriteId(self.next_id);
        self.next_id += 1;
        self.entries.push(FavoriteEntry {
            id,
            dog: dog.clone(),
        });
        Some(id)
    }

    /// Removes the entry with `id`. Returns `true` if an entry was removed.
    pub fn remove(&mut self, id: FavoriteId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() < before
    }

    #[must_use]
    pub fn contains_image(&self, image: &str) -> bool {
        self.entries.iter().any(|entry| entry.dog.image == image)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FavoriteEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
