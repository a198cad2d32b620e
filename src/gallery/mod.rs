// SPDX-License-Identifier: MPL-2.0
//! Gallery state and the operations that mutate it.
//!
//! [`Gallery`] owns the main selection, the thumbnail row and the favorites.
//! It is the only writer of that state; the app layer feeds it fetch results
//! and user intents, and views read it through shared references.
//!
//! # Session phases
//!
//! A gallery starts in [`Phase::Loading`] and moves to [`Phase::Ready`] once
//! the thumbnail fetch settles, whether it succeeded or not. There is no way
//! back. User operations are ignored while loading.

mod dog;
mod favorites;

pub use dog::{breed_from_url, DogImage, Thumbnail};
pub use favorites::{FavoriteEntry, FavoriteId, Favorites};

/// Coarse session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Loading,
    Ready,
}

#[derive(Debug, Default)]
pub struct Gallery {
    phase: Phase,
    main: Option<DogImage>,
    thumbnails: Vec<Thumbnail>,
    favorites: Favorites,
}

impl Gallery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    #[must_use]
    pub fn main_selection(&self) -> Option<&DogImage> {
        self.main.as_ref()
    }

    #[must_use]
    pub fn thumbnails(&self) -> &[Thumbnail] {
        &self.thumbnails
    }

    #[must_use]
    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    // -------------------------------------------------------------------------
    // Initial load
    // -------------------------------------------------------------------------

    /// Applies the random main image fetched at startup.
    ///
    /// The result always becomes the main selection, even when the user picked
    /// a thumbnail while the request was in flight.
    pub fn main_image_loaded(&mut self, dog: DogImage) {
        if let Some(previous) = &self.main {
            tracing::debug!(previous = %previous.image, image = %dog.image, "main image replaces current selection");
        }
        self.main = Some(dog);
    }

    /// Replaces the thumbnail row and enters [`Phase::Ready`].
    ///
    /// Callers pass an empty batch when the fetch failed. Only the first call
    /// has an effect; returns whether the batch was applied.
    pub fn thumbnails_settled(&mut self, thumbnails: Vec<Thumbnail>) -> bool {
        if self.phase == Phase::Ready {
            tracing::debug!("thumbnail batch already settled, ignoring");
            return false;
        }
        self.thumbnails = thumbnails;
        self.phase = Phase::Ready;
        true
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    pub fn select_thumbnail(&mut self, thumbnail: &Thumbnail) {
        self.select(&thumbnail.dog);
    }

    pub fn select_favorite(&mut self, favorite: &FavoriteEntry) {
        self.select(&favorite.dog);
    }

    fn select(&mut self, dog: &DogImage) {
        if self.is_loading() {
            return;
        }
        self.main = Some(dog.clone());
    }

    // -------------------------------------------------------------------------
    // Favorites
    // -------------------------------------------------------------------------

    /// Saves the current main selection as a favorite.
    ///
    /// Does nothing when there is no selection or the image is already a
    /// favorite. Returns the id of the new entry, if any.
    pub fn add_current_to_favorites(&mut self) -> Option<FavoriteId> {
        if self.is_loading() {
            return None;
        }
        let dog = self.main.as_ref()?;
        let id = self.favorites.add(dog);
        match id {
            Some(id) => tracing::debug!(%id, breed = %dog.breed, "added favorite"),
            None => tracing::debug!(image = %dog.image, "image is already a favorite"),
        }
        id
    }

    /// Removes the favorite with `id`; unknown ids are ignored.
    pub fn remove_from_favorites(&mut self, id: FavoriteId) -> bool {
        if self.is_loading() {
            return false;
        }
        self.favorites.remove(id)
    }
}
