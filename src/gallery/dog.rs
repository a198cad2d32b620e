// SPDX-License-Identifier: MPL-2.0
//! Dog image value types.

/// Position of the breed segment in a dog.ceo image URL once split on `/`.
///
/// `https://images.dog.ceo/breeds/<breed>/<file>.jpg` splits into
/// `["https:", "", "images.dog.ceo", "breeds", "<breed>", "<file>.jpg"]`.
const BREED_SEGMENT_INDEX: usize = 4;

/// Extracts the breed label from a dog.ceo image URL.
///
/// The breed is positional, not validated: any URL with fewer than five
/// segments yields `None`.
///
/// # Example
///
/// ```
/// use dog_gallery::gallery::breed_from_url;
///
/// let url = "https://images.dog.ceo/breeds/hound-afghan/n02088094_1003.jpg";
/// assert_eq!(breed_from_url(url), Some("hound-afghan"));
/// ```
#[must_use]
pub fn breed_from_url(url: &str) -> Option<&str> {
    url.split('/').nth(BREED_SEGMENT_INDEX)
}

/// An image URL paired with the breed derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DogImage {
    pub image: String,
    pub breed: String,
}

impl DogImage {
    /// Builds a `DogImage` whose breed is parsed from `url`.
    ///
    /// Malformed URLs produce an empty breed.
    pub fn from_url(url: impl Into<String>) -> Self {
        let image = url.into();
        let breed = breed_from_url(&image).unwrap_or_default().to_string();
        Self { image, breed }
    }
}

/// A member of the thumbnail row.
///
/// `id` is the position in the fetched batch and is only meaningful within
/// that batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    pub id: usize,
    pub dog: DogImage,
}

impl Thumbnail {
    /// Builds the thumbnail row from a batch of URLs, keeping batch order.
    pub fn batch_from_urls<I, S>(urls: I) -> Vec<Thumbnail>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        urls.into_iter()
            .enumerate()
            .map(|(id, url)| Thumbnail {
                id,
                dog: DogImage::from_url(url),
            })
            .collect()
    }
}
