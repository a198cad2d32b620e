// SPDX-License-Identifier: MPL-2.0
//! Client for the public dog image API (dog.ceo).
//!
//! Every request returns `Result<_, FetchFailure>`; callers decide what a
//! failure means. The app logs and otherwise ignores them.
//!
//! # Endpoints
//!
//! - `GET {base}/breeds/image/random` - one random image URL
//! - `GET {base}/breed/{breed}/images/random/{count}` - a batch of image URLs
//!
//! Image bytes are downloaded from whatever host the returned URLs point to.

mod error;
mod response;

pub use error::FetchFailure;
pub use response::{parse_image_batch, parse_random_image};

use crate::config::{ApiConfig, USER_AGENT};
use crate::gallery::{DogImage, Thumbnail};

/// Cheaply cloneable handle to the API; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct DogApi {
    client: reqwest::Client,
    base_url: String,
    thumbnail_breed: String,
    thumbnail_count: u32,
}

impl DogApi {
    /// Builds the client for `config`.
    ///
    /// Fails with [`FetchFailure::Transport`] when the HTTP client cannot be
    /// created, e.g. when no TLS backend is usable.
    pub fn new(config: &ApiConfig) -> Result<Self, FetchFailure> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            thumbnail_breed: config.thumbnail_breed.clone(),
            thumbnail_count: config.clamped_thumbnail_count(),
        })
    }

    #[must_use]
    pub fn random_image_url(&self) -> String {
        format!("{}/breeds/image/random", self.base_url)
    }

    #[must_use]
    pub fn image_batch_url(&self) -> String {
        format!(
            "{}/breed/{}/images/random/{}",
            self.base_url, self.thumbnail_breed, self.thumbnail_count
        )
    }

    /// Fetches one random image for the main view.
    pub async fn fetch_random_image(&self) -> Result<DogImage, FetchFailure> {
        let body = self.get(&self.random_image_url()).await?;
        parse_random_image(&body)
    }

    /// Fetches the thumbnail batch for the configured breed.
    pub async fn fetch_image_batch(&self) -> Result<Vec<Thumbnail>, FetchFailure> {
        let body = self.get(&self.image_batch_url()).await?;
        parse_image_batch(&body)
    }

    /// Downloads the raw bytes of an image returned by one of the endpoints.
    pub async fn fetch_image_bytes(&self, url: &str) -> Result<Vec<u8>, FetchFailure> {
        self.get(url).await
    }

    async fn get(&self, url: &str) -> Result<Vec<u8>, FetchFailure> {
        tracing::debug!(url, "GET");
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            // dog.ceo wraps errors in its usual envelope; surface that status
            // when present, the HTTP code otherwise.
            let body = response.bytes().await.unwrap_or_default();
            return Err(match parse_random_image(&body) {
                Err(api @ FetchFailure::Api { .. }) => api,
                _ => FetchFailure::Http(status.as_u16()),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoints_match_dog_ceo() {
        let api = DogApi::new(&ApiConfig::default()).expect("client");
        assert_eq!(
            api.random_image_url(),
            "https://dog.ceo/api/breeds/image/random"
        );
        assert_eq!(
            api.image_batch_url(),
            "https://dog.ceo/api/breed/hound/images/random/10"
        );
    }

    #[test]
    fn trailing_slash_in_base_url_is_ignored() {
        let api = DogApi::new(&ApiConfig {
            base_url: "http://localhost:9000/api/".into(),
            ..ApiConfig::default()
        })
        .expect("client");
        assert_eq!(
            api.random_image_url(),
            "http://localhost:9000/api/breeds/image/random"
        );
    }

    #[test]
    fn batch_url_uses_configured_breed_and_clamped_count() {
        let api = DogApi::new(&ApiConfig {
            thumbnail_breed: "retriever".into(),
            thumbnail_count: 999,
            ..ApiConfig::default()
        })
        .expect("client");
        assert_eq!(
            api.image_batch_url(),
            "https://dog.ceo/api/breed/retriever/images/random/50"
        );
    }
}
