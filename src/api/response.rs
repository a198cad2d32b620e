// SPDX-License-Identifier: MPL-2.0
//! JSON bodies returned by the dog.ceo endpoints.
//!
//! Both endpoints wrap their payload as `{ "message": ..., "status": "success" }`.
//! Error replies keep the same envelope with `"status": "error"` and a string
//! message, which is why the status is checked before the payload is used.

use super::FetchFailure;
use crate::gallery::{DogImage, Thumbnail};
use serde::Deserialize;

const SUCCESS_STATUS: &str = "success";

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    message: T,
    status: String,
}

impl<T> Envelope<T> {
    fn into_message(self) -> Result<T, FetchFailure> {
        if self.status == SUCCESS_STATUS {
            Ok(self.message)
        } else {
            Err(FetchFailure::Api {
                status: self.status,
            })
        }
    }
}

#[derive(Debug, Deserialize)]
struct StatusOnly {
    status: String,
}

fn decode<T>(body: &[u8]) -> Result<T, FetchFailure>
where
    T: for<'de> Deserialize<'de>,
{
    match serde_json::from_slice::<Envelope<T>>(body) {
        Ok(envelope) => envelope.into_message(),
        Err(err) => {
            // Error replies carry a string message where a list was expected;
            // prefer reporting the API status over the shape mismatch.
            match serde_json::from_slice::<StatusOnly>(body) {
                Ok(StatusOnly { status }) if status != SUCCESS_STATUS => {
                    Err(FetchFailure::Api { status })
                }
                _ => Err(err.into()),
            }
        }
    }
}

/// Decodes a `/breeds/image/random` body.
pub fn parse_random_image(body: &[u8]) -> Result<DogImage, FetchFailure> {
    let url: String = decode(body)?;
    Ok(DogImage::from_url(url))
}

/// Decodes a `/breed/{breed}/images/random/{count}` body.
pub fn parse_image_batch(body: &[u8]) -> Result<Vec<Thumbnail>, FetchFailure> {
    let urls: Vec<String> = decode(body)?;
    Ok(Thumbnail::batch_from_urls(urls))
}
