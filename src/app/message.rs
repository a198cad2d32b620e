// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::api::FetchFailure;
use crate::gallery::{DogImage, Thumbnail};
use crate::ui::gallery;
use iced::widget::image::Handle;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// The random main image requested at startup settled.
    MainImageFetched(Result<DogImage, FetchFailure>),
    /// The thumbnail batch requested at startup settled.
    ThumbnailsFetched(Result<Vec<Thumbnail>, FetchFailure>),
    /// Bytes for one image URL were downloaded (or not).
    ImageFetched {
        url: String,
        result: Result<Handle, FetchFailure>,
    },
    Gallery(gallery::Message),
}

/// Runtime flags passed in from the launcher.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `DOG_GALLERY_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional API base URL, replacing `[api] base_url` from the settings.
    pub api_base: Option<String>,
}
