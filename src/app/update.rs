// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Fetch results are applied to the gallery here. Failures go through
//! [`log_fetch_failure`] and nowhere else, so they never reach the UI.

use super::Message;
use crate::api::{DogApi, FetchFailure};
use crate::diagnostics::{DiagnosticEvent, DiagnosticLog, FetchKind};
use crate::gallery::{DogImage, Gallery, Thumbnail};
use crate::ui::gallery::{self as gallery_view, Event as GalleryEvent};
use crate::ui::image_store::ImageStore;
use iced::widget::image::Handle;
use iced::Task;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub gallery: &'a mut Gallery,
    pub images: &'a mut ImageStore,
    pub diagnostics: &'a mut DiagnosticLog,
    /// `None` when the HTTP client could not be built.
    pub api: Option<&'a DogApi>,
}

/// Starts the two independent startup requests.
pub fn initial_load(api: &DogApi) -> Task<Message> {
    let main_api = api.clone();
    let main = Task::perform(
        async move { main_api.fetch_random_image().await },
        Message::MainImageFetched,
    );

    let batch_api = api.clone();
    let thumbnails = Task::perform(
        async move { batch_api.fetch_image_batch().await },
        Message::ThumbnailsFetched,
    );

    Task::batch([main, thumbnails])
}

pub fn handle_main_image(
    ctx: &mut UpdateContext<'_>,
    result: Result<DogImage, FetchFailure>,
) -> Task<Message> {
    match result {
        Ok(dog) => {
            let url = dog.image.clone();
            ctx.gallery.main_image_loaded(dog);
            request_images(ctx, [url])
        }
        Err(failure) => {
            log_fetch_failure(ctx.diagnostics, FetchKind::MainImage, failure);
            Task::none()
        }
    }
}

pub fn handle_thumbnails(
    ctx: &mut UpdateContext<'_>,
    result: Result<Vec<Thumbnail>, FetchFailure>,
) -> Task<Message> {
    match result {
        Ok(batch) => {
            let urls: Vec<String> = batch.iter().map(|t| t.dog.image.clone()).collect();
            if ctx.gallery.thumbnails_settled(batch) {
                tracing::info!(count = urls.len(), "thumbnails ready");
                request_images(ctx, urls)
            } else {
                Task::none()
            }
        }
        Err(failure) => {
            log_fetch_failure(ctx.diagnostics, FetchKind::Thumbnails, failure);
            // Loading ends on failure as well, with an empty row
            ctx.gallery.thumbnails_settled(Vec::new());
            Task::none()
        }
    }
}

pub fn handle_image_fetched(
    ctx: &mut UpdateContext<'_>,
    url: String,
    result: Result<Handle, FetchFailure>,
) -> Task<Message> {
    match result {
        Ok(handle) => ctx.images.set_ready(url, handle),
        Err(failure) => {
            tracing::debug!(%url, "image bytes unavailable");
            log_fetch_failure(ctx.diagnostics, FetchKind::ImageBytes, failure);
            ctx.images.set_failed(url);
        }
    }
    Task::none()
}

pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery_view::Message,
) -> Task<Message> {
    match gallery_view::update(message, ctx.gallery) {
        GalleryEvent::SelectionChanged => {
            let url = ctx.gallery.main_selection().map(|dog| dog.image.clone());
            request_images(ctx, url)
        }
        GalleryEvent::FavoriteAdded(id) => {
            tracing::info!(%id, total = ctx.gallery.favorites().len(), "favorite added");
            Task::none()
        }
        GalleryEvent::FavoriteRemoved(id) => {
            tracing::info!(%id, total = ctx.gallery.favorites().len(), "favorite removed");
            Task::none()
        }
        GalleryEvent::None => Task::none(),
    }
}

/// Downloads every URL the image store has not seen yet.
fn request_images(
    ctx: &mut UpdateContext<'_>,
    urls: impl IntoIterator<Item = String>,
) -> Task<Message> {
    let mut tasks = Vec::new();
    for url in urls {
        if !ctx.images.request(&url) {
            continue;
        }
        let Some(api) = ctx.api.cloned() else {
            ctx.images.set_failed(url);
            continue;
        };
        tasks.push(Task::perform(
            async move {
                let result = api.fetch_image_bytes(&url).await.map(Handle::from_bytes);
                (url, result)
            },
            |(url, result)| Message::ImageFetched { url, result },
        ));
    }

    Task::batch(tasks)
}

/// The single place where fetch failures are handled: logged and recorded,
/// never surfaced to the user.
pub fn log_fetch_failure(diagnostics: &mut DiagnosticLog, request: FetchKind, failure: FetchFailure) {
    tracing::warn!(%request, error = %failure, "fetch failed");
    diagnostics.push(DiagnosticEvent::fetch_failed(request, failure));
}
