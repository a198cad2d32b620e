// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the gallery state, localization, the dog
//! API client and the downloaded image handles, and translates messages into
//! side effects like network requests.

mod message;
pub mod paths;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::api::DogApi;
use crate::config::{self, ApiConfig};
use crate::api::FetchFailure;
use crate::diagnostics::{DiagnosticEvent, DiagnosticEventKind, DiagnosticLog, FetchKind};
use crate::gallery::Gallery;
use crate::i18n::fluent::I18n;
use crate::ui::image_store::ImageStore;
use crate::ui::theming::AppTheme;
use iced::{window, Element, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    gallery: Gallery,
    api: Option<DogApi>,
    images: ImageStore,
    /// Fetch failures and other problems recorded during this session.
    diagnostics: DiagnosticLog,
    theme: AppTheme,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("phase", &self.gallery.phase())
            .field("favorites", &self.gallery.favorites().len())
            .field("images", &self.images.len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 720;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_override(flags.config_dir.clone());

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            gallery: Gallery::new(),
            api: DogApi::new(&ApiConfig::default()).ok(),
            images: ImageStore::new(),
            diagnostics: DiagnosticLog::default(),
            theme: AppTheme::default(),
        }
    }
}

impl App {
    /// Initializes application state and kicks off the two startup requests.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (mut config, config_warning) = config::load();
        if let Some(base_url) = flags.api_base {
            config.api.base_url = base_url;
        }

        let mut app = App {
            i18n: I18n::new(flags.lang, &config),
            api: None,
            theme: AppTheme::new(config.general.theme_mode),
            ..Self::default()
        };

        if let Some(key) = config_warning {
            tracing::warn!(%key, "{}", app.i18n.tr(&key));
            app.diagnostics
                .push(DiagnosticEvent::new(DiagnosticEventKind::ConfigWarning { key }));
        }

        let task = app.start(DogApi::new(&config.api));
        (app, task)
    }

    /// Installs the API client and issues the startup requests.
    ///
    /// Without a client nothing will ever arrive, so the gallery settles
    /// right away with an empty thumbnail row.
    fn start(&mut self, api: Result<DogApi, FetchFailure>) -> Task<Message> {
        match api {
            Ok(api) => {
                tracing::info!(
                    locale = %self.i18n.current_locale(),
                    random = %api.random_image_url(),
                    batch = %api.image_batch_url(),
                    "starting gallery"
                );
                let task = update::initial_load(&api);
                self.api = Some(api);
                task
            }
            Err(failure) => {
                update::log_fetch_failure(&mut self.diagnostics, FetchKind::Client, failure);
                self.api = None;
                self.gallery.thumbnails_settled(Vec::new());
                Task::none()
            }
        }
    }

    fn title(&self) -> String {
        match self.gallery.main_selection() {
            Some(dog) if !dog.breed.is_empty() => self
                .i18n
                .tr_with_args("window-title-with-breed", &[("breed", dog.breed.as_str())]),
            _ => self.i18n.tr("window-title"),
        }
    }

    fn theme(&self) -> Theme {
        self.theme.theme.clone()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            gallery: &mut self.gallery,
            images: &mut self.images,
            diagnostics: &mut self.diagnostics,
            api: self.api.as_ref(),
        };

        match message {
            Message::MainImageFetched(result) => update::handle_main_image(&mut ctx, result),
            Message::ThumbnailsFetched(result) => update::handle_thumbnails(&mut ctx, result),
            Message::ImageFetched { url, result } => {
                update::handle_image_fetched(&mut ctx, url, result)
            }
            Message::Gallery(gallery_message) => {
                update::handle_gallery_message(&mut ctx, gallery_message)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            gallery: &self.gallery,
            images: &self.images,
            colors: &self.theme.colors,
        })
    }
}
