// SPDX-License-Identifier: MPL-2.0
//! Gallery screen: main image, thumbnail row and favorites panel.
//!
//! Follows the usual "state down, messages up" split. [`view`] renders a
//! [`Gallery`] it only borrows, and [`update`] applies a [`Message`] to it,
//! reporting what changed as an [`Event`] for the application to react to.

mod favorites_panel;
mod loading;
mod main_panel;
mod thumbnails;

use crate::gallery::{FavoriteEntry, FavoriteId, Gallery, Thumbnail};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::image_store::{ImageSlot, ImageStore};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{image, Column, Container, Row, Text};
use iced::{alignment, ContentFit, Element, Length};

/// Contextual data needed to render the gallery.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a Gallery,
    pub images: &'a ImageStore,
    pub colors: &'a ColorScheme,
}

/// Messages emitted by the gallery views.
#[derive(Debug, Clone)]
pub enum Message {
    SelectThumbnail(Thumbnail),
    SelectFavorite(FavoriteEntry),
    AddToFavorites,
    RemoveFavorite(FavoriteId),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    SelectionChanged,
    FavoriteAdded(FavoriteId),
    FavoriteRemoved(FavoriteId),
}

/// Process a gallery message and return the corresponding event.
pub fn update(message: Message, gallery: &mut Gallery) -> Event {
    match message {
        Message::SelectThumbnail(thumbnail) => {
            gallery.select_thumbnail(&thumbnail);
            selection_event(gallery, &thumbnail.dog.image)
        }
        Message::SelectFavorite(favorite) => {
            gallery.select_favorite(&favorite);
            selection_event(gallery, &favorite.dog.image)
        }
        Message::AddToFavorites => gallery
            .add_current_to_favorites()
            .map_or(Event::None, Event::FavoriteAdded),
        Message::RemoveFavorite(id) => {
            if gallery.remove_from_favorites(id) {
                Event::FavoriteRemoved(id)
            } else {
                Event::None
            }
        }
    }
}

fn selection_event(gallery: &Gallery, image: &str) -> Event {
    match gallery.main_selection() {
        Some(main) if main.image == image => Event::SelectionChanged,
        _ => Event::None,
    }
}

/// Render the gallery screen, or the loading placeholder while the
/// thumbnail batch is outstanding.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    if ctx.gallery.is_loading() {
        return loading::view(ctx.i18n);
    }

    let heading = Text::new(ctx.i18n.tr("window-title")).size(typography::TITLE_LG);

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .width(Length::Fill)
        .push(main_panel::view(&ctx))
        .push(thumbnails::view(&ctx));

    let favorites = Container::new(favorites_panel::view(&ctx))
        .width(Length::Fixed(sizing::FAVORITES_PANEL_WIDTH))
        .height(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::panel);

    let body = Row::new()
        .spacing(spacing::LG)
        .height(Length::Fill)
        .push(content)
        .push(favorites);

    Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(heading)
        .push(body)
        .into()
}

/// Square image slot for `url`, falling back to `alt` text while the bytes
/// are missing or could not be downloaded.
fn picture<'a>(
    images: &'a ImageStore,
    url: &str,
    alt: &str,
    size: f32,
    i18n: &I18n,
) -> Element<'a, Message> {
    if let Some(ImageSlot::Ready(handle)) = images.get(url) {
        return image(handle.clone())
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .content_fit(ContentFit::Cover)
            .into();
    }

    let label = match images.get(url) {
        Some(ImageSlot::Loading) => i18n.tr("image-loading"),
        _ => alt.to_string(),
    };

    Container::new(Text::new(label).size(typography::CAPTION))
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::image_placeholder)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::DogImage;

    const AFGHAN: &str = "https://images.dog.ceo/breeds/hound-afghan/n02088094_1003.jpg";
    const BASSET: &str = "https://images.dog.ceo/breeds/hound-basset/n02088238_10005.jpg";

    fn ready_gallery() -> Gallery {
        let mut gallery = Gallery::new();
        gallery.main_image_loaded(DogImage::from_url(AFGHAN));
        gallery.thumbnails_settled(Thumbnail::batch_from_urls([BASSET]));
        gallery
    }

    #[test]
    fn selecting_thumbnail_reports_selection_change() {
        let mut gallery = ready_gallery();
        let thumbnail = gallery.thumbnails()[0].clone();

        let event = update(Message::SelectThumbnail(thumbnail), &mut gallery);

        assert_eq!(event, Event::SelectionChanged);
        assert_eq!(
            gallery.main_selection().map(|dog| dog.breed.as_str()),
            Some("hound-basset")
        );
    }

    #[test]
    fn selecting_while_loading_reports_nothing() {
        let mut gallery = Gallery::new();
        let thumbnail = Thumbnail::batch_from_urls([BASSET]).remove(0);

        let event = update(Message::SelectThumbnail(thumbnail), &mut gallery);

        assert_eq!(event, Event::None);
        assert!(gallery.main_selection().is_none());
    }

    #[test]
    fn adding_twice_reports_one_addition() {
        let mut gallery = ready_gallery();

        let first = update(Message::AddToFavorites, &mut gallery);
        let second = update(Message::AddToFavorites, &mut gallery);

        assert!(matches!(first, Event::FavoriteAdded(_)));
        assert_eq!(second, Event::None);
        assert_eq!(gallery.favorites().len(), 1);
    }

    #[test]
    fn removing_unknown_favorite_reports_nothing() {
        let mut gallery = ready_gallery();
        let Event::FavoriteAdded(id) = update(Message::AddToFavorites, &mut gallery) else {
            panic!("expected a new favorite");
        };

        assert_eq!(
            update(Message::RemoveFavorite(id), &mut gallery),
            Event::FavoriteRemoved(id)
        );
        assert_eq!(update(Message::RemoveFavorite(id), &mut gallery), Event::None);
        assert!(gallery.favorites().is_empty());
    }

    #[test]
    fn selecting_favorite_restores_main_image() {
        let mut gallery = ready_gallery();
        update(Message::AddToFavorites, &mut gallery);
        let favorite = gallery
            .favorites()
            .iter()
            .next()
            .cloned()
            .expect("one favorite");
        let thumbnail = gallery.thumbnails()[0].clone();
        update(Message::SelectThumbnail(thumbnail), &mut gallery);

        let event = update(Message::SelectFavorite(favorite), &mut gallery);

        assert_eq!(event, Event::SelectionChanged);
        assert_eq!(
            gallery.main_selection().map(|dog| dog.image.as_str()),
            Some(AFGHAN)
        );
    }

    #[test]
    fn main_panel_builds_with_and_without_selection() {
        let i18n = I18n::default();
        let images = ImageStore::new();
        let colors = ColorScheme::light();

        let mut empty = Gallery::new();
        empty.thumbnails_settled(Vec::new());
        let ctx = ViewContext {
            i18n: &i18n,
            gallery: &empty,
            images: &images,
            colors: &colors,
        };
        let _ = main_panel::view(&ctx);

        let ready = ready_gallery();
        let ctx = ViewContext {
            gallery: &ready,
            ..ctx
        };
        let _ = main_panel::view(&ctx);
        let _ = view(ctx);
    }
}
