// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::gallery::Gallery;
use crate::i18n::fluent::I18n;
use crate::ui::gallery::{self, ViewContext as GalleryViewContext};
use crate::ui::image_store::ImageStore;
use crate::ui::theming::ColorScheme;
use iced::{widget::Container, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a Gallery,
    pub images: &'a ImageStore,
    pub colors: &'a ColorScheme,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content = gallery::view(GalleryViewContext {
        i18n: ctx.i18n,
        gallery: ctx.gallery,
        images: ctx.images,
        colors: ctx.colors,
    })
    .map(Message::Gallery);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
