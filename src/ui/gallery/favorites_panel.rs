// SPDX-License-Identifier: MPL-2.0
//! Favorites sidebar.
//!
//! Each entry shows its image (click to make it the main image), its breed
//! and a "Remove" button. An empty list shows a short hint instead.

use super::{picture, Message, ViewContext};
use crate::gallery::FavoriteEntry;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{button, Column, Row, Scrollable, Text};
use iced::{alignment, Element, Length};

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("favorites-title")).size(typography::TITLE_MD);

    let favorites = ctx.gallery.favorites();
    let body: Element<'a, Message> = if favorites.is_empty() {
        Text::new(ctx.i18n.tr("favorites-empty"))
            .size(typography::BODY)
            .color(ctx.colors.text_secondary)
            .into()
    } else {
        let list = favorites
            .iter()
            .fold(Column::new().spacing(spacing::SM), |list, entry| {
                list.push(item(ctx, entry))
            });

        Scrollable::new(list)
            .direction(Direction::Vertical(Scrollbar::new()))
            .height(Length::Fill)
            .width(Length::Fill)
            .into()
    };

    Column::new()
        .spacing(spacing::MD)
        .push(title)
        .push(body)
        .into()
}

fn item<'a>(ctx: &ViewContext<'a>, entry: &'a FavoriteEntry) -> Element<'a, Message> {
    let preview = button(picture(
        ctx.images,
        &entry.dog.image,
        &entry.dog.breed,
        sizing::FAVORITE_THUMBNAIL,
        ctx.i18n,
    ))
    .padding(spacing::XXS)
    .style(styles::button::image_card)
    .on_press(Message::SelectFavorite(entry.clone()));

    let remove = button(Text::new(ctx.i18n.tr("favorite-remove")).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::danger)
        .on_press(Message::RemoveFavorite(entry.id));

    let info = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(entry.dog.breed.as_str()).size(typography::BODY))
        .push(remove);

    Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(preview)
        .push(info)
        .into()
}
