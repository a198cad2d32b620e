// SPDX-License-Identifier: MPL-2.0
//! Clickable row of thumbnails with breed captions.

use super::{picture, Message, ViewContext};
use crate::gallery::Thumbnail;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{button, Column, Row, Scrollable, Text};
use iced::{alignment, Element, Length};

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let row = ctx
        .gallery
        .thumbnails()
        .iter()
        .fold(Row::new().spacing(spacing::SM), |row, thumbnail| {
            row.push(card(ctx, thumbnail))
        });

    Scrollable::new(row.padding([0.0, spacing::XS]))
        .direction(Direction::Horizontal(Scrollbar::new()))
        .width(Length::Fill)
        .into()
}

fn card<'a>(ctx: &ViewContext<'a>, thumbnail: &'a Thumbnail) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::XXS)
        .align_x(alignment::Horizontal::Center)
        .push(picture(
            ctx.images,
            &thumbnail.dog.image,
            &thumbnail.dog.breed,
            sizing::THUMBNAIL,
            ctx.i18n,
        ))
        .push(
            Text::new(thumbnail.dog.breed.as_str())
                .size(typography::CAPTION)
                .color(ctx.colors.text_secondary),
        );

    button(content)
        .padding(spacing::XXS)
        .style(styles::button::image_card)
        .on_press(Message::SelectThumbnail(thumbnail.clone()))
        .into()
}
