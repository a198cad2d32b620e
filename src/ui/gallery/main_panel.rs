// SPDX-License-Identifier: MPL-2.0
//! Main image with its breed label and the "Add to Favorites" action.

use super::{picture, Message, ViewContext};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Text};
use iced::{alignment, Element, Length};

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let colors = ctx.colors;
    let main = ctx.gallery.main_selection();

    // Disabled until there is something to add
    let add_button = button(Text::new(ctx.i18n.tr("add-to-favorites")))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary)
        .on_press_maybe(main.map(|_| Message::AddToFavorites));

    let column = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center);

    let Some(main) = main else {
        // Startup fetch failed and nothing has been picked yet
        let empty = Container::new(
            Text::new(ctx.i18n.tr("main-image-empty"))
                .size(typography::BODY)
                .color(colors.text_secondary),
        )
        .width(Length::Fixed(sizing::MAIN_IMAGE))
        .height(Length::Fixed(sizing::MAIN_IMAGE))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::image_placeholder);

        return column.push(empty).push(add_button).into();
    };

    let breed = if main.breed.is_empty() {
        ctx.i18n.tr("breed-unknown")
    } else {
        main.breed.clone()
    };

    let label = Text::new(
        ctx.i18n
            .tr_with_args("breed-label", &[("breed", breed.as_str())]),
    )
    .size(typography::BODY_LG)
    .color(colors.text_primary);

    column
        .push(picture(
            ctx.images,
            &main.image,
            &breed,
            sizing::MAIN_IMAGE,
            ctx.i18n,
        ))
        .push(label)
        .push(add_button)
        .into()
}
