// SPDX-License-Identifier: MPL-2.0
//! Placeholder shown until the thumbnail batch settles.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::typography;
use iced::widget::{Container, Text};
use iced::{alignment, Element, Length};

pub fn view(i18n: &I18n) -> Element<'_, Message> {
    Container::new(Text::new(i18n.tr("loading-dogs")).size(typography::TITLE_MD))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
