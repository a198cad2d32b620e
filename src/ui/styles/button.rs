// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action ("Add to Favorites").
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(palette::GRAY_200)),
            text_color: palette::GRAY_400,
            border: Border {
                color: palette::GRAY_400,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Destructive action ("Remove" on a favorite).
pub fn danger(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);
    let base = if is_light {
        palette::ERROR_500
    } else {
        palette::ERROR_400
    };

    let background = match status {
        button::Status::Hovered => Color {
            a: opacity::OVERLAY_HOVER,
            ..base
        },
        _ => base,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Clickable image card (thumbnails, favorite previews).
///
/// Transparent at rest; hovering outlines the card with the brand color.
pub fn image_card(theme: &Theme, status: button::Status) -> button::Style {
    let text_color = theme.extended_palette().background.base.text;

    let (background, border_color) = match status {
        button::Status::Hovered => (
            Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::PRIMARY_500
            },
            palette::PRIMARY_500,
        ),
        button::Status::Pressed => (
            Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::PRIMARY_500
            },
            palette::PRIMARY_600,
        ),
        _ => (Color::TRANSPARENT, Color::TRANSPARENT),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_uses_brand_background_when_active() {
        let style = primary(&Theme::Light, button::Status::Active);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::PRIMARY_500))
        );
        assert_eq!(style.text_color, WHITE);
    }

    #[test]
    fn danger_background_adapts_to_theme() {
        let light = danger(&Theme::Light, button::Status::Active);
        let dark = danger(&Theme::Dark, button::Status::Active);
        assert_eq!(light.background, Some(Background::Color(palette::ERROR_500)));
        assert_eq!(dark.background, Some(Background::Color(palette::ERROR_400)));
    }

    #[test]
    fn image_card_is_transparent_until_hovered() {
        let idle = image_card(&Theme::Dark, button::Status::Active);
        assert_eq!(idle.border.color, Color::TRANSPARENT);

        let hovered = image_card(&Theme::Dark, button::Status::Hovered);
        assert_eq!(hovered.border.color, palette::PRIMARY_500);
    }
}
