// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action button (back to the wall, show details).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, border_color, shadow) = match status {
        button::Status::Active | button::Status::Pressed => {
            (palette::PRIMARY_500, palette::PRIMARY_600, shadow::SM)
        }
        button::Status::Hovered => (palette::PRIMARY_400, palette::PRIMARY_500, shadow::MD),
        button::Status::Disabled => (palette::GRAY_200, palette::GRAY_400, shadow::NONE),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: if matches!(status, button::Status::Disabled) {
            palette::GRAY_400
        } else {
            WHITE
        },
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow,
        snap: true,
    }
}

/// Translucent button drawn over the wall.
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// [`overlay`] with the wall's standard colors.
pub fn overlay_default(theme: &Theme, status: button::Status) -> button::Style {
    overlay(WHITE, opacity::OVERLAY_MEDIUM, opacity::OVERLAY_HOVER)(theme, status)
}
