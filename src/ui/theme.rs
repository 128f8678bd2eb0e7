// SPDX-License-Identifier: MPL-2.0
//! Shared UI color helpers.

use crate::ui::design_tokens::palette;
use iced::Color;

/// Color behind and between the wall tiles.
pub fn wall_background() -> Color {
    palette::GRAY_950
}

/// Standard color for error text.
pub fn error_text_color() -> Color {
    palette::ERROR_500
}

/// Standard color for muted/secondary text.
pub fn muted_text_color() -> Color {
    palette::GRAY_400
}

/// Translucent backing for labels drawn over the wall.
pub fn hud_background() -> Color {
    Color {
        a: crate::ui::design_tokens::opacity::OVERLAY_STRONG,
        ..palette::BLACK
    }
}
