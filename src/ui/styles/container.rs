// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{palette, radius};
use crate::ui::theme;
use iced::widget::container;
use iced::{Background, Border, Theme};

/// Rounded translucent pill holding the zoom readout over the wall.
pub fn hud(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme::hud_background())),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
