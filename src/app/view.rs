// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::{detail, wall};
use iced::{widget::Container, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub wall: &'a wall::State,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Wall => ctx.wall.view(ctx.i18n).map(Message::Wall),
        Screen::Detail(index) => detail::view(detail::ViewContext {
            i18n: ctx.i18n,
            index,
            image: ctx.wall.image(index),
        })
        .map(Message::Detail),
    };

    Container::new(current_view)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
