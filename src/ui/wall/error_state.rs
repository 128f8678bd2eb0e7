// SPDX-License-Identifier: MPL-2.0
//! Load failure panel with collapsible technical details.

use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theme;
use iced::widget::{button, Column, Container, Text};
use iced::{alignment, Element, Length};

/// i18n key shown when an error does not carry a more specific one.
const GENERIC_ERROR_KEY: &str = "error-load-image";

/// Error state for displaying user-friendly errors with optional details.
#[derive(Debug, Clone)]
pub struct State {
    /// i18n key for the friendly error message.
    friendly_key: &'static str,
    /// Technical error details.
    details: String,
    /// Whether to show the technical details.
    show_details: bool,
}

/// Messages for the error state sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Toggle visibility of technical details.
    ToggleDetails,
}

impl State {
    #[must_use]
    pub fn from_error(error: &Error) -> Self {
        let friendly_key = match error {
            Error::Image(load_error) => load_error.i18n_key(),
            _ => GENERIC_ERROR_KEY,
        };
        Self {
            friendly_key,
            details: error.to_string(),
            show_details: false,
        }
    }

    pub fn handle(&mut self, msg: Message) {
        match msg {
            Message::ToggleDetails => self.show_details = !self.show_details,
        }
    }

    #[must_use]
    pub fn details(&self) -> &str {
        &self.details
    }

    #[must_use]
    pub fn show_details(&self) -> bool {
        self.show_details
    }

    #[must_use]
    pub fn friendly_key(&self) -> &'static str {
        self.friendly_key
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let heading = Text::new(i18n.tr(self.friendly_key))
            .size(typography::TITLE_MD)
            .color(theme::error_text_color());

        let toggle_key = if self.show_details {
            "error-details-hide"
        } else {
            "error-details-show"
        };
        let toggle = button(Text::new(i18n.tr(toggle_key)))
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::primary)
            .on_press(Message::ToggleDetails);

        let mut content = Column::new()
            .spacing(spacing::MD)
            .align_x(alignment::Horizontal::Center)
            .push(heading)
            .push(toggle);

        if self.show_details {
            content = content
                .push(
                    Text::new(i18n.tr("error-details-technical-heading"))
                        .size(typography::BODY)
                        .color(theme::muted_text_color()),
                )
                .push(Text::new(self.details.as_str()).size(typography::CAPTION));
        }

        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::LG)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .into()
    }
}
