// SPDX-License-Identifier: MPL-2.0
//! Detail screen: one image, fitted to the window, with a way back to the wall.

use crate::i18n::fluent::I18n;
use crate::media::ImageData;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theme;
use iced::widget::{button, container, image, row, Column, Text};
use iced::{alignment, ContentFit, Element, Length};

#[derive(Debug, Clone)]
pub enum Message {
    Back,
}

/// Everything the detail view needs to render.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Source index of the image (0-based).
    pub index: usize,
    pub image: Option<&'a ImageData>,
}

/// Heading for the image at source `index`, numbered from 1.
#[must_use]
pub fn title(i18n: &I18n, index: usize) -> String {
    let number = (index + 1).to_string();
    i18n.tr_with_args("detail-title", &[("index", &number)])
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let back = button(Text::new(ctx.i18n.tr("detail-back")))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary)
        .on_press(Message::Back);

    let header = row![back, Text::new(title(ctx.i18n, ctx.index)).size(typography::TITLE_MD)]
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center);

    let body: Element<'_, Message> = match ctx.image {
        Some(data) => image(data.handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => container(Text::new(ctx.i18n.tr("error-load-image")).color(theme::error_text_color()))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .into(),
    };

    Column::new()
        .spacing(spacing::SM)
        .padding(spacing::MD)
        .push(header)
        .push(body)
        .into()
}
