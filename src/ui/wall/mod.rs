// SPDX-License-Identifier: MPL-2.0
//! The image wall: a masonry layout of every loaded image on a canvas that
//! can be dragged, wheel-scrolled and zoomed.
//!
//! The component owns the layout and the interaction state. It never starts
//! loads itself; the application feeds it images and window sizes and reacts
//! to the [`Effect`]s it returns.

pub mod canvas;
pub mod error_state;

use crate::error::Error;
use crate::gallery::{self, Layout};
use crate::i18n::fluent::I18n;
use crate::media::ImageData;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::state::zoom::format_number;
use crate::ui::state::{DragState, Release, TouchOutcome, TouchState, ViewportState};
use crate::ui::styles;
use canvas::WallCanvas;
use iced::mouse::ScrollDelta;
use iced::touch::Finger;
use iced::widget::{button, container, row, stack, Canvas, Text};
use iced::{alignment, Element, Length, Point, Size};

/// Messages emitted by the wall canvas and its overlay.
#[derive(Debug, Clone)]
pub enum Message {
    PointerPressed(Point),
    PointerMoved(Point),
    PointerReleased(Point),
    /// The pointer left the canvas (or was released outside it) mid-drag.
    PointerLeft,
    Scrolled {
        delta: ScrollDelta,
        position: Point,
        /// Ctrl/Cmd was held: zoom around `position` instead of panning.
        zoom: bool,
    },
    FingerPressed {
        id: Finger,
        position: Point,
    },
    FingerMoved {
        id: Finger,
        position: Point,
    },
    FingerLifted {
        id: Finger,
        position: Point,
    },
    FingerLost(Finger),
    ResetView,
    Error(error_state::Message),
}

/// Side effects the application should perform after handling a wall message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// A tile was clicked or tapped; show that image (source index).
    OpenDetail(usize),
}

/// Where the wall is in its load lifecycle.
#[derive(Debug, Clone)]
pub enum Status {
    Loading,
    Ready,
    Failed(error_state::State),
}

/// Wall component state.
#[derive(Debug, Clone)]
pub struct State {
    images: Vec<ImageData>,
    order: Vec<usize>,
    layout: Layout,
    viewport: ViewportState,
    drag: DragState,
    touch: TouchState,
    status: Status,
    viewport_size: Size,
    gap: f32,
}

impl State {
    #[must_use]
    pub fn new(gap: f32, viewport_size: Size) -> Self {
        Self {
            images: Vec::new(),
            order: Vec::new(),
            layout: Layout::default(),
            viewport: ViewportState::default(),
            drag: DragState::default(),
            touch: TouchState::default(),
            status: Status::Loading,
            viewport_size,
            gap,
        }
    }

    /// Drops any current images and shows the loading state.
    pub fn start_loading(&mut self) {
        self.images.clear();
        self.order.clear();
        self.layout = Layout::default();
        self.cancel_gestures();
        self.status = Status::Loading;
    }

    /// Installs a loaded set of images, drawn in `order`.
    ///
    /// `order` must be a permutation of the image indices; anything else falls
    /// back to source order.
    pub fn set_images(&mut self, images: Vec<ImageData>, order: Vec<usize>) {
        self.order = if is_permutation(&order, images.len()) {
            order
        } else {
            log::warn!(
                "Ignoring draw order of length {} for {} images",
                order.len(),
                images.len()
            );
            (0..images.len()).collect()
        };
        self.images = images;
        self.viewport.reset();
        self.cancel_gestures();
        self.status = Status::Ready;
        self.relayout();
    }

    /// Shows a load failure instead of the wall.
    pub fn set_error(&mut self, error: &Error) {
        self.images.clear();
        self.order.clear();
        self.layout = Layout::default();
        self.cancel_gestures();
        self.status = Status::Failed(error_state::State::from_error(error));
    }

    /// Tracks the size of the area the wall is drawn in. A width change
    /// recomputes the layout; the draw order is kept.
    pub fn resize(&mut self, size: Size) {
        let width_changed = (size.width - self.viewport_size.width).abs() > f32::EPSILON;
        self.viewport_size = size;
        if width_changed {
            self.relayout();
        }
    }

    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::PointerPressed(position) => {
                if self.touch.active_fingers() == 0 {
                    self.drag.start(position);
                }
                Effect::None
            }
            Message::PointerMoved(position) => {
                if let Some(delta) = self.drag.update(position) {
                    self.viewport.pan_by(delta);
                }
                Effect::None
            }
            Message::PointerReleased(position) => match self.drag.finish(position) {
                Release::Click(point) => self.open_at(point),
                Release::DragEnded | Release::None => Effect::None,
            },
            Message::PointerLeft => {
                self.drag.cancel();
                Effect::None
            }
            Message::Scrolled {
                delta,
                position,
                zoom,
            } => {
                if zoom {
                    self.viewport.wheel_zoom(position, delta);
                } else {
                    self.viewport.scroll(delta);
                }
                Effect::None
            }
            Message::FingerPressed { id, position } => {
                // Touch takes over from any mouse drag in progress.
                self.drag.cancel();
                let outcome = self
                    .touch
                    .finger_pressed(id, position, self.viewport.scale());
                self.apply_touch(outcome)
            }
            Message::FingerMoved { id, position } => {
                let outcome = self.touch.finger_moved(id, position);
                self.apply_touch(outcome)
            }
            Message::FingerLifted { id, position } => {
                let outcome = self.touch.finger_lifted(id, position);
                self.apply_touch(outcome)
            }
            Message::FingerLost(id) => {
                self.touch.finger_lost(id);
                Effect::None
            }
            Message::ResetView => {
                self.viewport.reset();
                Effect::None
            }
            Message::Error(message) => {
                if let Status::Failed(error) = &mut self.status {
                    error.handle(message);
                }
                Effect::None
            }
        }
    }

    fn apply_touch(&mut self, outcome: TouchOutcome) -> Effect {
        match outcome {
            TouchOutcome::None => Effect::None,
            TouchOutcome::Pan(delta) => {
                self.viewport.pan_by(delta);
                Effect::None
            }
            TouchOutcome::Zoom { anchor, scale } => {
                self.viewport.zoom_around(anchor, scale.value());
                Effect::None
            }
            TouchOutcome::Tap(point) => self.open_at(point),
        }
    }

    fn open_at(&self, point: Point) -> Effect {
        match gallery::image_at(&self.layout, &self.viewport, point) {
            Some(index) => {
                log::debug!("Opening image {index} from click at {point:?}");
                Effect::OpenDetail(index)
            }
            None => Effect::None,
        }
    }

    fn cancel_gestures(&mut self) {
        self.drag.cancel();
        self.touch = TouchState::default();
    }

    fn relayout(&mut self) {
        let sizes: Vec<Size> = self.images.iter().map(ImageData::natural_size).collect();
        self.layout = Layout::compute(&sizes, &self.order, self.viewport_size.width, self.gap);
        log::debug!(
            "Laid out {} images in {} columns ({:.1}px wide) for a {:.0}px viewport",
            self.layout.placements().len(),
            self.layout.columns(),
            self.layout.column_width(),
            self.viewport_size.width
        );
    }

    #[must_use]
    pub fn image(&self, index: usize) -> Option<&ImageData> {
        self.images.get(index)
    }

    #[must_use]
    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    #[must_use]
    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    #[must_use]
    pub fn status(&self) -> &Status {
        &self.status
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        match &self.status {
            Status::Loading => centered_text(i18n.tr("wall-loading")),
            Status::Failed(error) => error.view(i18n).map(Message::Error),
            Status::Ready if self.images.is_empty() => centered_text(i18n.tr("wall-empty")),
            Status::Ready => {
                let wall = Canvas::new(WallCanvas {
                    images: &self.images,
                    layout: &self.layout,
                    viewport: self.viewport,
                    is_dragging: self.drag.is_dragging,
                })
                .width(Length::Fill)
                .height(Length::Fill);

                stack![wall, self.hud(i18n)].into()
            }
        }
    }

    fn hud<'a>(&self, i18n: &'a I18n) -> Element<'a, Message> {
        let percent = format_number(self.viewport.scale.as_percent().round());
        let label = Text::new(i18n.tr_with_args("wall-zoom-label", &[("percent", &percent)]))
            .size(typography::CAPTION);
        let reset = button(Text::new(i18n.tr("wall-reset-view")).size(typography::CAPTION))
            .padding([spacing::XXS, spacing::XS])
            .style(styles::button::overlay_default)
            .on_press(Message::ResetView);

        let content = container(
            row![label, reset]
                .spacing(spacing::XS)
                .align_y(alignment::Vertical::Center),
        )
        .padding([spacing::XXS, spacing::XS])
        .style(styles::container::hud);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::SM)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Bottom)
            .into()
    }
}

fn is_permutation(order: &[usize], len: usize) -> bool {
    if order.len() != len {
        return false;
    }
    let mut seen = vec![false; len];
    order
        .iter()
        .all(|&index| index < len && !std::mem::replace(&mut seen[index], true))
}

fn centered_text<'a>(message: String) -> Element<'a, Message> {
    container(Text::new(message).size(typography::BODY))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
