// SPDX-License-Identifier: MPL-2.0
//! Canvas program that paints the wall and turns raw input into wall messages.
//!
//! All positions handed to the component are canvas-local. Touch events carry
//! window coordinates, so they are shifted by the canvas origin here.

use super::Message;
use crate::gallery::Layout;
use crate::media::ImageData;
use crate::ui::state::ViewportState;
use crate::ui::theme;
use iced::advanced::image as core_image;
use iced::widget::canvas::{self, Frame, Geometry};
use iced::widget::Action;
use iced::{keyboard, mouse, touch, Event, Point, Rectangle, Renderer, Theme};

/// Canvas-side state: the keyboard modifiers seen last, used to tell a zoom
/// wheel from a pan wheel.
#[derive(Debug, Default)]
pub struct Modifiers(keyboard::Modifiers);

/// Draws the visible tiles of the wall under the current viewport.
pub struct WallCanvas<'a> {
    pub images: &'a [ImageData],
    pub layout: &'a Layout,
    pub viewport: ViewportState,
    pub is_dragging: bool,
}

fn local(position: Point, bounds: Rectangle) -> Point {
    Point::new(position.x - bounds.x, position.y - bounds.y)
}

impl canvas::Program<Message> for WallCanvas<'_> {
    type State = Modifiers;

    fn update(
        &self,
        state: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        match event {
            Event::Keyboard(keyboard::Event::ModifiersChanged(modifiers)) => {
                state.0 = *modifiers;
                None
            }
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => cursor
                .position_in(bounds)
                .map(|position| Action::publish(Message::PointerPressed(position)).and_capture()),
            Event::Mouse(mouse::Event::CursorMoved { .. }) if self.is_dragging => {
                // Leaving the canvas mid-drag ends the drag.
                let message = match cursor.position_in(bounds) {
                    Some(position) => Message::PointerMoved(position),
                    None => Message::PointerLeft,
                };
                Some(Action::publish(message).and_capture())
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) if self.is_dragging => {
                let message = match cursor.position_in(bounds) {
                    Some(position) => Message::PointerReleased(position),
                    None => Message::PointerLeft,
                };
                Some(Action::publish(message).and_capture())
            }
            Event::Mouse(mouse::Event::CursorLeft) if self.is_dragging => {
                Some(Action::publish(Message::PointerLeft).and_capture())
            }
            Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                cursor.position_in(bounds).map(|position| {
                    Action::publish(Message::Scrolled {
                        delta: *delta,
                        position,
                        zoom: state.0.command(),
                    })
                    .and_capture()
                })
            }
            Event::Touch(touch::Event::FingerPressed { id, position }) => {
                bounds.contains(*position).then(|| {
                    Action::publish(Message::FingerPressed {
                        id: *id,
                        position: local(*position, bounds),
                    })
                    .and_capture()
                })
            }
            Event::Touch(touch::Event::FingerMoved { id, position }) => Some(
                Action::publish(Message::FingerMoved {
                    id: *id,
                    position: local(*position, bounds),
                })
                .and_capture(),
            ),
            Event::Touch(touch::Event::FingerLifted { id, position }) => Some(
                Action::publish(Message::FingerLifted {
                    id: *id,
                    position: local(*position, bounds),
                })
                .and_capture(),
            ),
            Event::Touch(touch::Event::FingerLost { id, .. }) => {
                Some(Action::publish(Message::FingerLost(*id)).and_capture())
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), theme::wall_background());

        let visible = Rectangle::new(Point::ORIGIN, bounds.size());
        let viewport = self.viewport;

        frame.with_save(|frame| {
            frame.translate(viewport.offset);
            frame.scale(viewport.scale());

            for placement in self.layout.placements() {
                if !viewport.to_screen_rect(placement.bounds).intersects(&visible) {
                    continue;
                }
                let Some(image) = self.images.get(placement.index) else {
                    continue;
                };
                frame.draw_image(
                    placement.bounds,
                    core_image::Image {
                        handle: image.handle.clone(),
                        filter_method: core_image::FilterMethod::Linear,
                        rotation: iced::Radians(0.0),
                        opacity: 1.0,
                        snap: false,
                        border_radius: iced::border::Radius::default(),
                    },
                );
            }
        });

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.is_dragging {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(bounds) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}
