// SPDX-License-Identifier: MPL-2.0
//! Viewport state management
//!
//! Holds the pan offset and zoom scale applied to the whole wall. Drawing uses
//! `screen = offset + scale * layout` (translate, then scale); hit testing uses
//! the inverse.

use super::zoom::ViewScale;
use crate::config::WHEEL_LINE_PX;
use iced::mouse::ScrollDelta;
use iced::{Point, Rectangle, Size, Vector};

/// Pan offset and zoom scale of the wall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    /// Translation applied before scaling, in screen pixels.
    pub offset: Vector,

    /// Uniform zoom factor (guaranteed valid by type).
    pub scale: ViewScale,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            offset: Vector::ZERO,
            scale: ViewScale::default(),
        }
    }
}

impl ViewportState {
    /// Current zoom factor.
    #[must_use]
    pub fn scale(&self) -> f32 {
        self.scale.value()
    }

    /// Moves the wall by `delta` screen pixels, independent of the scale.
    pub fn pan_by(&mut self, delta: Vector) {
        self.offset = self.offset + delta;
    }

    /// Converts a canvas point into layout space.
    #[must_use]
    pub fn to_layout(&self, screen: Point) -> Point {
        let scale = self.scale();
        Point::new(
            (screen.x - self.offset.x) / scale,
            (screen.y - self.offset.y) / scale,
        )
    }

    /// Converts a layout point into canvas space.
    #[must_use]
    pub fn to_screen(&self, layout: Point) -> Point {
        let scale = self.scale();
        Point::new(
            self.offset.x + layout.x * scale,
            self.offset.y + layout.y * scale,
        )
    }

    /// Converts a layout rectangle into canvas space.
    #[must_use]
    pub fn to_screen_rect(&self, layout: Rectangle) -> Rectangle {
        let scale = self.scale();
        Rectangle::new(
            self.to_screen(layout.position()),
            Size::new(layout.width * scale, layout.height * scale),
        )
    }

    /// Sets a new scale while keeping the layout point under `anchor` in place.
    pub fn zoom_around(&mut self, anchor: Point, scale: f32) {
        let pinned = self.to_layout(anchor);
        self.scale = ViewScale::new(scale);
        let scale = self.scale();
        self.offset = Vector::new(anchor.x - pinned.x * scale, anchor.y - pinned.y * scale);
    }

    /// Pans by a mouse wheel delta.
    pub fn scroll(&mut self, delta: ScrollDelta) {
        self.pan_by(scroll_vector(delta));
    }

    /// Zooms around `anchor` by one wheel step per line of `delta`.
    pub fn wheel_zoom(&mut self, anchor: Point, delta: ScrollDelta) {
        let lines = match delta {
            ScrollDelta::Lines { y, .. } => y,
            ScrollDelta::Pixels { y, .. } => y / WHEEL_LINE_PX,
        };
        let target = self.scale.after_wheel(lines);
        self.zoom_around(anchor, target.value());
    }

    /// Back to no pan and 100% zoom.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Converts a wheel delta into screen pixels.
#[must_use]
pub fn scroll_vector(delta: ScrollDelta) -> Vector {
    match delta {
        ScrollDelta::Lines { x, y } => Vector::new(x * WHEEL_LINE_PX, y * WHEEL_LINE_PX),
        ScrollDelta::Pixels { x, y } => Vector::new(x, y),
    }
}
