// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Handles grab-and-drag panning and decides whether a release was a click.
//! A press that never strays farther than [`CLICK_THRESHOLD_PX`] from where it
//! started is a click; anything else is the end of a drag.

use crate::config::CLICK_THRESHOLD_PX;
use iced::{Point, Vector};

/// How a pointer release should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Release {
    /// No press was active.
    None,
    /// The pointer stayed within the click threshold.
    Click(Point),
    /// The pointer moved far enough to count as a drag.
    DragEnded,
}

/// Manages grab-and-drag state
#[derive(Debug, Clone, Default)]
pub struct DragState {
    /// Whether a drag operation is currently active
    pub is_dragging: bool,

    /// Position where the press started
    pub start_position: Option<Point>,

    /// Position of the previous move event (deltas are relative to it)
    pub last_position: Option<Point>,

    /// Largest distance from the start position seen during this press
    pub max_distance: f32,
}

impl DragState {
    /// Starts a drag operation
    pub fn start(&mut self, position: Point) {
        self.is_dragging = true;
        self.start_position = Some(position);
        self.last_position = Some(position);
        self.max_distance = 0.0;
    }

    /// Records a move and returns how far the pointer travelled since the
    /// previous event, or `None` when no drag is active.
    pub fn update(&mut self, position: Point) -> Option<Vector> {
        if !self.is_dragging {
            return None;
        }

        let last = self.last_position?;
        if let Some(start) = self.start_position {
            self.max_distance = self.max_distance.max(start.distance(position));
        }
        self.last_position = Some(position);

        Some(position - last)
    }

    /// Ends the press and classifies it.
    pub fn finish(&mut self, position: Point) -> Release {
        if !self.is_dragging {
            return Release::None;
        }

        if let Some(start) = self.start_position {
            self.max_distance = self.max_distance.max(start.distance(position));
        }
        let release = if self.is_click() {
            Release::Click(position)
        } else {
            Release::DragEnded
        };

        self.cancel();
        release
    }

    /// Ends the press without producing a click
    pub fn cancel(&mut self) {
        self.is_dragging = false;
        self.start_position = None;
        self.last_position = None;
        self.max_distance = 0.0;
    }

    /// Whether the current press is still within the click threshold.
    #[must_use]
    pub fn is_click(&self) -> bool {
        self.max_distance < CLICK_THRESHOLD_PX
    }
}
