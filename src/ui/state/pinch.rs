// SPDX-License-Identifier: MPL-2.0
//! Touch tracking: one-finger pan/tap and two-finger pinch-to-zoom.

use super::drag::{DragState, Release};
use super::zoom::ViewScale;
use crate::config::MIN_PINCH_DISTANCE_PX;
use iced::touch::Finger;
use iced::{Point, Vector};
use std::collections::HashMap;

/// Snapshot of the gesture at the moment the second finger went down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchState {
    /// Distance between the two fingers at gesture start.
    pub initial_distance: f32,
    /// Viewport scale at gesture start.
    pub initial_scale: f32,
    /// Midpoint between the fingers at gesture start; zoom pivots around it.
    pub anchor: Point,
}

impl PinchState {
    /// Scale for the current finger distance, clamped to the valid range.
    ///
    /// Returns `None` when the starting distance is too small to be meaningful.
    #[must_use]
    pub fn scale_for(&self, current_distance: f32) -> Option<ViewScale> {
        if self.initial_distance < MIN_PINCH_DISTANCE_PX {
            return None;
        }
        Some(ViewScale::new(
            self.initial_scale * current_distance / self.initial_distance,
        ))
    }
}

/// What a touch event asks the viewport to do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchOutcome {
    None,
    /// Pan by this many screen pixels.
    Pan(Vector),
    /// Set the scale, pivoting around `anchor`.
    Zoom { anchor: Point, scale: ViewScale },
    /// A one-finger tap at this position.
    Tap(Point),
}

/// Tracks active fingers on the canvas.
#[derive(Debug, Clone, Default)]
pub struct TouchState {
    fingers: HashMap<Finger, Point>,
    /// Finger driving a one-finger pan, if any.
    primary: Option<Finger>,
    drag: DragState,
    pinch: Option<PinchState>,
}

impl TouchState {
    /// Registers a finger; the second one down starts a pinch.
    pub fn finger_pressed(&mut self, id: Finger, position: Point, current_scale: f32) -> TouchOutcome {
        self.fingers.insert(id, position);

        match self.fingers.len() {
            1 => {
                self.primary = Some(id);
                self.drag.start(position);
            }
            2 => {
                // A second finger turns the gesture into a pinch; no tap can follow.
                self.primary = None;
                self.drag.cancel();
                if let Some((a, b)) = self.two_fingers() {
                    self.pinch = Some(PinchState {
                        initial_distance: a.distance(b),
                        initial_scale: current_scale,
                        anchor: midpoint(a, b),
                    });
                }
            }
            _ => {}
        }

        TouchOutcome::None
    }

    /// Updates a finger and reports the pan or zoom it causes.
    pub fn finger_moved(&mut self, id: Finger, position: Point) -> TouchOutcome {
        if !self.fingers.contains_key(&id) {
            return TouchOutcome::None;
        }
        self.fingers.insert(id, position);

        if let Some(pinch) = self.pinch {
            let Some((a, b)) = self.two_fingers() else {
                return TouchOutcome::None;
            };
            return match pinch.scale_for(a.distance(b)) {
                Some(scale) => TouchOutcome::Zoom {
                    anchor: pinch.anchor,
                    scale,
                },
                None => TouchOutcome::None,
            };
        }

        if self.primary == Some(id) {
            if let Some(delta) = self.drag.update(position) {
                return TouchOutcome::Pan(delta);
            }
        }

        TouchOutcome::None
    }

    /// Removes a finger; a lifted single finger may report a tap.
    pub fn finger_lifted(&mut self, id: Finger, position: Point) -> TouchOutcome {
        if self.fingers.remove(&id).is_none() {
            return TouchOutcome::None;
        }

        if self.pinch.is_some() {
            // Remaining fingers stay inert until every finger is up.
            self.pinch = None;
            self.drag.cancel();
            return TouchOutcome::None;
        }

        if self.primary == Some(id) {
            self.primary = None;
            if let Release::Click(point) = self.drag.finish(position) {
                return TouchOutcome::Tap(point);
            }
        }

        TouchOutcome::None
    }

    /// Drops a finger the platform lost track of and abandons the gesture.
    pub fn finger_lost(&mut self, id: Finger) {
        self.fingers.remove(&id);
        self.pinch = None;
        self.primary = None;
        self.drag.cancel();
    }

    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.pinch.is_some()
    }

    #[must_use]
    pub fn active_fingers(&self) -> usize {
        self.fingers.len()
    }

    /// Positions of the first two fingers, ordered by finger id.
    fn two_fingers(&self) -> Option<(Point, Point)> {
        let mut fingers: Vec<_> = self.fingers.iter().collect();
        fingers.sort_by_key(|(finger, _)| finger.0);
        match fingers.as_slice() {
            [(_, a), (_, b), ..] => Some((**a, **b)),
            _ => None,
        }
    }
}

fn midpoint(a: Point, b: Point) -> Point {
    Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}
