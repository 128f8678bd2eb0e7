// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! This module contains the interaction state of the wall, separated from the
//! component that wires it to Iced events.

pub mod drag;
pub mod pinch;
pub mod viewport;
pub mod zoom;

// Re-export commonly used types for convenience
pub use drag::{DragState, Release};
pub use pinch::{TouchOutcome, TouchState};
pub use viewport::ViewportState;
pub use zoom::ViewScale;
