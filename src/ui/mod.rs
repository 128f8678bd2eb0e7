// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`wall`] - Masonry wall with drag, wheel and pinch navigation
//! - [`detail`] - Single image view reached by clicking a tile
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Interaction state (viewport, zoom, drag, touch)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, typography)
//! - [`theme`] - Theme colors

pub mod design_tokens;
pub mod detail;
pub mod state;
pub mod styles;
pub mod theme;
pub mod wall;
