// SPDX-License-Identifier: MPL-2.0
//! Layout and hit testing for the image wall.
//!
//! These modules are pure geometry: they take natural image sizes and a
//! viewport and never touch the renderer.

pub mod layout;

pub use hit_test::image_at;
pub use layout::{
    column_count_for_width, column_width, draw_order, fit_to_width, shuffled_order, Layout,
    Placement,
};
