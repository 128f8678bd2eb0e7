// SPDX-License-Identifier: MPL-2.0
//! `iced_mosaic` shows a fixed set of images as a masonry wall built with the
//! Iced GUI framework.
//!
//! The wall can be dragged, wheel-scrolled and zoomed (Ctrl/Cmd + wheel or a
//! two-finger pinch). Clicking or tapping a tile opens it in a detail view.
//! Layout and hit testing live in [`gallery`] and are pure geometry; the
//! interactive pieces live in [`ui`].

#![doc(html_root_url = "https://docs.rs/iced_mosaic/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod media;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
