// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::{Message, Screen};
use crate::error::Error;
use crate::gallery;
use crate::media::{self, ImageData};
use crate::ui::{detail, wall};
use iced::{Size, Task};
use std::path::PathBuf;

/// Mutable view of the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub wall: &'a mut wall::State,
    pub shuffle: bool,
    pub shuffle_seed: Option<u64>,
}

/// Starts loading `sources` and puts the wall in its loading state.
pub fn start_loading(wall: &mut wall::State, sources: Vec<PathBuf>) -> Task<Message> {
    wall.start_loading();
    log::info!("Loading {} image(s)", sources.len());
    Task::perform(media::load_all(sources), Message::ImagesLoaded)
}

pub fn handle_wall_message(ctx: &mut UpdateContext<'_>, message: wall::Message) -> Task<Message> {
    match ctx.wall.handle(message) {
        wall::Effect::None => {}
        wall::Effect::OpenDetail(index) => {
            log::info!("Showing image {}", index + 1);
            *ctx.screen = Screen::Detail(index);
        }
    }
    Task::none()
}

pub fn handle_detail_message(ctx: &mut UpdateContext<'_>, message: detail::Message) -> Task<Message> {
    match message {
        detail::Message::Back => back_to_wall(ctx),
    }
    Task::none()
}

pub fn handle_images_loaded(
    ctx: &mut UpdateContext<'_>,
    result: Result<Vec<ImageData>, Error>,
) -> Task<Message> {
    match result {
        Ok(images) => {
            log::info!("Loaded {} image(s)", images.len());
            let order = gallery::draw_order(images.len(), ctx.shuffle, ctx.shuffle_seed);
            ctx.wall.set_images(images, order);
        }
        Err(error) => {
            log::error!("Failed to load images: {error}");
            ctx.wall.set_error(&error);
        }
    }
    Task::none()
}

pub fn handle_window_resized(ctx: &mut UpdateContext<'_>, size: Size) -> Task<Message> {
    // The wall keeps tracking the window while the detail screen is up.
    ctx.wall.resize(size);
    Task::none()
}

pub fn handle_escape(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    back_to_wall(ctx);
    Task::none()
}

fn back_to_wall(ctx: &mut UpdateContext<'_>) {
    if matches!(ctx.screen, Screen::Detail(_)) {
        *ctx.screen = Screen::Wall;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Point;

    fn solid(width: u32, height: u32) -> ImageData {
        ImageData::from_rgba(width, height, vec![0; (width * height * 4) as usize])
    }

    fn loaded_wall() -> wall::State {
        let mut wall = wall::State::new(5.0, Size::new(400.0, 300.0));
        wall.set_images(vec![solid(50, 50), solid(50, 100)], vec![0, 1]);
        wall
    }

    fn context<'a>(screen: &'a mut Screen, wall: &'a mut wall::State) -> UpdateContext<'a> {
        UpdateContext {
            screen,
            wall,
            shuffle: false,
            shuffle_seed: None,
        }
    }

    #[test]
    fn click_on_tile_switches_to_detail() {
        let mut screen = Screen::Wall;
        let mut wall = loaded_wall();
        let mut ctx = context(&mut screen, &mut wall);

        let _ = handle_wall_message(&mut ctx, wall::Message::PointerPressed(Point::new(20.0, 20.0)));
        let _ = handle_wall_message(&mut ctx, wall::Message::PointerReleased(Point::new(20.0, 20.0)));

        assert_eq!(screen, Screen::Detail(0));
    }

    #[test]
    fn back_and_escape_return_to_wall_with_viewport_kept() {
        let mut screen = Screen::Wall;
        let mut wall = loaded_wall();
        let mut ctx = context(&mut screen, &mut wall);

        let _ = handle_wall_message(
            &mut ctx,
            wall::Message::Scrolled {
                delta: iced::mouse::ScrollDelta::Pixels { x: 0.0, y: -30.0 },
                position: Point::new(10.0, 10.0),
                zoom: false,
            },
        );
        *ctx.screen = Screen::Detail(1);
        let _ = handle_detail_message(&mut ctx, detail::Message::Back);
        assert_eq!(*ctx.screen, Screen::Wall);

        *ctx.screen = Screen::Detail(1);
        let _ = handle_escape(&mut ctx);
        assert_eq!(*ctx.screen, Screen::Wall);

        assert!((ctx.wall.viewport().offset.y + 30.0).abs() < 1e-4);
    }

    #[test]
    fn escape_on_wall_is_a_no_op() {
        let mut screen = Screen::Wall;
        let mut wall = loaded_wall();
        let mut ctx = context(&mut screen, &mut wall);
        let _ = handle_escape(&mut ctx);
        assert_eq!(screen, Screen::Wall);
    }

    #[test]
    fn loaded_images_use_seeded_order() {
        let mut screen = Screen::Wall;
        let mut wall = wall::State::new(5.0, Size::new(1300.0, 800.0));
        let mut ctx = UpdateContext {
            screen: &mut screen,
            wall: &mut wall,
            shuffle: true,
            shuffle_seed: Some(99),
        };

        let images: Vec<_> = (1..=8).map(|n| solid(n, 10)).collect();
        let _ = handle_images_loaded(&mut ctx, Ok(images));

        assert_eq!(wall.order(), gallery::draw_order(8, true, Some(99)).as_slice());
        assert!(matches!(wall.status(), wall::Status::Ready));
    }

    #[test]
    fn load_failure_shows_error() {
        let mut screen = Screen::Wall;
        let mut wall = wall::State::new(5.0, Size::new(800.0, 600.0));
        let mut ctx = context(&mut screen, &mut wall);

        let _ = handle_images_loaded(&mut ctx, Err(Error::Io("missing".into())));
        assert!(matches!(wall.status(), wall::Status::Failed(_)));
    }

    #[test]
    fn resize_while_in_detail_relayouts_wall() {
        let mut screen = Screen::Detail(0);
        let mut wall = loaded_wall();
        let mut ctx = context(&mut screen, &mut wall);

        let _ = handle_window_resized(&mut ctx, Size::new(1400.0, 900.0));
        assert_eq!(ctx.wall.layout().columns(), 7);
        assert_eq!(*ctx.screen, Screen::Detail(0));
    }
}
