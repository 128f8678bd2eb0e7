// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the wall and detail views.
//!
//! The `App` struct wires together the wall component, localization and
//! configuration, and translates messages into side effects like image
//! loading or screen switches.

mod message;
pub mod paths;
mod screen;
pub mod sources;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config;
use crate::i18n::fluent::I18n;
use crate::ui::wall;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    wall: wall::State,
    shuffle: bool,
    shuffle_seed: Option<u64>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("images", &self.wall.image_count())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const MIN_WINDOW_HEIGHT: u32 = 320;
pub const MIN_WINDOW_WIDTH: u32 = 320;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: default_window_size(),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

fn default_window_size() -> Size {
    Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32)
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_overrides(flags.config_dir.clone());

    // iced 0.14 requires an `Fn` boot closure; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the config, picks the image sources and kicks off the
    /// asynchronous load.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        if let Some(key) = config_warning {
            log::warn!("{}", i18n.tr(&key));
        }

        let mut app = App {
            i18n,
            screen: Screen::Wall,
            wall: wall::State::new(config.gallery.gap_px(), default_window_size()),
            shuffle: flags.shuffle || config.gallery.shuffle_enabled(),
            shuffle_seed: config.gallery.shuffle_seed,
        };

        let config_dir = paths::get_app_config_dir();
        let task = match sources::resolve_sources(
            &flags.paths,
            &config.gallery.images,
            config_dir.as_deref(),
        ) {
            Ok(sources) => update::start_loading(&mut app.wall, sources),
            Err(error) => {
                log::error!("Could not collect images: {error}");
                app.wall.set_error(&error);
                Task::none()
            }
        };

        (app, task)
    }

    fn title(&self) -> String {
        match self.screen {
            Screen::Wall => self.i18n.tr("window-title"),
            Screen::Detail(index) => {
                let number = (index + 1).to_string();
                self.i18n
                    .tr_with_args("window-title-detail", &[("index", &number)])
            }
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            screen: &mut self.screen,
            wall: &mut self.wall,
            shuffle: self.shuffle,
            shuffle_seed: self.shuffle_seed,
        };

        match message {
            Message::Wall(wall_message) => update::handle_wall_message(&mut ctx, wall_message),
            Message::Detail(detail_message) => {
                update::handle_detail_message(&mut ctx, detail_message)
            }
            Message::ImagesLoaded(result) => update::handle_images_loaded(&mut ctx, result),
            Message::WindowResized(size) => update::handle_window_resized(&mut ctx, size),
            Message::EscapePressed => update::handle_escape(&mut ctx),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            wall: &self.wall,
        })
    }
}
