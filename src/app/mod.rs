// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the header, the feed and
//! the secondary pages.
//!
//! The `App` struct owns every component and translates their events into
//! side effects (config persistence, catalog loading, opening a browser).

mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config::{self, Config};
use crate::content::Catalog;
use crate::preview::PreviewTimings;
use crate::ui::feed::HomeFeed;
use crate::ui::header;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::{self, ThemeMode};
use iced::{window, Element, Point, Size, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    screen: Screen,
    config: Config,
    theme_mode: ThemeMode,
    header: header::State,
    feed: HomeFeed,
    /// Last known window size; zero until the window reports it.
    viewport: Size,
    cursor: Option<Point>,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("popup_open", &self.feed.popup().is_some())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 720;
pub const MIN_WINDOW_HEIGHT: u32 = 560;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_override(flags.config_dir.clone());

    // iced requires `Fn` for boot; the flags are consumed on the first call.
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
    /// Builds the initial state from the persisted config and kicks off
    /// loading an external catalog when one is configured.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let now = Instant::now();
        let (config, config_warning) = config::load();
        let mut notifications = notifications::Manager::new();

        if let Some(warning) = config_warning {
            notifications.push(Notification::warning(warning), now);
        }

        let catalog = Catalog::embedded().unwrap_or_else(|err| {
            log::error!("bundled catalog is unusable: {err}");
            notifications.push(Notification::error("The bundled catalog is unusable"), now);
            Catalog::default()
        });

        let feed = HomeFeed::new(
            catalog,
            PreviewTimings::from_config(&config.preview),
            config.hero.interval(),
            now,
        );

        let task = match flags.catalog_path.or_else(|| config.content.catalog_path.clone()) {
            Some(path) => {
                log::info!("loading catalog from {}", path.display());
                Task::perform(
                    async move { Catalog::load(path).await },
                    Message::CatalogLoaded,
                )
            }
            None => Task::none(),
        };

        let app = App {
            screen: Screen::Home,
            theme_mode: config.general.theme_mode,
            header: header::State::new(config.search.debounce()),
            feed,
            viewport: Size::ZERO,
            cursor: None,
            notifications,
            config,
        };

        (app, task)
    }

    fn title(&self) -> String {
        match self.screen {
            Screen::Home => "Eyes0n".to_string(),
            screen => format!("{} - Eyes0n", screen.label()),
        }
    }

    fn theme(&self) -> Theme {
        theming::iced_theme(self.theme_mode)
    }

    fn subscription(&self) -> Subscription<Message> {
        let on_home = self.screen == Screen::Home;
        let short_pending =
            self.header.has_pending_timers() || (on_home && self.feed.has_pending_timers());
        let coarse_pending = self.notifications.has_notifications()
            || (on_home && self.feed.shows_hero() && self.feed.hero().has_pending_timers());

        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(short_pending, coarse_pending),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let now = Instant::now();
        let mut ctx = update::UpdateContext {
            screen: &mut self.screen,
            config: &mut self.config,
            theme_mode: &mut self.theme_mode,
            header: &mut self.header,
            feed: &mut self.feed,
            viewport: &mut self.viewport,
            cursor: &mut self.cursor,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Header(message) => update::handle_header_message(&mut ctx, message, now),
            Message::Feed(message) => update::handle_feed_message(&mut ctx, message, now),
            Message::Notification(message) => {
                update::handle_notification_message(&mut ctx, &message, now);
                Task::none()
            }
            Message::Tick(instant) => update::handle_tick(&mut ctx, instant),
            Message::CursorMoved(point) => {
                update::handle_cursor_moved(&mut ctx, point, now);
                Task::none()
            }
            Message::CursorLeft => {
                update::handle_cursor_left(&mut ctx, now);
                Task::none()
            }
            Message::LeftClick => {
                update::handle_left_click(&mut ctx);
                Task::none()
            }
            Message::Escape => update::handle_escape(&mut ctx, now),
            Message::WindowResized(size) => {
                update::handle_window_resized(&mut ctx, size, now);
                Task::none()
            }
            Message::CatalogLoaded(result) => {
                update::handle_catalog_loaded(&mut ctx, result, now);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            screen: self.screen,
            theme_mode: self.theme_mode,
            header: &self.header,
            feed: &self.feed,
            viewport: self.viewport,
            notifications: &self.notifications,
        })
    }
}
