// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::{Message, Screen};
use crate::config::{self, Config};
use crate::content::{Catalog, SearchQuery};
use crate::error::Error;
use crate::ui::feed::{self, HomeFeed, FEED_SCROLL_ID};
use crate::ui::header::{self, Event as HeaderEvent};
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::{Point, Size, Task};
use std::time::Instant;

/// Mutable view of the application state handed to every handler.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub config: &'a mut Config,
    pub theme_mode: &'a mut ThemeMode,
    pub header: &'a mut header::State,
    pub feed: &'a mut HomeFeed,
    pub viewport: &'a mut Size,
    pub cursor: &'a mut Option<Point>,
    pub notifications: &'a mut notifications::Manager,
}

pub fn handle_screen_switch(ctx: &mut UpdateContext<'_>, target: Screen) -> Task<Message> {
    if *ctx.screen == target {
        return Task::none();
    }
    if *ctx.screen == Screen::Home {
        ctx.feed.deactivate();
    }
    log::debug!("screen {:?} -> {:?}", ctx.screen, target);
    *ctx.screen = target;
    Task::none()
}

pub fn handle_header_message(
    ctx: &mut UpdateContext<'_>,
    message: header::Message,
    now: Instant,
) -> Task<Message> {
    let event = ctx.header.update(message, now);
    handle_header_event(ctx, event, now)
}

fn handle_header_event(
    ctx: &mut UpdateContext<'_>,
    event: HeaderEvent,
    now: Instant,
) -> Task<Message> {
    match event {
        HeaderEvent::None => Task::none(),
        HeaderEvent::Navigate(screen) => handle_screen_switch(ctx, screen),
        HeaderEvent::Search(query) => apply_search(ctx, query),
        HeaderEvent::ToggleTheme => toggle_theme(ctx, now),
        HeaderEvent::Quit => iced::exit(),
    }
}

/// Filters the feed and brings it back to the top. Searching from another
/// screen returns to the feed.
fn apply_search(ctx: &mut UpdateContext<'_>, query: SearchQuery) -> Task<Message> {
    let switch = handle_screen_switch(ctx, Screen::Home);
    ctx.feed.set_query(query);
    Task::batch([
        switch,
        operation::snap_to(Id::new(FEED_SCROLL_ID), RelativeOffset::START),
    ])
}

fn toggle_theme(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    let next = if ctx.theme_mode.is_dark() {
        ThemeMode::Light
    } else {
        ThemeMode::Dark
    };
    *ctx.theme_mode = next;
    ctx.config.general.theme_mode = next;

    if let Err(err) = config::save(ctx.config) {
        log::warn!("failed to persist theme: {err}");
        ctx.notifications.push(
            Notification::warning("Theme changed but could not be saved"),
            now,
        );
    }
    Task::none()
}

pub fn handle_feed_message(
    ctx: &mut UpdateContext<'_>,
    message: feed::Message,
    now: Instant,
) -> Task<Message> {
    match ctx.feed.update(message, now) {
        feed::Event::None => {}
        feed::Event::OpenExternal(url) => open_external(ctx, &url, now),
        feed::Event::AddedToList(name) => ctx
            .notifications
            .push(Notification::success(format!("Added \"{name}\" to your list")), now),
        feed::Event::AlreadyInList(name) => ctx
            .notifications
            .push(Notification::info(format!("\"{name}\" is already in your list")), now),
    }
    Task::none()
}

/// Hands a video URL to the system browser; failures become a toast.
fn open_external(ctx: &mut UpdateContext<'_>, url: &str, now: Instant) {
    log::info!("opening {url}");
    if let Err(err) = open::that_detached(url) {
        log::warn!("could not open {url}: {err}");
        ctx.notifications.push(
            Notification::warning("Could not open the video in your browser"),
            now,
        );
    }
}

pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    let event = ctx.header.tick(now);
    let task = handle_header_event(ctx, event, now);

    if *ctx.screen == Screen::Home {
        ctx.feed.tick(now);
    }
    ctx.notifications.tick(now);
    task
}

pub fn handle_cursor_moved(ctx: &mut UpdateContext<'_>, point: Point, now: Instant) {
    *ctx.cursor = Some(point);
    if *ctx.screen != Screen::Home {
        return;
    }
    // The open profile menu covers the feed.
    if ctx.header.menu_open() && header::menu_bounds(*ctx.viewport).contains(point) {
        ctx.feed.pointer_left_window(now);
    } else {
        ctx.feed.pointer_moved(point, now);
    }
}

pub fn handle_cursor_left(ctx: &mut UpdateContext<'_>, now: Instant) {
    *ctx.cursor = None;
    ctx.feed.pointer_left_window(now);
}

pub fn handle_left_click(ctx: &mut UpdateContext<'_>) {
    if let Some(point) = *ctx.cursor {
        ctx.header.click(point, *ctx.viewport);
    }
}

pub fn handle_escape(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    let event = ctx.header.escape();
    handle_header_event(ctx, event, now)
}

pub fn handle_window_resized(ctx: &mut UpdateContext<'_>, size: Size, now: Instant) {
    *ctx.viewport = size;
    ctx.feed.resized(size, now);
}

pub fn handle_catalog_loaded(
    ctx: &mut UpdateContext<'_>,
    result: Result<Catalog, Error>,
    now: Instant,
) {
    match result {
        Ok(catalog) => {
            log::info!(
                "catalog loaded: {} items in {} categories",
                catalog.item_count(),
                catalog.categories().len()
            );
            ctx.feed
                .replace_catalog(catalog, ctx.config.hero.interval(), now);
        }
        Err(err) => {
            log::warn!("catalog could not be loaded, keeping the bundled one: {err}");
            ctx.notifications.push(
                Notification::warning("Catalog could not be loaded; showing the bundled videos"),
                now,
            );
        }
    }
}

pub fn handle_notification_message(
    ctx: &mut UpdateContext<'_>,
    message: &notifications::NotificationMessage,
    now: Instant,
) {
    ctx.notifications.handle_message(message, now);
}
