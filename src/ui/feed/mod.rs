// SPDX-License-Identifier: MPL-2.0
//! Home feed: hero carousel plus one horizontal rail per category, with the
//! hover preview on top.
//!
//! A native window has no per-widget enter/leave events, so the feed derives
//! them. Every cursor move is hit-tested against the popup (topmost) and then
//! against the analytic [`FeedLayout`]; when the target changes the hover
//! intent receives `leave(old, related = new)` followed by `enter(new)`.

pub mod layout;
mod view;

pub use layout::FeedLayout;
pub use view::{popup_layer, view, FEED_SCROLL_ID};

use crate::content::{filter_categories, Catalog, Category, ItemId, SearchQuery};
use crate::preview::{
    HitTest, HoverEvent, HoverIntent, Popup, PopupEvent, PopupPolicy, PreviewTimings, Related,
    Timer,
};
use crate::ui::header;
use crate::ui::hero::{self, Hero};
use iced::widget::scrollable::Viewport;
use iced::{Point, Rectangle, Size};
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub enum Message {
    FeedScrolled(Viewport),
    RailScrolled(usize, Viewport),
    Hero(hero::Message),
    PlayPressed,
    AddPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// Hand a video URL to the system browser.
    OpenExternal(String),
    /// An item was added to the session's watch list.
    AddedToList(String),
    /// The item was already on the watch list; nothing changed.
    AlreadyInList(String),
}

/// What the pointer is currently over.
#[derive(Debug, Clone, PartialEq)]
enum Target {
    /// Unknown after a scroll until the next move or settle probe.
    Unknown,
    Nothing,
    Thumbnail(ItemId, Rectangle),
    Popup,
}

impl Target {
    fn same_as(&self, other: &Target) -> bool {
        match (self, other) {
            (Target::Thumbnail(a, _), Target::Thumbnail(b, _)) => a == b,
            _ => self == other,
        }
    }

    fn related(&self) -> Related {
        match self {
            Target::Thumbnail(id, _) => Related::Thumbnail(id.clone()),
            Target::Popup => Related::Popup,
            Target::Unknown | Target::Nothing => Related::Nothing,
        }
    }
}

#[derive(Debug)]
pub struct HomeFeed {
    catalog: Catalog,
    rails: Vec<Category>,
    query: SearchQuery,
    hero: Hero,
    layout: FeedLayout,
    hover: HoverIntent,
    popup: Option<Popup>,
    policy: PopupPolicy,
    timings: PreviewTimings,
    pointer: Option<Point>,
    target: Target,
    settle: Timer,
    settle_origin: Option<(ItemId, Point)>,
    /// Items picked with "+", oldest first. Lives for the session only.
    watch_list: Vec<ItemId>,
}

impl HomeFeed {
    #[must_use]
    pub fn new(
        catalog: Catalog,
        timings: PreviewTimings,
        hero_interval: Option<Duration>,
        now: Instant,
    ) -> Self {
        let hero = Hero::new(catalog.featured(), hero_interval, now);
        let mut feed = Self {
            rails: Vec::new(),
            query: SearchQuery::default(),
            hero,
            layout: FeedLayout::new(header::HEIGHT),
            hover: HoverIntent::new(timings.hover_confirm(), timings.hover_dismiss()),
            popup: None,
            policy: PopupPolicy::default(),
            timings,
            pointer: None,
            target: Target::Unknown,
            settle: Timer::idle(),
            settle_origin: None,
            watch_list: Vec::new(),
            catalog,
        };
        feed.rebuild_rails();
        feed
    }

    #[must_use]
    pub fn rails(&self) -> &[Category] {
        &self.rails
    }

    #[must_use]
    pub fn hero(&self) -> &Hero {
        &self.hero
    }

    /// The hero is hidden while a search query is active.
    #[must_use]
    pub fn shows_hero(&self) -> bool {
        self.query.is_empty() && !self.hero.is_empty()
    }

    #[must_use]
    pub fn popup(&self) -> Option<&Popup> {
        self.popup.as_ref()
    }

    #[must_use]
    pub fn hover(&self) -> &HoverIntent {
        &self.hover
    }

    #[must_use]
    pub fn layout(&self) -> &FeedLayout {
        &self.layout
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn watch_list(&self) -> &[ItemId] {
        &self.watch_list
    }

    /// Adds `id` once. Returns whether the list changed.
    pub fn add_to_watch_list(&mut self, id: ItemId) -> bool {
        if self.watch_list.contains(&id) {
            return false;
        }
        log::debug!("added {id} to the watch list");
        self.watch_list.push(id);
        true
    }

    /// Whether a short deadline (hover, reveal, settle) is armed.
    ///
    /// The hero countdown is not included; it is coarse enough for the slow
    /// tick.
    #[must_use]
    pub fn has_pending_timers(&self) -> bool {
        self.hover.has_pending_timers()
            || self.settle.is_pending()
            || self.popup.as_ref().is_some_and(Popup::has_pending_timers)
    }

    /// Swaps in a freshly loaded catalog.
    pub fn replace_catalog(&mut self, catalog: Catalog, hero_interval: Option<Duration>, now: Instant) {
        self.hero = Hero::new(catalog.featured(), hero_interval, now);
        self.catalog = catalog;
        self.rebuild_rails();
        self.deactivate();
    }

    pub fn set_query(&mut self, query: SearchQuery) {
        if self.query == query {
            return;
        }
        self.query = query;
        self.rebuild_rails();
        self.deactivate();
    }

    fn rebuild_rails(&mut self) {
        self.rails = filter_categories(self.catalog.categories(), &self.query);
        let ids = self
            .rails
            .iter()
            .map(|rail| rail.items.iter().map(|item| item.id.clone()).collect())
            .collect();
        self.layout.set_rails(ids, self.shows_hero());
        self.layout.set_feed_offset(0.0);
    }

    /// Feed offset the scrollable reported last.
    pub fn scrolled_to(&mut self, feed_offset: f32, now: Instant) {
        if self.layout.set_feed_offset(feed_offset) {
            self.scrolled(now);
        }
    }

    /// Rail offset the scrollable reported last.
    pub fn rail_scrolled_to(&mut self, rail: usize, offset: f32, now: Instant) {
        if self.layout.set_rail_offset(rail, offset) {
            self.scrolled(now);
        }
    }

    /// Drops the preview and every pending hover timer (screen change, new
    /// rails).
    pub fn deactivate(&mut self) {
        self.hover.cancel_all();
        self.close_popup();
        self.settle.cancel();
        self.settle_origin = None;
        self.target = Target::Unknown;
    }

    pub fn update(&mut self, message: Message, now: Instant) -> Event {
        match message {
            Message::FeedScrolled(viewport) => {
                self.scrolled_to(viewport.absolute_offset().y, now);
                Event::None
            }
            Message::RailScrolled(rail, viewport) => {
                self.rail_scrolled_to(rail, viewport.absolute_offset().x, now);
                Event::None
            }
            Message::Hero(message) => match self.hero.update(message, now) {
                hero::Event::Watch(url) => Event::OpenExternal(url),
                hero::Event::None => Event::None,
            },
            Message::PlayPressed => self
                .popup
                .as_ref()
                .map_or(Event::None, |popup| Event::OpenExternal(popup.embed_url().to_string())),
            Message::AddPressed => {
                let Some(item) = self.popup.as_ref().map(|popup| popup.item().clone()) else {
                    return Event::None;
                };
                if self.add_to_watch_list(item.id) {
                    Event::AddedToList(item.name)
                } else {
                    Event::AlreadyInList(item.name)
                }
            }
        }
    }

    /// Records the new window size. When the popup had to move, the resting
    /// pointer is hit-tested again.
    pub fn resized(&mut self, viewport: Size, now: Instant) {
        self.layout.set_viewport(viewport);
        let moved = self
            .popup
            .as_mut()
            .is_some_and(|popup| popup.on_resize(&self.layout));
        if moved {
            log::debug!("preview popup repositioned after resize");
            if let Some(point) = self.pointer {
                let target = self.target_at(point);
                self.retarget(target, now);
            }
        }
    }

    pub fn pointer_moved(&mut self, point: Point, now: Instant) {
        self.pointer = Some(point);
        self.hover.pointer_moved(point);

        let target = self.target_at(point);
        self.retarget(target, now);
    }

    pub fn pointer_left_window(&mut self, now: Instant) {
        self.pointer = None;
        self.retarget(Target::Nothing, now);
    }

    fn target_at(&self, point: Point) -> Target {
        if self.popup.as_ref().is_some_and(|popup| popup.contains(point)) {
            return Target::Popup;
        }
        match self.layout.thumbnail_at(point) {
            Some((id, rect)) => Target::Thumbnail(id, rect),
            None => Target::Nothing,
        }
    }

    fn retarget(&mut self, target: Target, now: Instant) {
        if target.same_as(&self.target) {
            return;
        }
        let related = target.related();

        match &self.target {
            Target::Thumbnail(..) => self.hover.pointer_leave(&related, now),
            Target::Popup => self.hover.pointer_left_popup(&related, now),
            Target::Unknown | Target::Nothing => {}
        }

        match &target {
            Target::Thumbnail(id, rect) => self.hover.pointer_enter(id.clone(), Some(*rect), now),
            Target::Popup => self.hover.pointer_entered_popup(),
            Target::Unknown | Target::Nothing => {}
        }

        self.target = target;
    }

    /// Any scroll closes the preview right away; hover may come back once
    /// scrolling settles.
    fn scrolled(&mut self, now: Instant) {
        if self.settle_origin.is_none() {
            self.settle_origin = match (&self.target, self.hover.session()) {
                (Target::Thumbnail(id, rect), _) => Some((id.clone(), rect.center())),
                (_, Some(session)) => session.rect.map(|rect| (session.item.clone(), rect.center())),
                _ => None,
            };
        }

        if let Some(popup) = self.popup.as_mut() {
            if popup.on_scroll() == PopupEvent::Closed {
                self.close_popup();
            }
        }
        self.hover.cancel_all();
        self.target = Target::Unknown;

        if self.settle_origin.is_some() {
            self.settle.arm(now, self.timings.scroll_settle());
        }
    }

    /// Re-arms hover intent when the pointer still rests on the thumbnail it
    /// was on before scrolling.
    fn settle_probe(&mut self, now: Instant) {
        let Some((origin, center)) = self.settle_origin.take() else {
            return;
        };
        let Some((id, rect)) = self.layout.thumbnail_at(center) else {
            return;
        };
        let pointer_inside = self.pointer.is_some_and(|p| rect.contains(p));

        let idle = self.hover.session().is_none() && self.hover.candidate().is_none();

        if id == origin && pointer_inside && idle {
            log::debug!("scroll settled over {}, re-arming preview", id);
            self.hover.pointer_enter(id.clone(), Some(rect), now);
            self.target = Target::Thumbnail(id, rect);
        }
    }

    pub fn tick(&mut self, now: Instant) {
        self.hero.tick(now);

        if self.settle.fire_if_due(now) {
            self.settle_probe(now);
        }

        if let Some(popup) = self.popup.as_mut() {
            popup.tick(now);
        }

        match self.hover.poll(now) {
            Some(HoverEvent::SessionStarted(session)) => {
                match self.catalog.item(&session.item).cloned() {
                    Some(item) => {
                        // A new instance for a new item: it snaps into place.
                        self.popup = Some(Popup::mount(
                            item,
                            &session,
                            &self.layout,
                            self.policy,
                            &self.timings,
                            now,
                        ));
                        if let Some(point) = self.pointer {
                            if self.popup.as_ref().is_some_and(|p| p.contains(point)) {
                                self.target = Target::Popup;
                            }
                        }
                    }
                    None => {
                        log::warn!("hovered item {} is not in the catalog", session.item);
                        self.hover.cancel_all();
                    }
                }
            }
            Some(HoverEvent::SessionEnded) => self.close_popup(),
            None => {}
        }
    }

    fn close_popup(&mut self) {
        if let Some(popup) = self.popup.take() {
            log::debug!("preview popup closed for {}", popup.item().id);
        }
    }
}
