// SPDX-License-Identifier: MPL-2.0
//! End-to-end hover preview scenarios on the bundled catalog.
//!
//! The window is 1280x800 with the default preview timings (confirm 500ms,
//! dismiss 300ms, reveal 100ms, settle 150ms). With the hero shown, the first
//! thumbnail of the first rail spans x 24..216 and y 476..764.

use approx::assert_abs_diff_eq;
use eyeson::content::{Catalog, ItemId, SearchQuery};
use eyeson::preview::{Phase, PreviewTimings};
use eyeson::ui::feed::{Event, HomeFeed, Message};
use iced::{Point, Size};
use std::time::{Duration, Instant};

const OVER_FIRST: Point = Point::new(120.0, 620.0);
const OVER_SECOND: Point = Point::new(328.0, 620.0);
const IN_HEADER: Point = Point::new(600.0, 30.0);

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn feed(now: Instant) -> HomeFeed {
    let catalog = Catalog::embedded().expect("bundled catalog");
    let mut feed = HomeFeed::new(catalog, PreviewTimings::default(), None, now);
    feed.resized(Size::new(1280.0, 800.0), now);
    feed
}

/// Rests on the first thumbnail until its preview opens.
fn open_first_preview(feed: &mut HomeFeed, t0: Instant) {
    feed.pointer_moved(OVER_FIRST, t0);
    feed.tick(t0 + ms(500));
    assert!(feed.popup().is_some());
}

fn popup_item(feed: &HomeFeed) -> Option<ItemId> {
    feed.popup().map(|popup| popup.item().id.clone())
}

#[test]
fn dwell_opens_preview_next_to_thumbnail() {
    let t0 = Instant::now();
    let mut feed = feed(t0);

    feed.pointer_moved(OVER_FIRST, t0);
    assert_eq!(feed.hover().phase(), Phase::PendingConfirm);

    feed.tick(t0 + ms(499));
    assert!(feed.popup().is_none());

    feed.tick(t0 + ms(500));
    assert_eq!(feed.hover().phase(), Phase::Active);
    assert_eq!(popup_item(&feed), Some(ItemId::new("trend-01")));

    let placement = *feed
        .popup()
        .and_then(|popup| popup.placement())
        .expect("placed");
    assert_abs_diff_eq!(placement.left, 10.0);
    assert_abs_diff_eq!(placement.top, 456.0);
    assert_abs_diff_eq!(placement.max_height, 324.0);
    assert!(!placement.flipped);
    assert!(!placement.is_out_of_bounds(Size::new(1280.0, 800.0)));
}

#[test]
fn player_is_revealed_after_mount_delay() {
    let t0 = Instant::now();
    let mut feed = feed(t0);
    open_first_preview(&mut feed, t0);

    let popup = feed.popup().expect("open");
    assert!(!popup.is_revealed());
    assert_eq!(
        popup.embed_url(),
        "https://www.youtube.com/embed/Xq2vHcH8bYk?autoplay=1&mute=0&loading=lazy"
    );

    feed.tick(t0 + ms(599));
    assert!(!feed.popup().expect("open").is_revealed());

    feed.tick(t0 + ms(600));
    assert!(feed.popup().expect("open").is_revealed());
}

#[test]
fn passing_over_a_thumbnail_opens_nothing() {
    let t0 = Instant::now();
    let mut feed = feed(t0);

    feed.pointer_moved(OVER_FIRST, t0);
    feed.pointer_moved(IN_HEADER, t0 + ms(200));
    feed.tick(t0 + ms(800));

    assert!(feed.popup().is_none());
    assert_eq!(feed.hover().phase(), Phase::Idle);
    assert!(!feed.has_pending_timers());
}

#[test]
fn moving_to_a_neighbour_restarts_the_dwell() {
    let t0 = Instant::now();
    let mut feed = feed(t0);

    feed.pointer_moved(OVER_FIRST, t0);
    feed.pointer_moved(OVER_SECOND, t0 + ms(300));
    assert_eq!(feed.hover().candidate(), Some(&ItemId::new("trend-02")));

    feed.tick(t0 + ms(500));
    assert!(feed.popup().is_none());

    feed.tick(t0 + ms(800));
    assert_eq!(popup_item(&feed), Some(ItemId::new("trend-02")));
}

#[test]
fn preview_stays_open_while_pointer_is_on_it() {
    let t0 = Instant::now();
    let mut feed = feed(t0);
    open_first_preview(&mut feed, t0);

    // Inside the card, away from the thumbnail.
    feed.pointer_moved(Point::new(300.0, 470.0), t0 + ms(700));
    feed.tick(t0 + ms(2_000));

    assert_eq!(feed.hover().phase(), Phase::Active);
    assert_eq!(popup_item(&feed), Some(ItemId::new("trend-01")));
}

#[test]
fn leaving_preview_closes_it_after_grace_period() {
    let t0 = Instant::now();
    let mut feed = feed(t0);
    open_first_preview(&mut feed, t0);

    let left_at = t0 + ms(700);
    feed.pointer_moved(IN_HEADER, left_at);
    assert_eq!(feed.hover().phase(), Phase::PendingDismiss);

    feed.tick(left_at + ms(299));
    assert!(feed.popup().is_some());

    feed.tick(left_at + ms(300));
    assert!(feed.popup().is_none());
    assert_eq!(feed.hover().phase(), Phase::Idle);
}

#[test]
fn coming_back_within_grace_period_keeps_preview() {
    let t0 = Instant::now();
    let mut feed = feed(t0);
    open_first_preview(&mut feed, t0);

    feed.pointer_moved(IN_HEADER, t0 + ms(700));
    feed.pointer_moved(Point::new(300.0, 470.0), t0 + ms(800));
    feed.tick(t0 + ms(1_200));

    assert_eq!(feed.hover().phase(), Phase::Active);
    assert!(feed.popup().is_some());
}

#[test]
fn pointer_leaving_window_dismisses() {
    let t0 = Instant::now();
    let mut feed = feed(t0);
    open_first_preview(&mut feed, t0);

    feed.pointer_left_window(t0 + ms(700));
    feed.tick(t0 + ms(1_000));

    assert!(feed.popup().is_none());
}

#[test]
fn scrolling_closes_preview_immediately() {
    let t0 = Instant::now();
    let mut feed = feed(t0);
    open_first_preview(&mut feed, t0);

    feed.scrolled_to(120.0, t0 + ms(550));

    assert!(feed.popup().is_none());
    assert_eq!(feed.hover().phase(), Phase::Idle);

    // The pending reveal went away with the popup.
    feed.tick(t0 + ms(600));
    assert!(feed.popup().is_none());
}

#[test]
fn preview_returns_when_scroll_settles_over_same_thumbnail() {
    let t0 = Instant::now();
    let mut feed = feed(t0);
    open_first_preview(&mut feed, t0);

    // The thumbnail moves to y 356..644 and still holds the pointer.
    let scrolled_at = t0 + ms(700);
    feed.scrolled_to(120.0, scrolled_at);

    feed.tick(scrolled_at + ms(149));
    assert_eq!(feed.hover().phase(), Phase::Idle);

    feed.tick(scrolled_at + ms(150));
    assert_eq!(feed.hover().phase(), Phase::PendingConfirm);
    assert_eq!(feed.hover().candidate(), Some(&ItemId::new("trend-01")));

    feed.tick(scrolled_at + ms(650));
    assert_eq!(popup_item(&feed), Some(ItemId::new("trend-01")));
}

#[test]
fn settle_over_a_different_thumbnail_does_not_rearm() {
    let t0 = Instant::now();
    let mut feed = feed(t0);
    open_first_preview(&mut feed, t0);

    // The second rail slides under the pointer.
    let scrolled_at = t0 + ms(700);
    feed.scrolled_to(300.0, scrolled_at);
    feed.tick(scrolled_at + ms(150));
    feed.tick(scrolled_at + ms(1_000));

    assert_eq!(feed.hover().phase(), Phase::Idle);
    assert!(feed.popup().is_none());
}

#[test]
fn every_scroll_event_restarts_the_settle_period() {
    let t0 = Instant::now();
    let mut feed = feed(t0);
    feed.pointer_moved(OVER_FIRST, t0);

    feed.scrolled_to(40.0, t0 + ms(100));
    feed.scrolled_to(80.0, t0 + ms(200));
    feed.tick(t0 + ms(300));
    assert_eq!(feed.hover().phase(), Phase::Idle);

    // Rect is now y 396..684 and still holds the pointer.
    feed.tick(t0 + ms(350));
    assert_eq!(feed.hover().phase(), Phase::PendingConfirm);
}

#[test]
fn unchanged_scroll_offset_is_ignored() {
    let t0 = Instant::now();
    let mut feed = feed(t0);
    open_first_preview(&mut feed, t0);

    feed.scrolled_to(0.0, t0 + ms(550));
    feed.rail_scrolled_to(0, 0.2, t0 + ms(560));

    assert!(feed.popup().is_some());
    assert_eq!(feed.hover().phase(), Phase::Active);
}

#[test]
fn rail_scroll_closes_preview() {
    let t0 = Instant::now();
    let mut feed = feed(t0);
    open_first_preview(&mut feed, t0);

    feed.rail_scrolled_to(0, 208.0, t0 + ms(550));

    assert!(feed.popup().is_none());
}

#[test]
fn search_hides_hero_and_drops_preview() {
    let t0 = Instant::now();
    let mut feed = feed(t0);
    open_first_preview(&mut feed, t0);

    feed.set_query(SearchQuery::new("  NOODLES "));

    assert!(feed.popup().is_none());
    assert!(!feed.has_pending_timers());
    assert!(!feed.shows_hero());
    assert_eq!(feed.rails().len(), 1);
    assert_eq!(feed.rails()[0].items[0].id, ItemId::new("cook-02"));
}

#[test]
fn search_without_matches_leaves_no_rails() {
    let t0 = Instant::now();
    let mut feed = feed(t0);

    feed.set_query(SearchQuery::new("zzz-no-such-video"));

    assert!(feed.rails().is_empty());
    feed.pointer_moved(OVER_FIRST, t0);
    feed.tick(t0 + ms(1_000));
    assert!(feed.popup().is_none());
}

#[test]
fn deactivate_cancels_pending_hover() {
    let t0 = Instant::now();
    let mut feed = feed(t0);

    feed.pointer_moved(OVER_FIRST, t0);
    feed.deactivate();
    feed.tick(t0 + ms(1_000));

    assert!(feed.popup().is_none());
    assert!(!feed.has_pending_timers());
}

#[test]
fn resize_keeps_preview_inside_window() {
    let t0 = Instant::now();
    let mut feed = feed(t0);
    open_first_preview(&mut feed, t0);

    let smaller = Size::new(900.0, 600.0);
    feed.resized(smaller, t0 + ms(700));

    let placement = *feed
        .popup()
        .and_then(|popup| popup.placement())
        .expect("placed");
    assert!(!placement.is_out_of_bounds(smaller));
}

#[test]
fn resize_that_moves_preview_away_from_pointer_arms_dismiss() {
    let t0 = Instant::now();
    let mut feed = feed(t0);
    open_first_preview(&mut feed, t0);

    // On the card's lower part, which is not the thumbnail's image.
    feed.pointer_moved(Point::new(300.0, 470.0), t0 + ms(600));

    // The card flips above the thumbnail to y 136..466 and leaves the pointer
    // over the rail title.
    let resized_at = t0 + ms(700);
    feed.resized(Size::new(900.0, 600.0), resized_at);
    assert!(feed.popup().and_then(|popup| popup.placement()).is_some_and(|p| p.flipped));
    assert_eq!(feed.hover().phase(), Phase::PendingDismiss);

    feed.tick(resized_at + ms(300));
    assert!(feed.popup().is_none());
}

#[test]
fn resize_that_keeps_preview_in_place_changes_nothing() {
    let t0 = Instant::now();
    let mut feed = feed(t0);
    open_first_preview(&mut feed, t0);

    feed.resized(Size::new(1400.0, 900.0), t0 + ms(700));
    feed.tick(t0 + ms(2_000));

    assert_eq!(feed.hover().phase(), Phase::Active);
    assert!(feed.popup().is_some());
}

#[test]
fn adding_to_watch_list_is_recorded_once() {
    let t0 = Instant::now();
    let mut feed = feed(t0);
    open_first_preview(&mut feed, t0);

    let first = feed.update(Message::AddPressed, t0 + ms(700));
    let second = feed.update(Message::AddPressed, t0 + ms(800));

    assert_eq!(first, Event::AddedToList("Sunrise Timelapse".to_string()));
    assert_eq!(second, Event::AlreadyInList("Sunrise Timelapse".to_string()));
    assert_eq!(feed.watch_list(), &[ItemId::new("trend-01")]);
}

#[test]
fn watch_list_keeps_order_and_survives_search() {
    let t0 = Instant::now();
    let mut feed = feed(t0);

    feed.pointer_moved(OVER_SECOND, t0);
    feed.tick(t0 + ms(500));
    feed.update(Message::AddPressed, t0 + ms(600));

    feed.pointer_moved(OVER_FIRST, t0 + ms(700));
    feed.tick(t0 + ms(1_200));
    assert_eq!(popup_item(&feed), Some(ItemId::new("trend-01")));
    feed.update(Message::AddPressed, t0 + ms(1_300));

    feed.set_query(SearchQuery::new("noodles"));

    assert_eq!(
        feed.watch_list(),
        &[ItemId::new("trend-02"), ItemId::new("trend-01")]
    );
}

#[test]
fn add_without_preview_does_nothing() {
    let t0 = Instant::now();
    let mut feed = feed(t0);

    assert_eq!(feed.update(Message::AddPressed, t0), Event::None);
    assert!(feed.watch_list().is_empty());
}
