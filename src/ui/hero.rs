// SPDX-License-Identifier: MPL-2.0
//! Featured carousel shown at the top of the home feed.

use crate::content::ContentItem;
use crate::preview::Timer;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{alignment::Vertical, Element, Length, Padding};
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub enum Message {
    Previous,
    Next,
    GoTo(usize),
    Watch,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// Open the current item's video externally.
    Watch(String),
}

#[derive(Debug, Clone)]
pub struct Hero {
    items: Vec<ContentItem>,
    index: usize,
    interval: Option<Duration>,
    timer: Timer,
}

impl Hero {
    /// `interval` of `None` disables auto-advance.
    #[must_use]
    pub fn new(items: Vec<ContentItem>, interval: Option<Duration>, now: Instant) -> Self {
        let mut hero = Self {
            items,
            index: 0,
            interval,
            timer: Timer::idle(),
        };
        hero.restart(now);
        hero
    }

    #[must_use]
    pub fn current(&self) -> Option<&ContentItem> {
        self.items.get(self.index)
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn has_pending_timers(&self) -> bool {
        self.timer.is_pending()
    }

    pub fn update(&mut self, message: Message, now: Instant) -> Event {
        match message {
            Message::Previous => self.step_back(),
            Message::Next => self.step_forward(),
            Message::GoTo(index) if index < self.items.len() => self.index = index,
            Message::GoTo(_) => {}
            Message::Watch => {
                return self
                    .current()
                    .map_or(Event::None, |item| Event::Watch(item.video_url.clone()));
            }
        }
        self.restart(now);
        Event::None
    }

    /// Advances automatically when the interval elapses.
    pub fn tick(&mut self, now: Instant) {
        if self.timer.fire_if_due(now) {
            self.step_forward();
            self.restart(now);
        }
    }

    fn step_forward(&mut self) {
        if !self.items.is_empty() {
            self.index = (self.index + 1) % self.items.len();
        }
    }

    fn step_back(&mut self) {
        if !self.items.is_empty() {
            self.index = (self.index + self.items.len() - 1) % self.items.len();
        }
    }

    fn restart(&mut self, now: Instant) {
        match self.interval {
            Some(interval) if self.items.len() > 1 => self.timer.arm(now, interval),
            _ => self.timer.cancel(),
        }
    }
}

pub fn view(hero: &Hero) -> Element<'_, Message> {
    let Some(item) = hero.current() else {
        return Space::new().height(Length::Fixed(0.0)).into();
    };

    let arrow = |label: &'static str, message: Message| {
        button(Text::new(label).size(typography::TITLE_MD))
            .on_press(message)
            .padding([spacing::XXS, spacing::SM])
            .style(styles::button::overlay(
                palette::WHITE,
                opacity::OVERLAY_MEDIUM,
                opacity::OVERLAY_HOVER,
            ))
    };

    let dots = (0..hero.items.len()).fold(Row::new().spacing(spacing::XS), |row, i| {
        row.push(
            button(Space::new())
                .on_press(Message::GoTo(i))
                .width(Length::Fixed(sizing::CAROUSEL_DOT))
                .height(Length::Fixed(sizing::CAROUSEL_DOT))
                .style(styles::button::carousel_dot(i == hero.index)),
        )
    });

    let details = Column::new()
        .spacing(spacing::SM)
        .width(Length::Fill)
        .push(Text::new("Featured").size(typography::CAPTION).color(palette::ACCENT_LIGHT))
        .push(Text::new(item.name.as_str()).size(typography::TITLE_LG))
        .push(
            Text::new(item.description.as_str())
                .size(typography::BODY)
                .color(palette::TEXT_SECONDARY),
        )
        .push(
            Text::new(item.meta_line())
                .size(typography::CAPTION)
                .color(palette::TEXT_TERTIARY),
        )
        .push(
            button(Text::new("Watch now").size(typography::BODY))
                .on_press(Message::Watch)
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::primary),
        )
        .push(Space::new().height(Length::Fill))
        .push(dots);

    let content = Row::new()
        .spacing(spacing::LG)
        .align_y(Vertical::Center)
        .push(arrow("‹", Message::Previous))
        .push(details)
        .push(arrow("›", Message::Next));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::HERO_HEIGHT))
        .padding(Padding::from(spacing::LG))
        .style(styles::container::hero)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ItemId;
    use chrono::NaiveDate;

    const SIX_SECONDS: Duration = Duration::from_secs(6);

    fn items(n: usize) -> Vec<ContentItem> {
        (0..n)
            .map(|i| ContentItem {
                id: ItemId::new(format!("f{i}")),
                name: format!("Featured {i}"),
                description: String::new(),
                thumbnail_url: String::new(),
                video_url: format!("https://example.com/{i}"),
                release_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default(),
                duration: "0:30".into(),
            })
            .collect()
    }

    #[test]
    fn auto_advances_and_wraps() {
        let t0 = Instant::now();
        let mut hero = Hero::new(items(2), Some(SIX_SECONDS), t0);

        hero.tick(t0 + SIX_SECONDS);
        assert_eq!(hero.index(), 1);
        hero.tick(t0 + SIX_SECONDS * 2);
        assert_eq!(hero.index(), 0);
    }

    #[test]
    fn manual_navigation_restarts_countdown() {
        let t0 = Instant::now();
        let mut hero = Hero::new(items(3), Some(SIX_SECONDS), t0);

        let t1 = t0 + Duration::from_secs(5);
        hero.update(Message::Previous, t1);
        assert_eq!(hero.index(), 2);

        hero.tick(t0 + SIX_SECONDS);
        assert_eq!(hero.index(), 2);
        hero.tick(t1 + SIX_SECONDS);
        assert_eq!(hero.index(), 0);
    }

    #[test]
    fn disabled_interval_never_advances() {
        let t0 = Instant::now();
        let mut hero = Hero::new(items(3), None, t0);
        assert!(!hero.has_pending_timers());
        hero.tick(t0 + SIX_SECONDS * 10);
        assert_eq!(hero.index(), 0);
    }

    #[test]
    fn goto_ignores_out_of_range() {
        let t0 = Instant::now();
        let mut hero = Hero::new(items(2), Some(SIX_SECONDS), t0);
        hero.update(Message::GoTo(1), t0);
        assert_eq!(hero.index(), 1);
        hero.update(Message::GoTo(7), t0);
        assert_eq!(hero.index(), 1);
    }

    #[test]
    fn watch_reports_current_video() {
        let t0 = Instant::now();
        let mut hero = Hero::new(items(2), None, t0);
        assert_eq!(
            hero.update(Message::Watch, t0),
            Event::Watch("https://example.com/0".into())
        );
    }

    #[test]
    fn empty_hero_is_inert() {
        let t0 = Instant::now();
        let mut hero = Hero::new(Vec::new(), Some(SIX_SECONDS), t0);
        hero.update(Message::Next, t0);
        assert!(hero.current().is_none());
        assert!(!hero.has_pending_timers());
    }
}
