// SPDX-License-Identifier: MPL-2.0
//! Fixed header: brand, navigation links, search box and the profile menu.
//!
//! The header reports its height to the preview through [`HEIGHT`]; the
//! popup never overlaps it.

use crate::app::Screen;
use crate::content::SearchQuery;
use crate::preview::Timer;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text_input, Column, Container, Row, Space, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Element, Length, Padding, Point, Rectangle, Size,
};
use std::time::{Duration, Instant};

/// Rendered header height.
pub const HEIGHT: f32 = sizing::HEADER_HEIGHT;

const MENU_ENTRIES: usize = 4;

/// Messages emitted by the header.
#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Screen),
    QueryChanged(String),
    QuerySubmitted,
    ToggleMenu,
    CloseMenu,
    OpenProfile,
    OpenDashboard,
    ToggleTheme,
    Quit,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    Navigate(Screen),
    Search(SearchQuery),
    ToggleTheme,
    Quit,
}

#[derive(Debug, Clone)]
pub struct State {
    input: String,
    committed: SearchQuery,
    debounce: Timer,
    debounce_delay: Duration,
    menu_open: bool,
}

impl State {
    #[must_use]
    pub fn new(debounce_delay: Duration) -> Self {
        Self {
            input: String::new(),
            committed: SearchQuery::default(),
            debounce: Timer::idle(),
            debounce_delay,
            menu_open: false,
        }
    }

    #[must_use]
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    #[must_use]
    pub fn query(&self) -> &SearchQuery {
        &self.committed
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub fn has_pending_timers(&self) -> bool {
        self.debounce.is_pending()
    }

    pub fn update(&mut self, message: Message, now: Instant) -> Event {
        match message {
            Message::Navigate(screen) => {
                self.menu_open = false;
                Event::Navigate(screen)
            }
            Message::QueryChanged(input) => {
                self.input = input;
                if self.debounce_delay.is_zero() {
                    return self.commit();
                }
                self.debounce.arm(now, self.debounce_delay);
                Event::None
            }
            Message::QuerySubmitted => {
                self.debounce.cancel();
                self.commit()
            }
            Message::ToggleMenu => {
                self.menu_open = !self.menu_open;
                Event::None
            }
            Message::CloseMenu => {
                self.menu_open = false;
                Event::None
            }
            Message::OpenProfile => {
                self.menu_open = false;
                Event::Navigate(Screen::Profile)
            }
            Message::OpenDashboard => {
                self.menu_open = false;
                Event::Navigate(Screen::Dashboard)
            }
            Message::ToggleTheme => {
                self.menu_open = false;
                Event::ToggleTheme
            }
            Message::Quit => {
                self.menu_open = false;
                Event::Quit
            }
        }
    }

    /// Commits the search input once typing has paused.
    pub fn tick(&mut self, now: Instant) -> Event {
        if self.debounce.fire_if_due(now) {
            self.commit()
        } else {
            Event::None
        }
    }

    /// Escape closes the menu first, then clears the search.
    pub fn escape(&mut self) -> Event {
        if self.menu_open {
            self.menu_open = false;
            return Event::None;
        }
        if self.input.is_empty() && self.committed.is_empty() {
            return Event::None;
        }
        self.input.clear();
        self.debounce.cancel();
        self.commit()
    }

    /// Left click anywhere in the window; closes the menu when outside it.
    ///
    /// Clicks on the header strip are left to the buttons there (the menu
    /// toggle among them).
    pub fn click(&mut self, point: Point, viewport: Size) -> bool {
        if !self.menu_open || point.y < HEIGHT || menu_bounds(viewport).contains(point) {
            return false;
        }
        self.menu_open = false;
        true
    }

    fn commit(&mut self) -> Event {
        let query = SearchQuery::new(&self.input);
        if query == self.committed {
            return Event::None;
        }
        self.committed = query.clone();
        log::debug!("search committed: {:?}", query.as_str());
        Event::Search(query)
    }
}

/// Window bounds of the open profile menu.
#[must_use]
pub fn menu_bounds(viewport: Size) -> Rectangle {
    Rectangle::new(
        Point::new(
            viewport.width - sizing::FEED_PADDING - sizing::PROFILE_MENU_WIDTH,
            HEIGHT,
        ),
        Size::new(
            sizing::PROFILE_MENU_WIDTH,
            MENU_ENTRIES as f32 * sizing::PROFILE_MENU_ITEM_HEIGHT + 2.0 * spacing::XS,
        ),
    )
}

/// Render the header bar.
pub fn view<'a>(state: &'a State, screen: Screen) -> Element<'a, Message> {
    let brand = Text::new("Eyes0n").size(typography::TITLE_MD);

    let nav = [
        ("Home", Screen::Home),
        ("Dashboard", Screen::Dashboard),
        ("Profile", Screen::Profile),
    ]
    .into_iter()
    .fold(Row::new().spacing(spacing::XS), |row, (label, target)| {
        row.push(
            button(Text::new(label).size(typography::BODY))
                .on_press(Message::Navigate(target))
                .style(styles::button::nav_link(screen == target)),
        )
    });

    let search = text_input("Search...", &state.input)
        .on_input(Message::QueryChanged)
        .on_submit(Message::QuerySubmitted)
        .size(typography::BODY)
        .width(Length::Fill);
    let search = Container::new(search)
        .width(Length::Fixed(sizing::SEARCH_WIDTH))
        .height(Length::Fixed(sizing::SEARCH_HEIGHT))
        .align_y(Vertical::Center);

    let profile = button(Text::new("Account").size(typography::BODY))
        .on_press(Message::ToggleMenu)
        .style(styles::button::nav_link(state.menu_open));

    let row = Row::new()
        .spacing(spacing::LG)
        .align_y(Vertical::Center)
        .push(brand)
        .push(nav)
        .push(Space::new().width(Length::Fill))
        .push(search)
        .push(profile);

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(HEIGHT))
        .padding(Padding::from([0.0, sizing::FEED_PADDING]))
        .align_y(Vertical::Center)
        .style(styles::container::header)
        .into()
}

/// Render the profile menu as a full-window layer, positioned under its
/// toggle. Returns `None` while closed.
pub fn menu_layer<'a>(state: &'a State, viewport: Size) -> Option<Element<'a, Message>> {
    if !state.menu_open {
        return None;
    }
    let bounds = menu_bounds(viewport);

    let entries = [
        ("View profile", Message::OpenProfile),
        ("Dashboard", Message::OpenDashboard),
        ("Switch theme", Message::ToggleTheme),
        ("Quit", Message::Quit),
    ]
    .into_iter()
    .fold(Column::new(), |column, (label, message)| {
        column.push(
            button(Text::new(label).size(typography::BODY).color(palette::TEXT_SECONDARY))
                .on_press(message)
                .width(Length::Fill)
                .height(Length::Fixed(sizing::PROFILE_MENU_ITEM_HEIGHT))
                .style(styles::button::menu_item),
        )
    });

    let menu = Container::new(entries)
        .width(Length::Fixed(bounds.width))
        .height(Length::Fixed(bounds.height))
        .padding(spacing::XS)
        .align_x(Horizontal::Left)
        .style(styles::container::menu);

    Some(
        Container::new(menu)
            .padding(Padding {
                top: bounds.y,
                right: 0.0,
                bottom: 0.0,
                left: bounds.x.max(0.0),
            })
            .into(),
    )
}
