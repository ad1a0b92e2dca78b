// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The window is a stack: header and page at the bottom, then the preview
//! popup, the profile menu and the toasts.

use super::{Message, Screen};
use crate::ui::feed::{self, HomeFeed};
use crate::ui::header;
use crate::ui::notifications::{self, Toast};
use crate::ui::pages;
use crate::ui::theming::ThemeMode;
use iced::widget::{Column, Container, Stack};
use iced::{Element, Length, Size};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub screen: Screen,
    pub theme_mode: ThemeMode,
    pub header: &'a header::State,
    pub feed: &'a HomeFeed,
    pub viewport: Size,
    pub notifications: &'a notifications::Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let body: Element<'_, Message> = match ctx.screen {
        Screen::Home => feed::view(ctx.feed).map(Message::Feed),
        Screen::Dashboard => pages::dashboard(ctx.feed.catalog()),
        Screen::Profile => {
            pages::profile(ctx.theme_mode, ctx.feed.catalog(), ctx.feed.watch_list())
        }
    };

    let base = Column::new()
        .push(header::view(ctx.header, ctx.screen).map(Message::Header))
        .push(
            Container::new(body)
                .width(Length::Fill)
                .height(Length::Fill),
        );

    let mut stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base);

    if ctx.screen == Screen::Home {
        if let Some(popup) = feed::popup_layer(ctx.feed) {
            stack = stack.push(popup.map(Message::Feed));
        }
    }
    if let Some(menu) = header::menu_layer(ctx.header, ctx.viewport) {
        stack = stack.push(menu.map(Message::Header));
    }
    if let Some(toasts) = Toast::view_overlay(ctx.notifications) {
        stack = stack.push(toasts.map(Message::Notification));
    }

    stack.into()
}
