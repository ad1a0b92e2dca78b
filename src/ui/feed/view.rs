// SPDX-License-Identifier: MPL-2.0
//! Feed and preview rendering.
//!
//! Every size used here must agree with [`super::layout`]; the pointer is
//! hit-tested against that model, not against the rendered widgets.

use super::{HomeFeed, Message};
use crate::content::{Category, ContentItem};
use crate::preview::Popup;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::{footer, hero};
use iced::widget::scrollable::{Direction, Scrollbar, Viewport};
use iced::widget::{button, Column, Container, Id, Row, Scrollable, Space, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Element, Length, Padding,
};

/// Id of the vertical feed scrollable, for programmatic snapping.
pub const FEED_SCROLL_ID: &str = "home-feed";

pub fn view(feed: &HomeFeed) -> Element<'_, Message> {
    let mut content = Column::new().width(Length::Fill);

    if feed.shows_hero() {
        content = content
            .push(hero::view(feed.hero()).map(Message::Hero))
            .push(Space::new().height(Length::Fixed(sizing::SECTION_SPACING)));
    }

    if feed.rails().is_empty() {
        content = content.push(empty_results());
    }

    for (index, category) in feed.rails().iter().enumerate() {
        if index > 0 {
            content = content.push(Space::new().height(Length::Fixed(sizing::RAIL_SPACING)));
        }
        content = content.push(rail(index, category));
    }

    let body = Column::new()
        .push(Container::new(content).padding(Padding::from(sizing::FEED_PADDING)))
        .push(footer::view());

    Scrollable::new(body)
        .id(Id::new(FEED_SCROLL_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .direction(Direction::Vertical(Scrollbar::new()))
        .on_scroll(Message::FeedScrolled)
        .into()
}

fn empty_results<'a>() -> Element<'a, Message> {
    Container::new(
        Text::new("No videos match your search.")
            .size(typography::BODY_LG)
            .color(palette::TEXT_TERTIARY),
    )
    .width(Length::Fill)
    .padding([spacing::XXL, 0.0])
    .align_x(Horizontal::Center)
    .into()
}

fn rail(index: usize, category: &Category) -> Element<'_, Message> {
    let title = Container::new(Text::new(category.name.as_str()).size(typography::TITLE_SM))
        .height(Length::Fixed(sizing::RAIL_TITLE_HEIGHT))
        .align_y(Vertical::Top);

    let cards = category
        .items
        .iter()
        .fold(Row::new().spacing(sizing::CARD_SPACING), |row, item| {
            row.push(card(item))
        });

    let strip = Scrollable::new(cards)
        .width(Length::Fill)
        .height(Length::Fixed(
            sizing::CARD_THUMB_HEIGHT + sizing::CARD_CAPTION_HEIGHT,
        ))
        .direction(Direction::Horizontal(
            Scrollbar::new().width(spacing::XXS).scroller_width(spacing::XXS),
        ))
        .on_scroll(move |viewport: Viewport| Message::RailScrolled(index, viewport));

    Column::new().push(title).push(strip).into()
}

fn card(item: &ContentItem) -> Element<'_, Message> {
    let thumbnail = Container::new(
        Text::new(item.duration.as_str())
            .size(typography::CAPTION)
            .color(palette::TEXT_SECONDARY),
    )
    .width(Length::Fixed(sizing::CARD_WIDTH))
    .height(Length::Fixed(sizing::CARD_THUMB_HEIGHT))
    .padding(spacing::XS)
    .align_x(Horizontal::Right)
    .align_y(Vertical::Bottom)
    .style(styles::container::thumbnail(false));

    let caption = Container::new(
        Text::new(item.name.as_str())
            .size(typography::BODY_SM)
            .color(palette::TEXT_SECONDARY),
    )
    .width(Length::Fixed(sizing::CARD_WIDTH))
    .height(Length::Fixed(sizing::CARD_CAPTION_HEIGHT))
    .padding(Padding {
        top: spacing::XS,
        ..Padding::ZERO
    });

    Column::new()
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .push(thumbnail)
        .push(caption)
        .into()
}

/// Render the hover preview as a full-window layer positioned over the
/// feed. Returns `None` when no popup is mounted or it has no placement yet.
pub fn popup_layer(feed: &HomeFeed) -> Option<Element<'_, Message>> {
    let popup = feed.popup()?;
    let placement = popup.placement()?;
    let policy = popup.policy();

    let height = placement.height();
    let media_height = policy.media_height.min(height);

    let body = Column::new()
        .push(media(popup, media_height))
        .push(info(popup.item()));

    let card = Container::new(body)
        .width(Length::Fixed(placement.width))
        .height(Length::Fixed(height))
        .clip(true)
        .style(styles::container::popup);

    Some(
        Container::new(card)
            .padding(Padding {
                top: placement.top.max(0.0),
                right: 0.0,
                bottom: 0.0,
                left: placement.left.max(0.0),
            })
            .into(),
    )
}

fn media(popup: &Popup, height: f32) -> Element<'_, Message> {
    let content: Element<'_, Message> = if popup.is_revealed() {
        Container::new(
            Column::new()
                .spacing(spacing::XXS)
                .align_x(Horizontal::Center)
                .push(Text::new("Now playing").size(typography::BODY))
                .push(
                    Text::new(popup.embed_url())
                        .size(typography::CAPTION)
                        .color(palette::TEXT_TERTIARY),
                ),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::SM)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::player)
        .into()
    } else {
        let badge = Container::new(Text::new("▶").size(typography::TITLE_MD))
            .width(Length::Fixed(sizing::PLAY_BADGE))
            .height(Length::Fixed(sizing::PLAY_BADGE))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(styles::container::play_badge);

        Container::new(badge)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(styles::container::thumbnail(true))
            .into()
    };

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .into()
}

fn info(item: &ContentItem) -> Element<'_, Message> {
    let actions = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(
            button(Text::new("▶ Play").size(typography::BODY))
                .on_press(Message::PlayPressed)
                .padding([spacing::XXS, spacing::MD])
                .style(styles::button::primary),
        )
        .push(
            button(Text::new("+").size(typography::TITLE_SM))
                .on_press(Message::AddPressed)
                .width(Length::Fixed(sizing::BUTTON_HEIGHT))
                .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                .style(styles::button::secondary_round),
        );

    let details = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(item.name.as_str()).size(typography::BODY_LG))
        .push(
            Text::new(item.meta_line())
                .size(typography::CAPTION)
                .color(palette::TEXT_TERTIARY),
        )
        .push(
            Text::new(item.description.as_str())
                .size(typography::BODY_SM)
                .color(palette::TEXT_MUTED),
        );

    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(actions)
            .push(details),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(spacing::SM)
    .style(styles::container::popup_info)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Catalog;
    use crate::preview::PreviewTimings;
    use std::time::Instant;

    #[test]
    fn no_popup_layer_without_preview() {
        let catalog = Catalog::embedded().expect("embedded catalog");
        let feed = HomeFeed::new(catalog, PreviewTimings::default(), None, Instant::now());
        assert!(popup_layer(&feed).is_none());
    }
}
