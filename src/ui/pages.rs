// SPDX-License-Identifier: MPL-2.0
//! Secondary pages reachable from the header.

use crate::content::{Catalog, ItemId};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::widget::{scrollable, Column, Container, Space, Text};
use iced::{alignment::Horizontal, Element, Length};

/// Catalog overview.
pub fn dashboard<'a, Message: 'a>(catalog: &'a Catalog) -> Element<'a, Message> {
    let summary = format!(
        "{} videos in {} categories",
        catalog.item_count(),
        catalog.categories().len()
    );

    let rows = catalog
        .categories()
        .iter()
        .fold(Column::new().spacing(spacing::XS), |column, category| {
            column.push(
                Text::new(format!("{}: {}", category.name, category.items.len()))
                    .size(typography::BODY)
                    .color(palette::TEXT_SECONDARY),
            )
        });

    page(
        "Dashboard",
        Column::new()
            .spacing(spacing::MD)
            .push(Text::new(summary).size(typography::BODY_LG))
            .push(rows)
            .into(),
    )
}

/// Guest profile: theme and the session's watch list.
pub fn profile<'a, Message: 'a>(
    theme_mode: ThemeMode,
    catalog: &'a Catalog,
    watch_list: &'a [ItemId],
) -> Element<'a, Message> {
    let theme = match theme_mode {
        ThemeMode::Light => "Light",
        ThemeMode::Dark => "Dark",
        ThemeMode::System => "System",
    };

    let names = watch_list_names(catalog, watch_list);
    let list = if names.is_empty() {
        Column::new().push(
            Text::new("Nothing saved yet. Use + on a preview to add videos.")
                .size(typography::BODY)
                .color(palette::TEXT_TERTIARY),
        )
    } else {
        names
            .into_iter()
            .fold(Column::new().spacing(spacing::XS), |column, name| {
                column.push(
                    Text::new(name)
                        .size(typography::BODY)
                        .color(palette::TEXT_SECONDARY),
                )
            })
    };

    page(
        "Profile",
        Column::new()
            .spacing(spacing::XS)
            .push(Text::new("Guest").size(typography::BODY_LG))
            .push(
                Text::new(format!("Theme: {theme}"))
                    .size(typography::BODY)
                    .color(palette::TEXT_TERTIARY),
            )
            .push(Space::new().height(Length::Fixed(spacing::MD)))
            .push(Text::new("My list").size(typography::TITLE_SM))
            .push(list)
            .into(),
    )
}

/// Names of the saved items, skipping ids a reloaded catalog no longer has.
fn watch_list_names<'a>(catalog: &'a Catalog, watch_list: &[ItemId]) -> Vec<&'a str> {
    watch_list
        .iter()
        .filter_map(|id| catalog.item(id))
        .map(|item| item.name.as_str())
        .collect()
}

fn page<'a, Message: 'a>(title: &'a str, body: Element<'a, Message>) -> Element<'a, Message> {
    let panel = Container::new(
        Column::new()
            .spacing(spacing::LG)
            .push(
                Text::new(title)
                    .size(typography::TITLE_LG)
                    .color(palette::ACCENT_LIGHT),
            )
            .push(body),
    )
    .padding(spacing::XL)
    .width(Length::Fill)
    .style(styles::container::panel);

    scrollable(
        Column::new()
            .padding(spacing::LG)
            .align_x(Horizontal::Center)
            .push(panel)
            .push(crate::ui::footer::view()),
    )
    .height(Length::Fill)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn watch_list_names_follow_list_order_and_skip_unknown_ids() {
        let catalog = Catalog::embedded().expect("bundled catalog");
        let list = [
            ItemId::new("cook-02"),
            ItemId::new("gone-99"),
            ItemId::new("trend-01"),
        ];

        assert_eq!(
            watch_list_names(&catalog, &list),
            vec!["Hand-Pulled Noodles", "Sunrise Timelapse"]
        );
    }
}
