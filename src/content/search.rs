// SPDX-License-Identifier: MPL-2.0
//! Case-insensitive filtering of the catalog by a search query.

use super::catalog::{Category, ContentItem};

/// A committed, normalized search query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Normalizes raw input: surrounding whitespace is ignored and matching is
    /// case-insensitive.
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn matches(&self, item: &ContentItem) -> bool {
        self.is_empty()
            || item.name.to_lowercase().contains(&self.0)
            || item.description.to_lowercase().contains(&self.0)
    }
}

/// Returns the rails to show for `query`; rails left empty are dropped.
#[must_use]
pub fn filter_categories(categories: &[Category], query: &SearchQuery) -> Vec<Category> {
    if query.is_empty() {
        return categories.to_vec();
    }

    categories
        .iter()
        .filter_map(|category| {
            let items: Vec<ContentItem> = category
                .items
                .iter()
                .filter(|item| query.matches(item))
                .cloned()
                .collect();
            (!items.is_empty()).then(|| Category {
                name: category.name.clone(),
                items,
            })
        })
        .collect()
}
