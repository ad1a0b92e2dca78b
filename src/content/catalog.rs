// SPDX-License-Identifier: MPL-2.0
//! The browsable catalog: categories of short videos and the featured list.
//!
//! Catalogs are plain JSON. Both `snake_case` keys and the camelCase keys
//! used by web front-ends (`thumbnailUrl`, `videoUrl`, `releaseDate`) are
//! accepted.

use crate::error::{CatalogError, Error, Result};
use chrono::NaiveDate;
use rust_embed::RustEmbed;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;

#[derive(RustEmbed)]
#[folder = "assets/"]
struct Asset;

const EMBEDDED_CATALOG: &str = "catalog.json";

/// Stable identifier of a content item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single short video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(alias = "thumbnailUrl")]
    pub thumbnail_url: String,
    #[serde(alias = "videoUrl")]
    pub video_url: String,
    #[serde(alias = "releaseDate")]
    pub release_date: NaiveDate,
    pub duration: String,
}

impl ContentItem {
    /// Release date formatted for display, e.g. `May 3, 2025`.
    #[must_use]
    pub fn release_label(&self) -> String {
        self.release_date.format("%B %-d, %Y").to_string()
    }

    /// Secondary line shown under the title: `May 3, 2025 • 0:42`.
    #[must_use]
    pub fn meta_line(&self) -> String {
        format!("{} • {}", self.release_label(), self.duration)
    }
}

/// A named rail of items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub items: Vec<ContentItem>,
}

#[derive(Debug, Deserialize)]
struct RawCatalog {
    categories: Vec<Category>,
    #[serde(default)]
    featured: Vec<ItemId>,
}

/// Validated, read-only catalog.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    categories: Vec<Category>,
    featured: Vec<ItemId>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate ids and dangling featured ids.
    pub fn new(categories: Vec<Category>, featured: Vec<ItemId>) -> Result<Self> {
        let mut seen = HashSet::new();
        for item in categories.iter().flat_map(|c| c.items.iter()) {
            if !seen.insert(item.id.clone()) {
                return Err(CatalogError::DuplicateId(item.id.to_string()).into());
            }
        }

        if let Some(missing) = featured.iter().find(|id| !seen.contains(*id)) {
            return Err(CatalogError::UnknownFeatured(missing.to_string()).into());
        }

        Ok(Self {
            categories,
            featured,
        })
    }

    /// Parses and validates a JSON catalog.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawCatalog = serde_json::from_str(json)?;
        Self::new(raw.categories, raw.featured)
    }

    /// Catalog bundled into the binary.
    pub fn embedded() -> Result<Self> {
        let file = Asset::get(EMBEDDED_CATALOG).ok_or(CatalogError::MissingFixture)?;
        let json = std::str::from_utf8(file.data.as_ref())
            .map_err(|err| Error::Catalog(CatalogError::Malformed(err.to_string())))?;
        Self::from_json(json)
    }

    /// Reads a catalog file without blocking the UI thread.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = tokio::fs::read_to_string(path.as_ref()).await?;
        Self::from_json(&json)
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    #[must_use]
    pub fn item(&self, id: &ItemId) -> Option<&ContentItem> {
        self.categories
            .iter()
            .flat_map(|c| c.items.iter())
            .find(|item| &item.id == id)
    }

    /// Items for the hero carousel.
    ///
    /// Uses the explicit featured list when present, otherwise the first item
    /// of every category.
    #[must_use]
    pub fn featured(&self) -> Vec<ContentItem> {
        if self.featured.is_empty() {
            self.categories
                .iter()
                .filter_map(|c| c.items.first().cloned())
                .collect()
        } else {
            self.featured
                .iter()
                .filter_map(|id| self.item(id).cloned())
                .collect()
        }
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }
}
