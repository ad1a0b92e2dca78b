// SPDX-License-Identifier: MPL-2.0
//! Content collaborator: the catalog being browsed and its search filter.

pub mod catalog;
pub mod search;

pub use catalog::{Catalog, Category, ContentItem, ItemId};
pub use search::{filter_categories, SearchQuery};
