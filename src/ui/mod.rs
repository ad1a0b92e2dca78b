// SPDX-License-Identifier: MPL-2.0
//! User interface components, following the Elm-style "state down,
//! messages up" pattern.
//!
//! # Screens
//!
//! - [`feed`] - Home feed: hero, category rails and the hover preview
//! - [`pages`] - Dashboard and profile pages
//!
//! # Shared Infrastructure
//!
//! - [`header`] - Navigation, search and the profile menu
//! - [`hero`] - Featured carousel
//! - [`footer`] - Page footer
//! - [`notifications`] - Toast notification system for user feedback
//! - [`styles`] - Centralized widget styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod feed;
pub mod footer;
pub mod header;
pub mod hero;
pub mod notifications;
pub mod pages;
pub mod styles;
pub mod theming;
