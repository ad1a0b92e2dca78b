// SPDX-License-Identifier: MPL-2.0
//! `eyeson` is a desktop browser for short videos built with the Iced GUI
//! framework.
//!
//! Its centerpiece is the hover preview: resting the pointer on a thumbnail
//! opens a floating card next to it, which swaps the still image for an
//! embedded player shortly after.

pub mod app;
pub mod config;
pub mod content;
pub mod error;
pub mod preview;
pub mod ui;

#[cfg(test)]
mod test_utils;
