// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::content::Catalog;
use crate::error::Error;
use crate::ui::feed;
use crate::ui::header;
use crate::ui::notifications;
use iced::{Point, Size};
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Header(header::Message),
    Feed(feed::Message),
    Notification(notifications::NotificationMessage),
    /// Drives every pending deadline.
    Tick(Instant),
    CursorMoved(Point),
    CursorLeft,
    LeftClick,
    Escape,
    WindowResized(Size),
    CatalogLoaded(Result<Catalog, Error>),
}

/// Runtime flags passed from `main.rs` into the application.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Catalog file to browse; takes precedence over `[content] catalog_path`.
    pub catalog_path: Option<PathBuf>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `EYESON_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
