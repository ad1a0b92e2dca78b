// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for user feedback.
//!
//! Toasts report things like "added to your list" or a failed browser launch
//! without blocking the feed. At most [`MAX_VISIBLE`] are on screen; the rest
//! wait in a queue.
//!
//! - Success/info last about 3s, warnings 5s, errors stay until dismissed
//! - Position: bottom-right corner

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage, MAX_VISIBLE};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
