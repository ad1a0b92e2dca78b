// SPDX-License-Identifier: MPL-2.0
//! Hover intent: turns pointer enter/leave traffic over thumbnails into a
//! debounced "preview this item" signal and its inverse.
//!
//! States:
//!
//! ```text
//!            enter(item)               confirm fires
//!   Idle ───────────────► PendingConfirm ─────────────► Active
//!    ▲                        │ leave                     │ leave (not into popup)
//!    │                        ▼                           ▼
//!    └──────── Idle ◄── (no session shown)          PendingDismiss ── dismiss fires ──► Idle
//! ```
//!
//! A session that is already on screen survives a `PendingConfirm` for a
//! different item; it is only replaced once the new candidate confirms.

use super::timer::Timer;
use crate::content::ItemId;
use iced::{Point, Rectangle};
use std::time::{Duration, Instant};

/// A confirmed hover: what to preview and where the pointer was.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverSession {
    pub item: ItemId,
    /// Pointer position when the confirm timer fired.
    pub point: Point,
    /// Thumbnail bounds captured when the pointer entered it.
    pub rect: Option<Rectangle>,
}

/// What the pointer moved onto when it left something.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Related {
    Nothing,
    Thumbnail(ItemId),
    Popup,
}

#[derive(Debug, Clone, PartialEq)]
pub enum HoverEvent {
    SessionStarted(HoverSession),
    SessionEnded,
}

#[derive(Debug, Clone, PartialEq)]
struct Candidate {
    item: ItemId,
    rect: Option<Rectangle>,
}

#[derive(Debug, Clone, PartialEq, Default)]
enum State {
    #[default]
    Idle,
    PendingConfirm {
        candidate: Candidate,
        shown: Option<HoverSession>,
    },
    Active(HoverSession),
    PendingDismiss(HoverSession),
}

/// Phase of the controller, for callers that only need to observe it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    PendingConfirm,
    Active,
    PendingDismiss,
}

#[derive(Debug, Clone)]
pub struct HoverIntent {
    state: State,
    confirm: Timer,
    dismiss: Timer,
    confirm_delay: Duration,
    dismiss_delay: Duration,
    last_point: Option<Point>,
}

impl HoverIntent {
    #[must_use]
    pub fn new(confirm_delay: Duration, dismiss_delay: Duration) -> Self {
        Self {
            state: State::Idle,
            confirm: Timer::idle(),
            dismiss: Timer::idle(),
            confirm_delay,
            dismiss_delay,
            last_point: None,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        match self.state {
            State::Idle => Phase::Idle,
            State::PendingConfirm { .. } => Phase::PendingConfirm,
            State::Active(_) => Phase::Active,
            State::PendingDismiss(_) => Phase::PendingDismiss,
        }
    }

    /// The session currently on screen, if any.
    #[must_use]
    pub fn session(&self) -> Option<&HoverSession> {
        match &self.state {
            State::Idle => None,
            State::PendingConfirm { shown, .. } => shown.as_ref(),
            State::Active(session) | State::PendingDismiss(session) => Some(session),
        }
    }

    /// Item waiting for its confirm timer.
    #[must_use]
    pub fn candidate(&self) -> Option<&ItemId> {
        match &self.state {
            State::PendingConfirm { candidate, .. } => Some(&candidate.item),
            _ => None,
        }
    }

    /// Number of armed timers; never more than one of each kind.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        usize::from(self.confirm.is_pending()) + usize::from(self.dismiss.is_pending())
    }

    #[must_use]
    pub fn has_pending_timers(&self) -> bool {
        self.pending_timers() > 0
    }

    pub fn pointer_moved(&mut self, point: Point) {
        self.last_point = Some(point);
    }

    /// Pointer entered the thumbnail of `item`, whose bounds are `rect`.
    pub fn pointer_enter(&mut self, item: ItemId, rect: Option<Rectangle>, now: Instant) {
        self.confirm.cancel();
        self.dismiss.cancel();

        let shown = match std::mem::take(&mut self.state) {
            State::Idle => None,
            State::PendingConfirm { shown, .. } => shown,
            State::Active(session) | State::PendingDismiss(session) => Some(session),
        };

        if let Some(session) = shown.as_ref().filter(|s| s.item == item) {
            self.state = State::Active(session.clone());
            return;
        }

        self.state = State::PendingConfirm {
            candidate: Candidate { item, rect },
            shown,
        };
        self.confirm.arm(now, self.confirm_delay);
    }

    /// Pointer left a thumbnail and is now over `related`.
    pub fn pointer_leave(&mut self, related: &Related, now: Instant) {
        match std::mem::take(&mut self.state) {
            State::PendingConfirm { shown, .. } => {
                self.confirm.cancel();
                self.state = match shown {
                    Some(session) if *related == Related::Popup => State::Active(session),
                    Some(session) => {
                        self.dismiss.arm(now, self.dismiss_delay);
                        State::PendingDismiss(session)
                    }
                    None => State::Idle,
                };
            }
            State::Active(session) if *related != Related::Popup => {
                self.dismiss.arm(now, self.dismiss_delay);
                self.state = State::PendingDismiss(session);
            }
            other => self.state = other,
        }
    }

    /// Pointer reached the popup surface.
    pub fn pointer_entered_popup(&mut self) {
        if let State::PendingDismiss(session) = &self.state {
            let session = session.clone();
            self.dismiss.cancel();
            self.state = State::Active(session);
        }
    }

    /// Pointer left the popup surface for `related`.
    pub fn pointer_left_popup(&mut self, related: &Related, now: Instant) {
        if let State::Active(session) = &self.state {
            if *related == Related::Thumbnail(session.item.clone()) {
                return;
            }
            let session = session.clone();
            self.dismiss.arm(now, self.dismiss_delay);
            self.state = State::PendingDismiss(session);
        }
    }

    /// Fires due timers.
    pub fn poll(&mut self, now: Instant) -> Option<HoverEvent> {
        if self.confirm.fire_if_due(now) {
            if let State::PendingConfirm { candidate, .. } = std::mem::take(&mut self.state) {
                let point = self
                    .last_point
                    .or_else(|| candidate.rect.map(|r| r.center()))
                    .unwrap_or(Point::ORIGIN);
                let session = HoverSession {
                    item: candidate.item,
                    point,
                    rect: candidate.rect,
                };
                log::debug!("hover confirmed on {}", session.item);
                self.state = State::Active(session.clone());
                return Some(HoverEvent::SessionStarted(session));
            }
        }

        if self.dismiss.fire_if_due(now) {
            return self.dismiss_confirmed();
        }

        None
    }

    /// Ends the live session.
    pub fn dismiss_confirmed(&mut self) -> Option<HoverEvent> {
        self.confirm.cancel();
        self.dismiss.cancel();
        let had_session = self.session().is_some();
        self.state = State::Idle;
        had_session.then(|| {
            log::debug!("hover session ended");
            HoverEvent::SessionEnded
        })
    }

    /// Drops every pending timer and the session (scroll, screen change).
    pub fn cancel_all(&mut self) {
        self.confirm.cancel();
        self.dismiss.cancel();
        self.state = State::Idle;
    }
}
