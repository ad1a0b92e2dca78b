// SPDX-License-Identifier: MPL-2.0
//! Delayed swap from the static thumbnail to the player surface.

use super::timer::Timer;
use std::time::{Duration, Instant};

/// Reveal state of one mounted popup.
#[derive(Debug, Clone)]
pub struct Reveal {
    timer: Timer,
    revealed: bool,
}

impl Reveal {
    /// Starts the countdown for a freshly mounted popup.
    #[must_use]
    pub fn mount(now: Instant, delay: Duration) -> Self {
        let mut timer = Timer::idle();
        timer.arm(now, delay);
        Self {
            timer,
            revealed: false,
        }
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.timer.is_pending()
    }

    /// Returns `true` on the tick that reveals the player.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.timer.fire_if_due(now) {
            self.revealed = true;
            return true;
        }
        false
    }

    /// Back to the static thumbnail with nothing pending.
    pub fn reset(&mut self) {
        self.timer.cancel();
        self.revealed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(100);

    #[test]
    fn reveals_once_after_delay() {
        let t0 = Instant::now();
        let mut reveal = Reveal::mount(t0, DELAY);

        assert!(!reveal.poll(t0 + Duration::from_millis(99)));
        assert!(!reveal.is_revealed());
        assert!(reveal.poll(t0 + DELAY));
        assert!(reveal.is_revealed());
        assert!(!reveal.poll(t0 + DELAY * 2));
    }

    #[test]
    fn reset_before_fire_keeps_thumbnail() {
        let t0 = Instant::now();
        let mut reveal = Reveal::mount(t0, DELAY);
        reveal.reset();

        assert!(!reveal.poll(t0 + DELAY * 5));
        assert!(!reveal.is_revealed());
        assert!(!reveal.is_pending());
    }

    #[test]
    fn reset_after_fire_hides_player() {
        let t0 = Instant::now();
        let mut reveal = Reveal::mount(t0, DELAY);
        reveal.poll(t0 + DELAY);
        reveal.reset();
        reveal.reset();

        assert!(!reveal.is_revealed());
    }
}
