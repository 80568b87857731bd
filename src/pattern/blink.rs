//! Timed on/off blink pattern

use embassy_time::{Duration, Instant};

use super::Pattern;
use crate::{color::Rgb, controller::SectionController};

/// Alternates the section between a color and black on a fixed period.
#[derive(Debug, Clone)]
pub struct BlinkPattern {
    color: Rgb,
    period: Duration,
    on: bool,
    last_toggle: Instant,
}

impl BlinkPattern {
    /// `period` is how long the section stays on (or off) before switching.
    pub const fn new(color: Rgb, period: Duration) -> Self {
        Self {
            color,
            period,
            on: true,
            last_toggle: Instant::from_millis(0),
        }
    }
}

// Configuration equality only; the on/off phase is runtime state.
impl PartialEq for BlinkPattern {
    fn eq(&self, other: &Self) -> bool {
        self.color == other.color && self.period == other.period
    }
}

impl Pattern for BlinkPattern {
    fn advance(&mut self, now: Instant, section: &mut SectionController<'_>, first_run: bool) {
        if first_run {
            self.on = true;
            self.last_toggle = now;
        } else if now.as_millis().saturating_sub(self.last_toggle.as_millis())
            >= self.period.as_millis()
        {
            self.on = !self.on;
            self.last_toggle = now;
        }

        let color = if self.on { self.color } else { Rgb::default() };
        section.fill(color);
    }
}
