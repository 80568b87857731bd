//! Two-color alternating block pattern

use embassy_time::{Duration, Instant};

use super::Pattern;
use crate::{color::Rgb, controller::SectionController};

/// Alternating blocks of two colors, swapping on a fixed period.
///
/// With no explicit block length the section splits into two halves.
#[derive(Debug, Clone)]
pub struct AlternatePattern {
    first: Rgb,
    second: Rgb,
    block_len: Option<usize>,
    period: Duration,
    flipped: bool,
    last_flip: Instant,
}

impl AlternatePattern {
    pub const fn new(first: Rgb, second: Rgb, period: Duration) -> Self {
        Self {
            first,
            second,
            block_len: None,
            period,
            flipped: false,
            last_flip: Instant::from_millis(0),
        }
    }

    /// Set an explicit block length in pixels
    #[must_use]
    pub const fn with_block_len(mut self, block_len: usize) -> Self {
        self.block_len = Some(block_len);
        self
    }
}

// Configuration equality only; the flip phase is runtime state.
impl PartialEq for AlternatePattern {
    fn eq(&self, other: &Self) -> bool {
        self.first == other.first
            && self.second == other.second
            && self.block_len == other.block_len
            && self.period == other.period
    }
}

impl Pattern for AlternatePattern {
    fn advance(&mut self, now: Instant, section: &mut SectionController<'_>, first_run: bool) {
        if first_run {
            self.flipped = false;
            self.last_flip = now;
        } else if now.as_millis().saturating_sub(self.last_flip.as_millis())
            >= self.period.as_millis()
        {
            self.flipped = !self.flipped;
            self.last_flip = now;
        }

        let block = match self.block_len {
            Some(len) => len.max(1),
            None => (section.len() / 2).max(1),
        };

        for (index, pixel) in section.iter_mut().enumerate() {
            let even = (index / block).is_multiple_of(2);
            *pixel = if even == self.flipped {
                self.second
            } else {
                self.first
            };
        }
    }
}
