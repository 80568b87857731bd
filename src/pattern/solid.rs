//! Solid color fill pattern

use embassy_time::Instant;

use super::Pattern;
use crate::{color::Rgb, controller::SectionController};

/// Fills the whole section with one color every tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolidPattern {
    color: Rgb,
}

impl SolidPattern {
    pub const fn new(color: Rgb) -> Self {
        Self { color }
    }
}

impl Pattern for SolidPattern {
    fn advance(&mut self, _now: Instant, section: &mut SectionController<'_>, _first_run: bool) {
        section.fill(self.color);
    }
}
