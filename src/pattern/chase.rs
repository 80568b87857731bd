//! Color chase pattern; segments of each color march down the section

use embassy_time::Instant;
use heapless::Vec;

use super::Pattern;
use crate::{color::Rgb, controller::SectionController};

/// Maximum number of palette colors a chase can carry.
pub const MAX_CHASE_COLORS: usize = 8;

/// Segments of each palette color chase along the section, shifting one
/// pixel per tick.
#[derive(Debug, Clone)]
pub struct ChasePattern {
    segment_width: usize,
    colors: Vec<Rgb, MAX_CHASE_COLORS>,
    offset: usize,
}

impl ChasePattern {
    /// Palette colors beyond [`MAX_CHASE_COLORS`] are ignored.
    pub fn new(segment_width: usize, colors: &[Rgb]) -> Self {
        let mut palette = Vec::new();
        for &color in colors.iter().take(MAX_CHASE_COLORS) {
            let _ = palette.push(color);
        }
        Self {
            segment_width: segment_width.max(1),
            colors: palette,
            offset: 0,
        }
    }
}

// Configuration equality only; the chase offset is runtime state.
impl PartialEq for ChasePattern {
    fn eq(&self, other: &Self) -> bool {
        self.segment_width == other.segment_width && self.colors == other.colors
    }
}

impl Pattern for ChasePattern {
    fn advance(&mut self, _now: Instant, section: &mut SectionController<'_>, _first_run: bool) {
        if self.colors.is_empty() {
            return;
        }

        let len = section.len();
        for index in 0..len {
            let shifted = (index + self.offset) % len;
            let color_index = (index / self.segment_width) % self.colors.len();
            section.set(shifted, self.colors[color_index]);
        }

        self.offset = (self.offset + 1) % len;
    }
}
