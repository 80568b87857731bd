//! Scanner pattern; an "eye" color sweeps back and forth
//!
//! Differs from chase in that the eye fades into the background over its
//! length instead of moving as a hard-edged segment.

use embassy_time::Instant;

use super::Pattern;
use crate::{
    color::{Rgb, blend_colors},
    controller::SectionController,
};

/// A blended eye scanning across the section, bouncing at the edges.
#[derive(Debug, Clone)]
pub struct ScannerPattern {
    background: Rgb,
    eye: Rgb,
    eye_length: usize,
    position: usize,
    direction: isize,
}

impl ScannerPattern {
    /// `eye_length` is the fade distance on each side of the eye center.
    pub fn new(background: Rgb, eye: Rgb, eye_length: usize) -> Self {
        Self {
            background,
            eye,
            eye_length: eye_length.max(1),
            position: 0,
            direction: 1,
        }
    }
}

// Configuration equality only; eye position and direction are runtime state.
impl PartialEq for ScannerPattern {
    fn eq(&self, other: &Self) -> bool {
        self.background == other.background
            && self.eye == other.eye
            && self.eye_length == other.eye_length
    }
}

impl Pattern for ScannerPattern {
    #[allow(clippy::cast_possible_truncation)]
    fn advance(&mut self, _now: Instant, section: &mut SectionController<'_>, first_run: bool) {
        if first_run {
            self.position = 0;
            self.direction = 1;
        }

        let len = section.len();
        for index in 0..len {
            let distance = self.position.abs_diff(index).min(self.eye_length);
            // 255 at the eye center, 0 at eye_length pixels away
            let intensity = 255 - ((distance * 255) / self.eye_length) as u8;
            section.set(index, blend_colors(self.background, self.eye, intensity));
        }

        if self.position == 0 {
            self.direction = 1;
        } else if self.position == len - 1 {
            self.direction = -1;
        }
        self.position = self.position.saturating_add_signed(self.direction);
    }
}
