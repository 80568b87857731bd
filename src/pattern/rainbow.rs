//! Hue-cycling rainbow pattern

use embassy_time::Instant;

use super::Pattern;
use crate::{
    color::{Hsv, hsv2rgb},
    controller::SectionController,
};

const DEFAULT_HUE_STEP: u8 = 4;
const DEFAULT_VALUE: u8 = 128;

/// Spreads the full 0-255 hue circle across the section and rotates it by
/// a fixed step each tick.
#[derive(Debug, Clone)]
pub struct RainbowPattern {
    step: u8,
    saturation: u8,
    value: u8,
    first_hue: u8,
}

impl RainbowPattern {
    pub const fn new() -> Self {
        Self {
            step: DEFAULT_HUE_STEP,
            saturation: 255,
            value: DEFAULT_VALUE,
            first_hue: 0,
        }
    }

    /// Set the hue advance per tick
    #[must_use]
    pub const fn with_step(mut self, step: u8) -> Self {
        self.step = step;
        self
    }

    /// Set the brightness value
    #[must_use]
    pub const fn with_value(mut self, value: u8) -> Self {
        self.value = value;
        self
    }
}

impl Default for RainbowPattern {
    fn default() -> Self {
        Self::new()
    }
}

// Configuration equality only; the rotating base hue is runtime state.
impl PartialEq for RainbowPattern {
    fn eq(&self, other: &Self) -> bool {
        self.step == other.step
            && self.saturation == other.saturation
            && self.value == other.value
    }
}

impl Pattern for RainbowPattern {
    #[allow(clippy::cast_possible_truncation)]
    fn advance(&mut self, _now: Instant, section: &mut SectionController<'_>, _first_run: bool) {
        let len = section.len();
        for (index, pixel) in section.iter_mut().enumerate() {
            let hue = self
                .first_hue
                .wrapping_add(((index * 255) / len) as u8);
            *pixel = hsv2rgb(Hsv {
                hue,
                sat: self.saturation,
                val: self.value,
            });
        }

        self.first_hue = self.first_hue.wrapping_add(self.step);
    }
}
