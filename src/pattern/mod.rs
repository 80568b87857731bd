//! Pattern system with compile-time known pattern variants
//!
//! All patterns are stored in an enum to avoid heap allocations.
//! Each pattern implements the [`Pattern`] trait and animates by writing
//! through its [`SectionController`] once per tick.

mod alternate;
mod blink;
mod chaos;
mod chase;
mod rainbow;
mod scanner;
mod solid;

use embassy_time::Instant;

pub use alternate::AlternatePattern;
pub use blink::BlinkPattern;
pub use chaos::ChaosPattern;
pub use chase::{ChasePattern, MAX_CHASE_COLORS};
pub use rainbow::RainbowPattern;
pub use scanner::ScannerPattern;
pub use solid::SolidPattern;

use crate::controller::SectionController;

const PATTERN_NAME_SOLID: &str = "solid";
const PATTERN_NAME_BLINK: &str = "blink";
const PATTERN_NAME_RAINBOW: &str = "rainbow";
const PATTERN_NAME_CHASE: &str = "chase";
const PATTERN_NAME_SCANNER: &str = "scanner";
const PATTERN_NAME_CHAOS: &str = "chaos";
const PATTERN_NAME_ALTERNATE: &str = "alternate";

/// A stateful visual effect bound to one section.
///
/// `advance` is called exactly once per tick with `first_run = true` on the
/// first invocation after assignment. The controller is valid only for the
/// duration of the call. Implementations must not block.
pub trait Pattern {
    /// Render one tick into the section.
    fn advance(&mut self, now: Instant, section: &mut SectionController<'_>, first_run: bool);
}

/// Pattern slot - enum containing all possible patterns
///
/// Equality compares configuration only (colors, periods, widths), never
/// runtime animation state; see [`SectionSlot::set_pattern`].
///
/// [`SectionSlot::set_pattern`]: crate::slot::SectionSlot::set_pattern
#[derive(Debug, Clone, PartialEq)]
pub enum PatternSlot {
    /// Solid single color
    Solid(SolidPattern),
    /// Timed on/off blink
    Blink(BlinkPattern),
    /// Hue cycle across the section
    Rainbow(RainbowPattern),
    /// Colored segments marching along the section
    Chase(ChasePattern),
    /// Blended eye scanning back and forth
    Scanner(ScannerPattern),
    /// Random colors drifting randomly
    Chaos(ChaosPattern),
    /// Alternating two-color blocks
    Alternate(AlternatePattern),
}

/// Known pattern ids for external observation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatternId {
    Solid,
    Blink,
    Rainbow,
    Chase,
    Scanner,
    Chaos,
    Alternate,
}

impl PatternId {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Solid => PATTERN_NAME_SOLID,
            Self::Blink => PATTERN_NAME_BLINK,
            Self::Rainbow => PATTERN_NAME_RAINBOW,
            Self::Chase => PATTERN_NAME_CHASE,
            Self::Scanner => PATTERN_NAME_SCANNER,
            Self::Chaos => PATTERN_NAME_CHAOS,
            Self::Alternate => PATTERN_NAME_ALTERNATE,
        }
    }
}

impl PatternSlot {
    /// Render the current pattern
    pub fn advance(
        &mut self,
        now: Instant,
        section: &mut SectionController<'_>,
        first_run: bool,
    ) {
        match self {
            Self::Solid(pattern) => pattern.advance(now, section, first_run),
            Self::Blink(pattern) => pattern.advance(now, section, first_run),
            Self::Rainbow(pattern) => pattern.advance(now, section, first_run),
            Self::Chase(pattern) => pattern.advance(now, section, first_run),
            Self::Scanner(pattern) => pattern.advance(now, section, first_run),
            Self::Chaos(pattern) => pattern.advance(now, section, first_run),
            Self::Alternate(pattern) => pattern.advance(now, section, first_run),
        }
    }

    /// Get the pattern ID for external observation
    pub fn id(&self) -> PatternId {
        match self {
            Self::Solid(_) => PatternId::Solid,
            Self::Blink(_) => PatternId::Blink,
            Self::Rainbow(_) => PatternId::Rainbow,
            Self::Chase(_) => PatternId::Chase,
            Self::Scanner(_) => PatternId::Scanner,
            Self::Chaos(_) => PatternId::Chaos,
            Self::Alternate(_) => PatternId::Alternate,
        }
    }
}
