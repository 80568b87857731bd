//! Section-to-pattern binding with first-run tracking.

use embassy_time::Instant;

use crate::color::Rgb;
use crate::controller::SectionController;
use crate::pattern::PatternSlot;
use crate::section::Section;

/// Binds one allocated [`Section`] to at most one active pattern.
///
/// The slot moves through three states: empty (advance is a no-op), armed
/// (a pattern was assigned but never advanced; the next advance passes
/// `first_run = true`) and running. Replacing the pattern re-arms the slot
/// unless the replacement equals the current pattern's configuration.
#[derive(Debug)]
pub struct SectionSlot {
    section: Section,
    pattern: Option<PatternSlot>,
    first_run: bool,
}

impl SectionSlot {
    pub(crate) fn new(section: Section) -> Self {
        Self {
            section,
            pattern: None,
            first_run: true,
        }
    }

    /// The section this slot drives.
    pub fn section(&self) -> Section {
        self.section
    }

    /// The currently assigned pattern, if any.
    pub fn pattern(&self) -> Option<&PatternSlot> {
        self.pattern.as_ref()
    }

    /// Whether the next advance will be a first run.
    pub fn is_armed(&self) -> bool {
        self.pattern.is_some() && self.first_run
    }

    /// Assign or replace the slot's pattern.
    ///
    /// Assigning a pattern equal to the current one (by configuration) is a
    /// no-op: the running pattern keeps its state and is not re-armed.
    pub fn set_pattern(&mut self, pattern: PatternSlot) {
        if self.pattern.as_ref() == Some(&pattern) {
            return;
        }
        self.pattern = Some(pattern);
        self.first_run = true;
    }

    /// Drop the assigned pattern; the slot becomes empty.
    pub fn clear_pattern(&mut self) {
        self.pattern = None;
        self.first_run = true;
    }

    /// Advance the assigned pattern by one tick, if any.
    pub(crate) fn advance(&mut self, now: Instant, pixels: &mut [Rgb]) {
        let Some(pattern) = self.pattern.as_mut() else {
            return;
        };
        let mut controller = SectionController::new(self.section, pixels);
        pattern.advance(now, &mut controller, self.first_run);
        self.first_run = false;
    }
}
