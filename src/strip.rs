//! Strip core: section allocation and per-tick pattern driving.

use embassy_time::Instant;
use heapless::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::buffer::PixelBuffer;
use crate::color::Rgb;
use crate::command::{CommandReceiver, StripCommand};
use crate::controller::SectionController;
use crate::pattern::PatternSlot;
use crate::section::{AllocationError, Section};
use crate::slot::SectionSlot;

/// Capacity of the section table.
pub const MAX_SECTIONS: usize = 8;

/// Error returned when a section is not in the allocation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownSection;

/// A fixed-length strip of `LEDS` pixels partitioned into pattern sections.
///
/// The strip owns the pixel buffer and an insertion-ordered table of
/// allocated sections. Allocations never overlap unless a superseding
/// request explicitly evicted the conflicting ones. `CMDS` sizes the
/// cross-context command queue drained at the head of every tick.
pub struct Strip<'a, const LEDS: usize, const CMDS: usize> {
    buffer: PixelBuffer<LEDS>,
    slots: Vec<SectionSlot, MAX_SECTIONS>,
    default_section: Section,
    commands: CommandReceiver<'a, CMDS>,
}

impl<'a, const LEDS: usize, const CMDS: usize> Strip<'a, LEDS, CMDS> {
    /// Create a new strip.
    ///
    /// Panics if `LEDS < 2`; a strip must be able to hold at least one
    /// minimum-length section.
    pub fn new(commands: CommandReceiver<'a, CMDS>) -> Self {
        assert!(LEDS >= Section::MIN_LEN, "strip too short for a section");
        Self {
            buffer: PixelBuffer::new(),
            slots: Vec::new(),
            default_section: Section::whole(LEDS),
            commands,
        }
    }

    /// Number of pixels in the strip.
    pub const fn len(&self) -> usize {
        LEDS
    }

    pub const fn is_empty(&self) -> bool {
        false
    }

    /* -------- Section allocation -------- */

    /// Allocate a section covering the inclusive pixel range `[start, end]`.
    ///
    /// Bounds are validated against the strip (`start <= end <= LEDS - 1`,
    /// at least two pixels). Without `supersede`, any overlap with an
    /// existing allocation fails with [`AllocationError::Conflict`] and the
    /// table is left untouched. With `supersede`, every overlapping
    /// allocation is evicted first; the evicted patterns are discarded
    /// without notice, so patterns must be safe to abandon mid-animation.
    pub fn request_section(
        &mut self,
        start: usize,
        end: usize,
        supersede: bool,
    ) -> Result<Section, AllocationError> {
        let section = Section::try_new(start, end, LEDS)?;

        if supersede {
            self.evict_overlapping(section);
        } else if let Some(slot) = self.slots.iter().find(|s| s.section().overlaps(section)) {
            return Err(AllocationError::Conflict {
                existing: slot.section(),
            });
        }

        self.slots
            .push(SectionSlot::new(section))
            .map_err(|_| AllocationError::TableFull)?;
        Ok(section)
    }

    /// Remove every allocation overlapping `section`, keeping table order.
    fn evict_overlapping(&mut self, section: Section) {
        let slots = core::mem::take(&mut self.slots);
        for slot in slots {
            if slot.section().overlaps(section) {
                #[cfg(feature = "esp32-log")]
                println!(
                    "strip: superseding section [{}, {}]",
                    slot.section().start(),
                    slot.section().end()
                );
                continue;
            }
            // capacity unchanged, reinsert cannot fail
            let _ = self.slots.push(slot);
        }
    }

    /// Remove one allocation. Returns whether the section was present.
    pub fn release(&mut self, section: Section) -> bool {
        let before = self.slots.len();
        let slots = core::mem::take(&mut self.slots);
        for slot in slots {
            if slot.section() == section {
                continue;
            }
            let _ = self.slots.push(slot);
        }
        self.slots.len() != before
    }

    /// Remove all allocations and their patterns, and blank the strip.
    pub fn wipe(&mut self) {
        self.slots.clear();
        self.buffer.fill(Rgb::default());
    }

    /// Allocated sections in table (insertion) order.
    pub fn sections(&self) -> impl Iterator<Item = Section> + '_ {
        self.slots.iter().map(SectionSlot::section)
    }

    /// Number of allocated sections.
    pub fn section_count(&self) -> usize {
        self.slots.len()
    }

    /* -------- Pattern assignment -------- */

    /// Assign a pattern to an allocated section.
    ///
    /// Replacing a running pattern with a differently-configured one
    /// re-arms the slot (the next tick passes `first_run = true`);
    /// assigning an equally-configured pattern is a no-op.
    pub fn set_pattern(
        &mut self,
        section: Section,
        pattern: PatternSlot,
    ) -> Result<(), UnknownSection> {
        let slot = self.slot_mut(section)?;
        slot.set_pattern(pattern);
        Ok(())
    }

    /// Drop the pattern running on an allocated section.
    pub fn clear_pattern(&mut self, section: Section) -> Result<(), UnknownSection> {
        let slot = self.slot_mut(section)?;
        slot.clear_pattern();
        Ok(())
    }

    /// The slot backing an allocated section.
    pub fn slot(&self, section: Section) -> Option<&SectionSlot> {
        self.slots.iter().find(|s| s.section() == section)
    }

    fn slot_mut(&mut self, section: Section) -> Result<&mut SectionSlot, UnknownSection> {
        self.slots
            .iter_mut()
            .find(|s| s.section() == section)
            .ok_or(UnknownSection)
    }

    /* -------- Direct color surface (default whole-strip section) -------- */

    /// Get the color at an index, clamped into the strip.
    pub fn get(&self, index: usize) -> Rgb {
        self.buffer.get(self.default_section.clamp(index))
    }

    /// Set the color at an index, clamped into the strip.
    pub fn set(&mut self, index: usize, color: Rgb) {
        let index = self.default_section.clamp(index);
        self.buffer.set(index, color);
    }

    /// Set a closed index range to one color, both bounds clamped.
    pub fn set_range(&mut self, start: usize, end: usize, color: Rgb) {
        self.controller(self.default_section)
            .set_range(start, end, color);
    }

    /// Set the whole strip to one color.
    pub fn fill(&mut self, color: Rgb) {
        self.buffer.fill(color);
    }

    /// Set the whole strip to black.
    pub fn off(&mut self) {
        self.fill(Rgb::default());
    }

    /// A transient controller for a held section.
    ///
    /// The view is valid only for the current mutation; do not store it.
    pub fn controller(&mut self, section: Section) -> SectionController<'_> {
        SectionController::new(section, self.buffer.as_mut_slice())
    }

    /// Snapshot view of the composed pixel state.
    pub fn snapshot(&self) -> &[Rgb] {
        self.buffer.as_slice()
    }

    /* -------- Tick path -------- */

    /// Run one tick: drain pending commands, advance every slot's pattern
    /// in table order, and return the composed buffer snapshot.
    ///
    /// Each armed slot's pattern sees `first_run = true` exactly once.
    /// Callers flush the returned snapshot to their output sink.
    pub fn advance_all(&mut self, now: Instant) -> &[Rgb] {
        self.process_commands();

        for slot in &mut self.slots {
            slot.advance(now, self.buffer.as_mut_slice());
        }

        self.buffer.as_slice()
    }

    /// Drain the command queue (non-blocking).
    fn process_commands(&mut self) {
        let commands = self.commands;
        while let Ok(command) = commands.try_receive() {
            self.apply_command(command);
        }
    }

    fn apply_command(&mut self, command: StripCommand) {
        match command {
            StripCommand::SetPattern { section, pattern } => {
                if self.set_pattern(section, pattern).is_err() {
                    #[cfg(feature = "esp32-log")]
                    println!(
                        "strip: dropped pattern for unallocated section [{}, {}]",
                        section.start(),
                        section.end()
                    );
                }
            }
            StripCommand::ClearPattern { section } => {
                let _ = self.clear_pattern(section);
            }
            StripCommand::Fill { color } => self.fill(color),
            StripCommand::Wipe => self.wipe(),
        }
    }
}
