#![no_std]

pub mod buffer;
pub mod color;
pub mod command;
pub mod controller;
pub mod math8;
pub mod pattern;
pub mod section;
pub mod slot;
pub mod strip;
pub mod tick_scheduler;

pub use buffer::PixelBuffer;
pub use command::{
    CommandChannel, CommandReceiver, CommandSender, StripCommand, TryReceiveError, TrySendError,
};
pub use controller::SectionController;
pub use pattern::{
    AlternatePattern, BlinkPattern, ChaosPattern, ChasePattern, Pattern, PatternId, PatternSlot,
    RainbowPattern, ScannerPattern, SolidPattern,
};
pub use section::{AllocationError, InvalidRange, Section};
pub use slot::SectionSlot;
pub use strip::{MAX_SECTIONS, Strip, UnknownSection};
pub use tick_scheduler::{DEFAULT_TICK_HZ, DriverMisuse, TickResult, TickScheduler};

pub use color::{Hsv, Rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract LED output driver trait
///
/// Implement this trait to push composed strip snapshots to real or
/// simulated hardware. The scheduler is generic over this trait and calls
/// `write` exactly once per tick.
///
/// Hardware controllers that can drive only one physical strip should
/// enforce that in their own constructor (warn or refuse on a second
/// instance); the strip core does not track driver instances.
pub trait OutputDriver {
    /// Bring the output online
    fn start(&mut self) {}

    /// Take the output offline
    fn stop(&mut self) {}

    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
