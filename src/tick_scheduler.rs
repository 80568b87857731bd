//! Tick scheduling and output flushing.
//!
//! Couples "a tick happened" 1:1 with "one pattern step per section and one
//! buffer flush". Exactly one driving style may be active at a time: either
//! the periodic path (`start` + `tick`) or the manual path (`step`). Both
//! entry points take `&mut self`, so two ticks can never run concurrently.
//! The caller is responsible for sleeping/waiting between periodic ticks.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::{OutputDriver, strip::Strip};

/// Default tick rate.
pub const DEFAULT_TICK_HZ: u32 = 50;

/// Default tick duration based on the default rate.
pub const DEFAULT_TICK_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_TICK_HZ as u64);

/// Error returned when a tick entry point is used under the wrong driver.
///
/// Racing the two driving styles would let two paths write the shared
/// buffer, so misuse fails loudly instead of being tolerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverMisuse {
    /// `step` was called while the periodic driver is running.
    PeriodicRunning,
    /// `tick` was called while the periodic driver is stopped.
    PeriodicStopped,
}

/// Result of a periodic tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickResult {
    /// The deadline for the next tick.
    pub next_deadline: Instant,
    /// How long to wait until the next tick (zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Drives a [`Strip`] at a fixed rate and flushes each snapshot to the
/// output driver.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = TickScheduler::new(strip, driver);
/// scheduler.start();
///
/// loop {
///     let result = scheduler.tick(Instant::from_millis(now_ms()))?;
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct TickScheduler<'a, O: OutputDriver, const LEDS: usize, const CMDS: usize> {
    output: O,
    strip: Strip<'a, LEDS, CMDS>,
    next_tick: Instant,
    tick_duration: Duration,
    running: bool,
    output_started: bool,
}

impl<'a, O: OutputDriver, const LEDS: usize, const CMDS: usize>
    TickScheduler<'a, O, LEDS, CMDS>
{
    /// Create a new scheduler at the default rate (50 Hz).
    pub fn new(strip: Strip<'a, LEDS, CMDS>, driver: O) -> Self {
        Self::with_tick_duration(strip, driver, DEFAULT_TICK_DURATION)
    }

    /// Create a new scheduler with a custom tick duration.
    pub fn with_tick_duration(
        strip: Strip<'a, LEDS, CMDS>,
        driver: O,
        tick_duration: Duration,
    ) -> Self {
        Self {
            output: driver,
            strip,
            next_tick: Instant::from_millis(0),
            tick_duration,
            running: false,
            output_started: false,
        }
    }

    /// Reconfigure the tick rate; takes effect from the next firing.
    pub fn set_rate(&mut self, hertz: u32) {
        let hertz = hertz.max(1);
        self.tick_duration = Duration::from_millis(1000 / u64::from(hertz));
    }

    /// The configured tick duration.
    pub fn tick_duration(&self) -> Duration {
        self.tick_duration
    }

    /// Whether the periodic driver is running.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Mark the periodic driver running.
    ///
    /// Implicitly starts the output if it was stopped. After this call only
    /// `tick` may drive the strip; `step` fails until `stop`.
    pub fn start(&mut self) {
        if !self.output_started {
            self.start_output();
        }
        self.running = true;
        #[cfg(feature = "esp32-log")]
        println!("tick: periodic driver started");
    }

    /// Halt the periodic driver. The output stays online.
    pub fn stop(&mut self) {
        self.running = false;
        #[cfg(feature = "esp32-log")]
        println!("tick: periodic driver stopped");
    }

    /// Bring the output driver online.
    pub fn start_output(&mut self) {
        self.output.start();
        self.output_started = true;
    }

    /// Take the output driver offline. Ticking is not stopped.
    pub fn stop_output(&mut self) {
        self.output.stop();
        self.output_started = false;
    }

    /// Periodic entry point: advance all sections, flush, and pace.
    ///
    /// This method:
    /// 1. Applies drift correction if we've fallen too far behind
    /// 2. Advances every section's pattern
    /// 3. Writes the composed snapshot to the output driver
    /// 4. Returns the deadline for the next tick
    ///
    /// Fails with [`DriverMisuse::PeriodicStopped`] unless `start` was
    /// called; nothing is advanced or written on failure.
    pub fn tick(&mut self, now: Instant) -> Result<TickResult, DriverMisuse> {
        if !self.running {
            return Err(DriverMisuse::PeriodicStopped);
        }

        // Drift correction: if we've fallen more than two periods behind,
        // skip the backlog instead of catching up in a burst.
        let max_drift_ms = self.tick_duration.as_millis() * 2;
        if now.as_millis() > self.next_tick.as_millis() + max_drift_ms {
            self.next_tick = now;
        }

        let snapshot = self.strip.advance_all(now);
        self.output.write(snapshot);

        self.next_tick += self.tick_duration;

        let sleep_duration = if self.next_tick.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_tick.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        Ok(TickResult {
            next_deadline: self.next_tick,
            sleep_duration,
        })
    }

    /// Manual entry point: one advance-and-flush cycle, no pacing.
    ///
    /// For callers that drive the strip from their own periodic context.
    /// Fails with [`DriverMisuse::PeriodicRunning`] while the periodic
    /// driver is active; nothing is advanced or written on failure.
    pub fn step(&mut self, now: Instant) -> Result<(), DriverMisuse> {
        if self.running {
            return Err(DriverMisuse::PeriodicRunning);
        }

        let snapshot = self.strip.advance_all(now);
        self.output.write(snapshot);
        Ok(())
    }

    /// Get a reference to the strip.
    pub fn strip(&self) -> &Strip<'a, LEDS, CMDS> {
        &self.strip
    }

    /// Get a mutable reference to the strip.
    pub fn strip_mut(&mut self) -> &mut Strip<'a, LEDS, CMDS> {
        &mut self.strip
    }
}
