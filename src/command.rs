//! Cross-context command queue for a strip.
//!
//! Pattern assignments and color writes may originate from interrupt
//! handlers or other tasks while the tick context owns the strip. Rather
//! than locking the section table, outside contexts enqueue
//! [`StripCommand`]s here; the strip drains the queue at the start of every
//! tick, so the table is only ever touched from the tick context.
//!
//! Built on `critical-section` and a fixed-size `heapless::Deque`, making
//! it safe to use from interrupts on embedded targets.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::color::Rgb;
use crate::pattern::PatternSlot;
use crate::section::Section;

/// A deferred mutation applied by the strip at the next tick.
#[derive(Debug, Clone)]
pub enum StripCommand {
    /// Assign a pattern to an allocated section
    SetPattern {
        section: Section,
        pattern: PatternSlot,
    },
    /// Drop the pattern running on an allocated section
    ClearPattern { section: Section },
    /// Set every pixel of the strip to one color
    Fill { color: Rgb },
    /// Remove all allocations and blank the strip
    Wipe,
}

/// Error returned when trying to send to a full queue.
///
/// Carries the rejected command back to the caller.
#[derive(Debug, Clone)]
pub struct TrySendError(pub StripCommand);

/// Error returned when trying to receive from an empty queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryReceiveError;

/// A bounded, thread-safe command queue.
pub struct CommandChannel<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<StripCommand, SIZE>>>,
}

impl<const SIZE: usize> CommandChannel<SIZE> {
    /// Create a new empty queue.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a sender handle for this queue.
    ///
    /// Multiple senders can coexist; they share access to the same queue.
    pub const fn sender(&self) -> CommandSender<'_, SIZE> {
        CommandSender { channel: self }
    }

    /// Get the receiver handle the strip drains from.
    pub const fn receiver(&self) -> CommandReceiver<'_, SIZE> {
        CommandReceiver { channel: self }
    }

    fn try_send(&self, command: StripCommand) -> Result<(), TrySendError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(command).map_err(TrySendError)
        })
    }

    fn try_receive(&self) -> Result<StripCommand, TryReceiveError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.pop_front().ok_or(TryReceiveError)
        })
    }
}

impl<const SIZE: usize> Default for CommandChannel<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// A sender handle for a [`CommandChannel`].
///
/// Lightweight reference that can be cloned into any execution context.
#[derive(Clone, Copy)]
pub struct CommandSender<'a, const SIZE: usize> {
    channel: &'a CommandChannel<SIZE>,
}

impl<const SIZE: usize> CommandSender<'_, SIZE> {
    /// Try to enqueue a command.
    ///
    /// Returns `Err(TrySendError(command))` if the queue is full.
    pub fn try_send(&self, command: StripCommand) -> Result<(), TrySendError> {
        self.channel.try_send(command)
    }
}

/// A receiver handle for a [`CommandChannel`].
#[derive(Clone, Copy)]
pub struct CommandReceiver<'a, const SIZE: usize> {
    channel: &'a CommandChannel<SIZE>,
}

impl<const SIZE: usize> CommandReceiver<'_, SIZE> {
    /// Try to dequeue the oldest pending command.
    ///
    /// Returns `Err(TryReceiveError)` if the queue is empty.
    pub fn try_receive(&self) -> Result<StripCommand, TryReceiveError> {
        self.channel.try_receive()
    }
}
