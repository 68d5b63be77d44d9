//! Control events from outside the frame loop
//!
//! Network receivers and button handlers run in other contexts
//! (interrupts, tasks). They post [`ControlEvent`]s into a bounded
//! channel guarded by `critical-section`; the frame loop drains it with
//! a [`ControlProcessor`] so the player is only ever touched from one
//! place.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::player::Player;
use crate::sequence::Command;

/// Error returned when trying to send to a full channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrySendError<T>(pub T);

/// Error returned when trying to receive from an empty channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryReceiveError;

/// Something that should change what the player does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    /// A peer sent a pattern to play
    Command(Command),
    /// Skip to the next step, e.g. after a button press
    Advance,
}

/// A bounded queue shared between interrupt/task context and the frame loop
pub struct Channel<T, const SIZE: usize> {
    queue: Mutex<RefCell<Deque<T, SIZE>>>,
}

impl<T, const SIZE: usize> Channel<T, SIZE> {
    pub const fn new() -> Self {
        Self {
            queue: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Handle for producers; any number may exist
    pub const fn sender(&self) -> Sender<'_, T, SIZE> {
        Sender { channel: self }
    }

    /// Handle for the consumer
    pub const fn receiver(&self) -> Receiver<'_, T, SIZE> {
        Receiver { channel: self }
    }

    /// Queue a value, handing it back if the channel is full
    pub fn try_send(&self, value: T) -> Result<(), TrySendError<T>> {
        critical_section::with(|cs| {
            self.queue
                .borrow_ref_mut(cs)
                .push_back(value)
                .map_err(TrySendError)
        })
    }

    /// Take the oldest queued value
    pub fn try_receive(&self) -> Result<T, TryReceiveError> {
        critical_section::with(|cs| self.queue.borrow_ref_mut(cs).pop_front().ok_or(TryReceiveError))
    }

    /// Number of queued values
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.queue.borrow_ref(cs).len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T, const SIZE: usize> Default for Channel<T, SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy)]
pub struct Sender<'a, T, const SIZE: usize> {
    channel: &'a Channel<T, SIZE>,
}

impl<T, const SIZE: usize> Sender<'_, T, SIZE> {
    pub fn try_send(&self, value: T) -> Result<(), TrySendError<T>> {
        self.channel.try_send(value)
    }
}

#[derive(Clone, Copy)]
pub struct Receiver<'a, T, const SIZE: usize> {
    channel: &'a Channel<T, SIZE>,
}

impl<T, const SIZE: usize> Receiver<'_, T, SIZE> {
    pub fn try_receive(&self) -> Result<T, TryReceiveError> {
        self.channel.try_receive()
    }
}

/// Type alias for the control channel
pub type ControlChannel<const SIZE: usize> = Channel<ControlEvent, SIZE>;

/// Type alias for control sender
pub type ControlSender<'a, const SIZE: usize> = Sender<'a, ControlEvent, SIZE>;

/// Type alias for control receiver
pub type ControlReceiver<'a, const SIZE: usize> = Receiver<'a, ControlEvent, SIZE>;

/// Applies queued control events to a player
pub struct ControlProcessor<'a, const SIZE: usize> {
    events: ControlReceiver<'a, SIZE>,
}

impl<'a, const SIZE: usize> ControlProcessor<'a, SIZE> {
    pub const fn new(events: ControlReceiver<'a, SIZE>) -> Self {
        Self { events }
    }

    /// Drain all pending events onto `player` (non-blocking)
    ///
    /// Returns the number of events applied. A received command replaces
    /// the current sequence, so only the most recent one matters.
    pub fn process_pending(&mut self, player: &mut Player<'_>) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.events.try_receive() {
            match event {
                ControlEvent::Command(command) => {
                    #[cfg(feature = "esp32-log")]
                    println!("[control] command pattern={} speed={}", command.pattern, command.speed);
                    player.set_command(command);
                }
                ControlEvent::Advance => player.advance_sequence(),
            }
            applied += 1;
        }
        applied
    }
}
