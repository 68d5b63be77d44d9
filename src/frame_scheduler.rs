//! Frame scheduling and timing utilities.
//!
//! Provides portable frame pacing without async/await or platform-specific timers.
//! The caller is responsible for sleeping/waiting between frames.

use embassy_time::{Duration, Instant};

use crate::control::{ControlProcessor, ControlReceiver};
use crate::player::{Player, PlayerConfig};
use crate::sequence::{Command, Sequence};
use crate::strip::FrameBuffer;
use crate::OutputDriver;

/// Default frame rate (125 FPS).
pub const DEFAULT_FPS: u32 = 125;

/// Milliseconds per frame at the default frame rate.
pub const FRAME_MS: u64 = 1000 / DEFAULT_FPS as u64;

/// Default frame duration based on target FPS.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(FRAME_MS);

/// Scheduler configuration
#[derive(Debug, Clone, Copy)]
pub struct SchedulerConfig {
    /// Time between frames
    pub frame_duration: Duration,
    /// Played until a sequence or command is loaded
    pub idle: Command,
    pub player: PlayerConfig,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            frame_duration: DEFAULT_FRAME_DURATION,
            idle: Command::default(),
            player: PlayerConfig::default(),
        }
    }
}

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
    /// A new pattern started; send `player().command()` to peers.
    pub changed: bool,
}

/// Portable frame scheduler that manages timing without async.
///
/// This scheduler:
/// - Tracks frame timing with drift correction
/// - Applies queued control events to the player
/// - Runs the player and writes the frame to the output driver
/// - Returns timing info so the caller can sleep appropriately
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(driver, buffer, receiver, &config);
///
/// loop {
///     let now = get_current_time_ms();
///     let result = scheduler.tick(Instant::from_millis(now));
///     if result.changed {
///         broadcast(scheduler.player().command());
///     }
///
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis() as u64);
/// }
/// ```
pub struct FrameScheduler<'a, O: OutputDriver, const MAX_LEDS: usize, const CONTROL_CHANNEL_SIZE: usize>
{
    output: O,
    player: Player<'a>,
    buffer: FrameBuffer<MAX_LEDS>,
    control: ControlProcessor<'a, CONTROL_CHANNEL_SIZE>,
    next_frame: Instant,
    frame_duration: Duration,
}

impl<'a, O: OutputDriver, const MAX_LEDS: usize, const CONTROL_CHANNEL_SIZE: usize>
    FrameScheduler<'a, O, MAX_LEDS, CONTROL_CHANNEL_SIZE>
{
    /// Create a new frame scheduler playing the idle command.
    pub fn new(
        driver: O,
        buffer: FrameBuffer<MAX_LEDS>,
        events: ControlReceiver<'a, CONTROL_CHANNEL_SIZE>,
        config: &SchedulerConfig,
    ) -> Self {
        let mut player = Player::new(config.player);
        player.set_command(config.idle);
        Self {
            output: driver,
            player,
            buffer,
            control: ControlProcessor::new(events),
            next_frame: Instant::from_millis(0),
            frame_duration: config.frame_duration,
        }
    }

    /// Replace the playing sequence.
    pub fn set_sequence(&mut self, sequence: &'a dyn Sequence) {
        self.player.set_sequence(sequence);
    }

    /// Process one frame and return timing information.
    ///
    /// This method:
    /// 1. Applies drift correction if we've fallen too far behind
    /// 2. Applies pending control events
    /// 3. Updates the pattern and renders the current frame
    /// 4. Writes to the output driver
    /// 5. Returns the deadline for the next frame
    ///
    /// The caller is responsible for waiting until `next_deadline` before
    /// calling `tick` again.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        // If we've fallen more than two frames behind, reset to now
        // instead of bursting through the backlog
        let max_drift_ms = self.frame_duration.as_millis() * 2;
        if now.as_millis() > self.next_frame.as_millis() + max_drift_ms {
            self.next_frame = now;
        }

        self.control.process_pending(&mut self.player);

        let changed = self.player.update_pattern(now, &mut self.buffer);
        self.player.update_strip(now, &mut self.buffer);
        self.output.write(self.buffer.frame());

        self.next_frame += self.frame_duration;

        let sleep_duration = if self.next_frame.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_frame.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
            changed,
        }
    }

    /// Get a reference to the player.
    pub fn player(&self) -> &Player<'a> {
        &self.player
    }

    /// Get a mutable reference to the player.
    pub fn player_mut(&mut self) -> &mut Player<'a> {
        &mut self.player
    }

    /// Get a reference to the frame buffer.
    pub fn buffer(&self) -> &FrameBuffer<MAX_LEDS> {
        &self.buffer
    }

    /// Get a reference to the output driver.
    pub fn output(&self) -> &O {
        &self.output
    }
}
