//! Sequence player
//!
//! Walks through the steps of a [`Sequence`], owns the pattern of the
//! active step and drives it once per frame.
//!
//! Each frame the caller runs [`Player::update_pattern`] followed by
//! [`Player::update_strip`]. The first decides which step and pattern are
//! active and reports whether peers need to be told about a new pattern.
//! The second renders the active pattern into the strip.

use embassy_time::Instant;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::pattern::{Millis, PatternConfig, PatternId, PatternSlot, create_pattern};
use crate::sequence::{Command, NOMINAL_SPEED, Sequence};
use crate::strip::PixelStrip;

/// Player configuration
#[derive(Debug, Clone, Copy)]
pub struct PlayerConfig {
    /// Speed in percent used until the first step is loaded
    pub speed: u8,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            speed: NOMINAL_SPEED,
        }
    }
}

/// Whether the player has something to play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    /// No sequence loaded, or the loaded sequence has no steps
    Unset,
    /// A pattern is running
    Active,
}

/// Where the steps come from
#[derive(Clone, Copy)]
enum SequenceSource<'s> {
    /// Sequence owned by the caller
    Shared(&'s dyn Sequence),
    /// Command received from a peer, played as a single step
    Remote(Command),
}

impl SequenceSource<'_> {
    fn len(&self) -> usize {
        match self {
            Self::Shared(sequence) => sequence.len(),
            Self::Remote(command) => command.len(),
        }
    }

    fn step(&self, index: usize) -> Command {
        match self {
            Self::Shared(sequence) => sequence.step(index),
            Self::Remote(command) => *command,
        }
    }
}

/// Plays the steps of a sequence, one pattern at a time
pub struct Player<'s> {
    sequence: Option<SequenceSource<'s>>,
    /// Index of the active step
    step: usize,
    /// When the active step started; origin of the pattern's loops
    step_time: Instant,
    /// Start the active step over on the next `update_pattern`
    restart_step: bool,
    /// Rebuild the pattern on the next `update_pattern` even if the id matches
    rebuild_pattern: bool,

    pattern: Option<PatternSlot>,
    pattern_id: u8,
    config: PatternConfig,
    speed: u8,
    last_update: Instant,
}

impl<'s> Player<'s> {
    pub fn new(config: PlayerConfig) -> Self {
        Self {
            sequence: None,
            step: 0,
            step_time: Instant::from_millis(0),
            restart_step: false,
            rebuild_pattern: false,
            pattern: None,
            pattern_id: PatternId::Gradient.raw(),
            config: PatternConfig::default(),
            speed: config.speed,
            last_update: Instant::from_millis(0),
        }
    }

    /// Replace the sequence and start again from its first step
    pub fn set_sequence(&mut self, sequence: &'s dyn Sequence) {
        self.load(SequenceSource::Shared(sequence));
    }

    /// Play a command received from a peer as a one-step sequence
    pub fn set_command(&mut self, command: Command) {
        self.load(SequenceSource::Remote(command));
    }

    fn load(&mut self, source: SequenceSource<'s>) {
        self.sequence = Some(source);
        self.step = 0;
        self.restart_step = true;
        self.rebuild_pattern = true;
    }

    /// Skip to the next step regardless of how long the current one ran
    pub fn advance_sequence(&mut self) {
        let len = self.sequence_len();
        if len == 0 {
            return;
        }
        self.step = (self.step + 1) % len;
        self.restart_step = true;
    }

    pub fn state(&self) -> PlayerState {
        if self.pattern.is_some() && self.sequence_len() > 0 {
            PlayerState::Active
        } else {
            PlayerState::Unset
        }
    }

    pub fn sequence_len(&self) -> usize {
        self.sequence.as_ref().map_or(0, SequenceSource::len)
    }

    /// Index of the active step
    pub fn step(&self) -> usize {
        self.step
    }

    /// Speed of the active step in percent
    pub fn speed(&self) -> u8 {
        self.speed
    }

    pub fn pattern(&self) -> Option<&PatternSlot> {
        self.pattern.as_ref()
    }

    /// Raw id of the active pattern
    pub fn pattern_id(&self) -> Option<u8> {
        self.pattern.as_ref().map(|_| self.pattern_id)
    }

    /// Instant of the last rendered frame
    pub fn last_update(&self) -> Instant {
        self.last_update
    }

    /// Command describing what is playing, for transmission to peers
    ///
    /// Returns None if no pattern is active
    pub fn command(&self) -> Option<Command> {
        self.pattern.as_ref()?;
        Some(Command {
            pattern: self.pattern_id,
            colors: self.config.colors,
            levels: self.config.levels,
            speed: self.speed,
        })
    }

    /// Move to the next step if the active one expired and apply its settings
    ///
    /// Returns true if a new pattern was created, which peers need to hear
    /// about.
    pub fn update_pattern<S: PixelStrip + ?Sized>(&mut self, now: Instant, strip: &mut S) -> bool {
        let len = self.sequence_len();
        if len == 0 {
            self.pattern = None;
            return false;
        }

        if self.restart_step {
            self.restart_step = false;
            self.step %= len;
            self.step_time = now;
        } else if let Some(pattern) = &self.pattern {
            let duration = u64::from(pattern.duration(&*strip));
            if self.scaled_elapsed(now) >= duration {
                self.step = (self.step + 1) % len;
                self.step_time = now;
                #[cfg(feature = "esp32-log")]
                println!("[player] step {} of {}", self.step, len);
            }
        }

        let Some(command) = self.sequence.as_ref().map(|source| source.step(self.step)) else {
            return false;
        };
        self.speed = command.speed;
        let config = command.config();

        if self.rebuild_pattern || self.pattern.is_none() || command.pattern != self.pattern_id {
            self.rebuild_pattern = false;
            // the previous pattern goes away before the next one is built
            self.pattern = None;
            let mut pattern = create_pattern(command.pattern);
            pattern.init_with(strip, &config, 0);

            #[cfg(feature = "esp32-log")]
            println!(
                "[player] pattern {}",
                PatternId::from_raw(command.pattern).map_or("diagnostic", PatternId::as_str)
            );

            self.pattern = Some(pattern);
            self.pattern_id = command.pattern;
            self.config = config;
            self.step_time = now;
            // init already rendered the first loop
            self.last_update = now;
            return true;
        }

        if config != self.config {
            if let Some(pattern) = self.pattern.as_mut() {
                pattern.configure(&config);
            }
            self.config = config;
        }
        false
    }

    /// Render the active pattern for `now`
    ///
    /// Starts a new loop of the pattern when the scaled step time crossed a
    /// loop boundary since the previous frame, otherwise updates it.
    pub fn update_strip<S: PixelStrip + ?Sized>(&mut self, now: Instant, strip: &mut S) {
        let elapsed = self.scaled_elapsed(now);
        let previous = (self.last_update >= self.step_time)
            .then(|| self.scaled_elapsed(self.last_update));
        self.last_update = now;

        let Some(pattern) = self.pattern.as_mut() else {
            return;
        };
        let duration = u64::from(pattern.duration(&*strip).max(1));

        #[allow(clippy::cast_possible_truncation)]
        let offset = (elapsed % duration) as Millis;
        let started_loop = previous.is_none_or(|previous| previous / duration != elapsed / duration);
        if started_loop {
            pattern.begin_loop(strip, offset);
        } else {
            pattern.update(strip, offset);
        }
    }

    /// Milliseconds since the step started, scaled by speed
    fn scaled_elapsed(&self, now: Instant) -> u64 {
        let elapsed = now.saturating_duration_since(self.step_time).as_millis();
        elapsed * u64::from(self.speed) / u64::from(NOMINAL_SPEED)
    }
}
