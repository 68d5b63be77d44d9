//! Sequences of pattern steps and the command record shared with peers

use heapless::Vec;

use crate::{
    color::Rgb,
    pattern::{PatternConfig, PatternId},
};

/// Playback speed in percent that plays a pattern at its nominal rate
pub const NOMINAL_SPEED: u8 = 100;

/// One pattern step: what to play and how
///
/// This is also the record exchanged with peer devices to keep their
/// displays in sync. `speed` is a percentage of the nominal rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    pub pattern: u8,
    pub colors: [Rgb; 3],
    pub levels: [u8; 3],
    pub speed: u8,
}

impl Command {
    /// Command playing `pattern` with the given colors and levels at nominal speed
    pub const fn new(pattern: PatternId, colors: [Rgb; 3], levels: [u8; 3]) -> Self {
        Self {
            pattern: pattern as u8,
            colors,
            levels,
            speed: NOMINAL_SPEED,
        }
    }

    #[must_use]
    pub const fn with_speed(mut self, speed: u8) -> Self {
        self.speed = speed;
        self
    }

    pub const fn config(&self) -> PatternConfig {
        PatternConfig {
            colors: self.colors,
            levels: self.levels,
        }
    }
}

impl Default for Command {
    fn default() -> Self {
        let config = PatternConfig::default();
        Self {
            pattern: PatternId::Gradient as u8,
            colors: config.colors,
            levels: config.levels,
            speed: NOMINAL_SPEED,
        }
    }
}

/// Ordered list of steps the player walks through
///
/// Implementations must return the same step for an index for as long as
/// the player holds the sequence.
pub trait Sequence {
    /// Number of steps
    fn len(&self) -> usize;

    /// Step at `index`, with `index < len()`
    fn step(&self, index: usize) -> Command;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A single command plays as a one-step sequence
impl Sequence for Command {
    fn len(&self) -> usize {
        1
    }

    fn step(&self, _index: usize) -> Command {
        *self
    }
}

/// Fixed-capacity sequence
///
/// N is the maximum number of steps
#[derive(Debug, Clone, Default)]
pub struct StepSequence<const N: usize> {
    steps: Vec<Command, N>,
}

impl<const N: usize> StepSequence<N> {
    pub const fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Build a sequence from a slice, keeping at most N steps
    pub fn from_steps(steps: &[Command]) -> Self {
        let mut sequence = Self::new();
        for step in steps.iter().take(N) {
            let _ = sequence.push(*step);
        }
        sequence
    }

    /// Append a step
    ///
    /// Returns the step if the sequence is full
    pub fn push(&mut self, step: Command) -> Result<(), Command> {
        self.steps.push(step)
    }

    pub fn clear(&mut self) {
        self.steps.clear();
    }

    pub fn steps(&self) -> &[Command] {
        &self.steps
    }
}

impl<const N: usize> Sequence for StepSequence<N> {
    fn len(&self) -> usize {
        self.steps.len()
    }

    fn step(&self, index: usize) -> Command {
        self.steps.get(index).copied().unwrap_or_default()
    }
}
