#![no_std]

pub mod color;
pub mod control;
pub mod frame_scheduler;
pub mod math8;
pub mod pattern;
pub mod player;
pub mod sequence;
pub mod strip;

pub use control::{ControlChannel, ControlEvent, ControlProcessor, ControlReceiver, ControlSender};
pub use frame_scheduler::{FRAME_MS, FrameResult, FrameScheduler, SchedulerConfig};
pub use pattern::{Millis, Pattern, PatternConfig, PatternId, PatternSlot, create_pattern};
pub use player::{Player, PlayerConfig, PlayerState};
pub use sequence::{Command, NOMINAL_SPEED, Sequence, StepSequence};
pub use strip::{FrameBuffer, PixelStrip};

pub use color::{Gradient, GradientStep, Hsv, Rgb};
pub use math8::{blend8, scale8};
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The frame scheduler is generic over this trait.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
