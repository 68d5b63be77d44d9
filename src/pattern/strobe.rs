//! Strobe pattern
//!
//! The loop is split in thirds. The strip flashes the color of a third
//! on the first frame that lands in it and stays dark otherwise.

use super::{Millis, Pattern, PatternConfig};
use crate::{color::BLACK, strip::PixelStrip};

// 4Hz at 100% speed, 10Hz at 250% speed
const DURATION: Millis = 750;
const THIRD: Millis = DURATION / 3;

#[derive(Debug, Clone, Default)]
pub struct StrobePattern {
    config: PatternConfig,
    last_offset: Millis,
}

impl StrobePattern {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Pattern for StrobePattern {
    fn config(&self) -> &PatternConfig {
        &self.config
    }

    fn config_mut(&mut self) -> &mut PatternConfig {
        &mut self.config
    }

    fn duration<S: PixelStrip + ?Sized>(&self, _strip: &S) -> Millis {
        DURATION
    }

    fn update<S: PixelStrip + ?Sized>(&mut self, strip: &mut S, offset: Millis) {
        let third = offset / THIRD;
        if third == self.last_offset / THIRD {
            strip.fill(BLACK);
        } else {
            strip.fill(self.color(third as usize));
        }
        self.last_offset = offset;
    }
}
