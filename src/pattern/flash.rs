//! Flash pattern
//!
//! Cycles the whole strip through the three colors. Each color gets a
//! double blink followed by a linear fade to black.

use super::{Millis, Pattern, PatternConfig};
use crate::{
    color::{BLACK, fade_color},
    strip::PixelStrip,
};

const DURATION: Millis = 4000;

/// Time units per loop, one hundred per color
const UNITS: u32 = 300;
const UNITS_PER_COLOR: u32 = 100;

#[derive(Debug, Clone, Default)]
pub struct FlashPattern {
    config: PatternConfig,
}

impl FlashPattern {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Pattern for FlashPattern {
    fn config(&self) -> &PatternConfig {
        &self.config
    }

    fn config_mut(&mut self) -> &mut PatternConfig {
        &mut self.config
    }

    fn duration<S: PixelStrip + ?Sized>(&self, _strip: &S) -> Millis {
        DURATION
    }

    #[allow(clippy::cast_possible_truncation)]
    fn update<S: PixelStrip + ?Sized>(&mut self, strip: &mut S, offset: Millis) {
        let t = offset * UNITS / DURATION;
        let unit = t % UNITS_PER_COLOR;
        let color = self.color((t / UNITS_PER_COLOR) as usize);

        match unit {
            0..=10 | 20..=30 => strip.fill(color),
            31..=60 => {
                let factor = ((60 - unit) * 255 / 30) as u8;
                strip.fill(fade_color(color, factor));
            }
            _ => strip.fill(BLACK),
        }
    }
}
