//! Fixed pattern
//!
//! Lights every third pixel in one color, moving to the next pixel group
//! and color three times per loop.

use super::{Millis, Pattern, PatternConfig};
use crate::{color::BLACK, strip::PixelStrip};

const DURATION: Millis = 750;
const STEPS: u32 = 3;

#[derive(Debug, Clone, Default)]
pub struct FixedPattern {
    config: PatternConfig,
}

impl FixedPattern {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Pattern for FixedPattern {
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
        let step = (STEPS * offset / DURATION) as usize;
        let color = self.color(step);
        for (i, pixel) in strip.pixels_mut().iter_mut().enumerate() {
            *pixel = if i % 3 == step { color } else { BLACK };
        }
    }
}
