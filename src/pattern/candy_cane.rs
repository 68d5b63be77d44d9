//! Candy cane pattern
//!
//! Alternating stripes of the first two colors, swapping places halfway
//! through every loop.

use super::{Millis, Pattern, PatternConfig};
use crate::strip::PixelStrip;

const DURATION: Millis = 200;

#[derive(Debug, Clone, Default)]
pub struct CandyCanePattern {
    config: PatternConfig,
}

impl CandyCanePattern {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Pattern for CandyCanePattern {
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
        let phase = usize::from(offset < DURATION / 2);
        let colors = self.config.colors;
        for (i, pixel) in strip.pixels_mut().iter_mut().enumerate() {
            *pixel = colors[(phase + i % 2) % 3];
        }
    }
}
