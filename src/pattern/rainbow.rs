//! Rainbow pattern
//!
//! Spreads the hue wheel along the strip and scrolls it once per loop.

use super::{Millis, Pattern, PatternConfig};
use crate::{color::color_wheel, math8::progress8, strip::PixelStrip};

const DURATION: Millis = 2000;

#[derive(Debug, Clone, Default)]
pub struct RainbowPattern {
    config: PatternConfig,
}

impl RainbowPattern {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Pattern for RainbowPattern {
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
        let len = strip.num_pixels();
        if len == 0 {
            return;
        }

        let shift = 255 - u16::from(progress8(offset, DURATION));
        for (i, pixel) in strip.pixels_mut().iter_mut().enumerate() {
            let position = (i * 255 / len) as u16;
            *pixel = color_wheel(((position + shift) % 255) as u8);
        }
    }
}
