//! Wipe pattern
//!
//! Three color bands, each as long as the strip, slide across it once per
//! loop. Every pixel fades in over the back half of its band.

use super::{Millis, Pattern, PatternConfig};
use crate::{color::fade_color, strip::PixelStrip};

const DURATION: Millis = 3000;

#[derive(Debug, Clone, Default)]
pub struct WipePattern {
    config: PatternConfig,
}

impl WipePattern {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Pattern for WipePattern {
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

        let span = len * 3;
        let shift = span - (offset.min(DURATION) as usize * span / DURATION as usize);

        let colors = self.config.colors;
        for (i, pixel) in strip.pixels_mut().iter_mut().enumerate() {
            let position = i + shift;
            let band = (position / len) % 3;
            let fade = ((position % len) * 255 / len) as u8;
            let fade = if fade < 128 { 0 } else { (fade - 128) * 2 };
            *pixel = fade_color(colors[band], fade);
        }
    }
}
