//! Sparkle patterns
//!
//! Every loop clears the strip and lights a fresh set of random pixels.
//! The mini variant only keeps them lit for the first quarter of the loop.

use super::{Millis, Pattern, PatternConfig};
use crate::{color::BLACK, math8::scale_between, strip::PixelStrip};

const DURATION: Millis = 100;

#[derive(Debug, Clone, Default)]
pub struct SparklePattern {
    config: PatternConfig,
}

impl SparklePattern {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the strip and light a new set of random pixels
    ///
    /// The number of lit pixels scales with the first level. Black
    /// palette entries are replaced by a random color.
    fn sparkle<S: PixelStrip + ?Sized>(&self, strip: &mut S) {
        strip.fill(BLACK);
        let len = u32::try_from(strip.num_pixels()).unwrap_or(u32::MAX);
        if len == 0 {
            return;
        }

        for _ in 0..scale_between(1, len, self.level(0)) {
            let mut color = self.color(strip.random(3) as usize);
            if color == BLACK {
                color = strip.random_color();
            }
            let index = strip.random_index();
            strip.set_pixel(index, color);
        }
    }
}

impl Pattern for SparklePattern {
    fn config(&self) -> &PatternConfig {
        &self.config
    }

    fn config_mut(&mut self) -> &mut PatternConfig {
        &mut self.config
    }

    fn duration<S: PixelStrip + ?Sized>(&self, _strip: &S) -> Millis {
        DURATION
    }

    fn begin_loop<S: PixelStrip + ?Sized>(&mut self, strip: &mut S, offset: Millis) {
        self.sparkle(strip);
        self.update(strip, offset);
    }
}

/// Sparkle with a 25% duty cycle
#[derive(Debug, Clone, Default)]
pub struct MiniSparklePattern {
    inner: SparklePattern,
}

impl MiniSparklePattern {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Pattern for MiniSparklePattern {
    fn config(&self) -> &PatternConfig {
        self.inner.config()
    }

    fn config_mut(&mut self) -> &mut PatternConfig {
        self.inner.config_mut()
    }

    fn duration<S: PixelStrip + ?Sized>(&self, _strip: &S) -> Millis {
        DURATION
    }

    fn begin_loop<S: PixelStrip + ?Sized>(&mut self, strip: &mut S, offset: Millis) {
        self.inner.sparkle(strip);
        self.update(strip, offset);
    }

    fn update<S: PixelStrip + ?Sized>(&mut self, strip: &mut S, offset: Millis) {
        if offset > DURATION / 4 {
            strip.fill(BLACK);
        }
    }
}
