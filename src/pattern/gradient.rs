//! Gradient pattern
//!
//! Every pixel crossfades between two random samples of a gradient built
//! from the configured colors. Each loop the target sample becomes the
//! source and a new random target is picked, so pixels drift through the
//! gradient continuously.

use heapless::Vec;

use super::{Millis, Pattern, PatternConfig};
use crate::{
    color::{BLACK, Gradient, GradientStep, RED, Rgb, blend_colors},
    math8::progress8,
    strip::PixelStrip,
};

const DURATION: Millis = 1000;

/// Largest strip the sample maps cover
///
/// Pixels past this index render plain red.
pub const GRADIENT_MAP_CAPACITY: usize = 512;

/// Levels outside this open range select the evenly spaced gradient
const COMPRESSED_MIN: u8 = 6;
const COMPRESSED_MAX: u8 = 249;

#[derive(Debug, Clone, Default)]
pub struct GradientPattern {
    config: PatternConfig,
    gradient: Gradient,
    /// Sample index each pixel fades from
    from: Vec<u16, GRADIENT_MAP_CAPACITY>,
    /// Sample index each pixel fades to
    to: Vec<u16, GRADIENT_MAP_CAPACITY>,
}

impl GradientPattern {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gradient(&self) -> &Gradient {
        &self.gradient
    }

    /// Sample indices pixels currently fade from
    pub fn source_map(&self) -> &[u16] {
        &self.from
    }

    /// Sample indices pixels currently fade to
    pub fn target_map(&self) -> &[u16] {
        &self.to
    }

    /// Rebuild the gradient from the configured colors and levels
    ///
    /// A first level strictly between 6 and 249 compresses the three
    /// colors into `0..=level` and leaves the rest of the gradient black.
    fn build_gradient(&mut self) {
        let [first, second, third] = self.config.colors;
        let level = self.config.levels[0];

        if level > COMPRESSED_MIN && level < COMPRESSED_MAX {
            #[allow(clippy::cast_possible_truncation)]
            let two_thirds = (u16::from(level) * 2 / 3) as u8;
            self.gradient.set_steps(&[
                GradientStep::new(0, first),
                GradientStep::new(level / 3, second),
                GradientStep::new(two_thirds, third),
                GradientStep::new(level, first),
                GradientStep::new(level + 1, BLACK),
                GradientStep::new(255, BLACK),
            ]);
        } else {
            self.gradient.set_steps(&[
                GradientStep::new(0, first),
                GradientStep::new(85, second),
                GradientStep::new(170, third),
                GradientStep::new(255, first),
            ]);
        }
    }

    /// Reset both maps to the identity for a strip of `len` pixels
    #[allow(clippy::cast_possible_truncation)]
    fn reset_maps(&mut self, len: usize) {
        self.from.clear();
        self.to.clear();
        for i in 0..len.min(GRADIENT_MAP_CAPACITY) {
            let _ = self.from.push(i as u16);
            let _ = self.to.push(i as u16);
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn sample(&self, index: u16, len: usize) -> Rgb {
        self.gradient.color_at((usize::from(index) * 255 / len) as u8)
    }
}

impl Pattern for GradientPattern {
    fn config(&self) -> &PatternConfig {
        &self.config
    }

    fn config_mut(&mut self) -> &mut PatternConfig {
        &mut self.config
    }

    fn duration<S: PixelStrip + ?Sized>(&self, _strip: &S) -> Millis {
        DURATION
    }

    fn configure(&mut self, config: &PatternConfig) {
        self.config = *config;
        self.build_gradient();
    }

    fn init<S: PixelStrip + ?Sized>(&mut self, strip: &mut S, offset: Millis) {
        self.build_gradient();
        self.reset_maps(strip.num_pixels());
        self.begin_loop(strip, offset);
    }

    #[allow(clippy::cast_possible_truncation)]
    fn begin_loop<S: PixelStrip + ?Sized>(&mut self, strip: &mut S, offset: Millis) {
        let len = strip.num_pixels();
        if self.to.len() != len.min(GRADIENT_MAP_CAPACITY) {
            self.reset_maps(len);
        }

        for (from, to) in self.from.iter_mut().zip(self.to.iter_mut()) {
            *from = *to;
            *to = strip.random_index() as u16;
        }
        self.update(strip, offset);
    }

    fn update<S: PixelStrip + ?Sized>(&mut self, strip: &mut S, offset: Millis) {
        let len = strip.num_pixels();
        if len == 0 {
            return;
        }

        let amount = progress8(offset, DURATION);
        for (i, pixel) in strip.pixels_mut().iter_mut().enumerate() {
            *pixel = match (self.from.get(i), self.to.get(i)) {
                (Some(&from), Some(&to)) => {
                    blend_colors(self.sample(from, len), self.sample(to, len), amount)
                }
                _ => RED,
            };
        }
    }
}
