//! Twinkle pattern
//!
//! Pixels light up at random and fade out continuously. Fading and
//! lighting each track the last offset at which they did any work, so
//! slow frame rates or coarse levels still accumulate over time.

use super::{Millis, Pattern, PatternConfig};
use crate::{color::fade_color, math8::scale_between, strip::PixelStrip};

const DURATION: Millis = 1000;

/// Milliseconds from `previous` to `next` within a loop of `duration`
///
/// Offsets restart near zero every loop, so a `next` smaller than
/// `previous` means the loop wrapped in between.
pub const fn wrapping_delta(previous: Millis, next: Millis, duration: Millis) -> Millis {
    if next >= previous {
        next - previous
    } else {
        duration.saturating_sub(previous) + next
    }
}

#[derive(Debug, Clone, Default)]
pub struct MiniTwinklePattern {
    config: PatternConfig,
    last_dim: Millis,
    last_lit: Millis,
}

impl MiniTwinklePattern {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fade all pixels by the time passed since the last fade
    #[allow(clippy::cast_possible_truncation)]
    fn dim<S: PixelStrip + ?Sized>(&mut self, strip: &mut S, offset: Millis) {
        let elapsed = wrapping_delta(self.last_dim, offset, DURATION).min(DURATION);
        let dim = 255 - elapsed * 255 / DURATION;
        if dim < 255 {
            for pixel in strip.pixels_mut() {
                *pixel = fade_color(*pixel, dim as u8);
            }
            self.last_dim = offset;
        }
    }

    /// Light as many new pixels as the time since the last batch allows
    fn light<S: PixelStrip + ?Sized>(&mut self, strip: &mut S, offset: Millis) {
        let len = u32::try_from(strip.num_pixels()).unwrap_or(u32::MAX);
        if len == 0 {
            return;
        }

        let per_loop = u64::from(scale_between(1, len, self.level(0)));
        let elapsed = u64::from(wrapping_delta(self.last_lit, offset, DURATION));
        let todo = elapsed * per_loop / u64::from(DURATION);
        if todo == 0 {
            return;
        }

        for _ in 0..todo {
            let index = strip.random_index();
            let color = self.color(strip.random(3) as usize);
            strip.set_pixel(index, color);
        }
        self.last_lit = offset;
    }
}

impl Pattern for MiniTwinklePattern {
    fn config(&self) -> &PatternConfig {
        &self.config
    }

    fn config_mut(&mut self) -> &mut PatternConfig {
        &mut self.config
    }

    fn duration<S: PixelStrip + ?Sized>(&self, _strip: &S) -> Millis {
        DURATION
    }

    fn init<S: PixelStrip + ?Sized>(&mut self, strip: &mut S, offset: Millis) {
        self.last_dim = offset;
        self.last_lit = offset;
        self.begin_loop(strip, offset);
    }

    fn update<S: PixelStrip + ?Sized>(&mut self, strip: &mut S, offset: Millis) {
        self.dim(strip, offset);
        self.light(strip, offset);
    }
}
