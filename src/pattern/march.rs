//! March pattern
//!
//! Segments of the three colors crawl along the strip, one segment width
//! per color per loop. The first level sets the segment width in pixels.
//! The edges of each segment stay lit while the middle is dimmed, which
//! gives a soft marquee look.

use super::{Millis, Pattern, PatternConfig};
use crate::{color::fade_color, strip::PixelStrip};

const DURATION: Millis = 1000;

#[derive(Debug, Clone, Default)]
pub struct MarchPattern {
    config: PatternConfig,
}

impl MarchPattern {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fade factor for a pixel `position` pixels into a segment of `width`
    #[allow(clippy::cast_possible_truncation)]
    fn segment_fade(position: usize, width: usize) -> u8 {
        let half = width / 2;
        if half == 0 {
            return 0;
        }

        let mut distance = position;
        if distance > half {
            distance = width - distance;
        }
        let distance = if distance > width / 4 { distance / 2 } else { 0 };

        (distance * 255 / half).min(255) as u8
    }
}

impl Pattern for MarchPattern {
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
        let width = usize::from(self.level(0));
        if width == 0 {
            return;
        }

        // distance travelled through all three segments, counting down
        let span = width * 3;
        let shift = span - (offset.min(DURATION) as usize * span / DURATION as usize);

        let colors = self.config.colors;
        for (i, pixel) in strip.pixels_mut().iter_mut().enumerate() {
            let position = i + shift;
            let fade = Self::segment_fade(position % width, width);
            let color = colors[(position / width) % 3];
            *pixel = fade_color(color, fade);
        }
    }
}
