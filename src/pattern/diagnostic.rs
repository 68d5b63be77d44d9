//! Diagnostic stripe
//!
//! Shows a numeric code as runs of `code` white pixels separated by three
//! dark ones. Not time driven.

use super::{Millis, Pattern, PatternConfig};
use crate::{
    color::{BLACK, WHITE},
    strip::PixelStrip,
};

const SPACE: usize = 3;

#[derive(Debug, Clone, Default)]
pub struct DiagnosticPattern {
    config: PatternConfig,
    code: u32,
}

impl DiagnosticPattern {
    pub fn new(code: u32) -> Self {
        Self {
            config: PatternConfig::default(),
            code,
        }
    }

    pub fn code(&self) -> u32 {
        self.code
    }
}

impl Pattern for DiagnosticPattern {
    fn config(&self) -> &PatternConfig {
        &self.config
    }

    fn config_mut(&mut self) -> &mut PatternConfig {
        &mut self.config
    }

    fn update<S: PixelStrip + ?Sized>(&mut self, strip: &mut S, _offset: Millis) {
        let code = usize::try_from(self.code).unwrap_or(usize::MAX);
        let period = code.saturating_add(SPACE);
        for (i, pixel) in strip.pixels_mut().iter_mut().enumerate() {
            *pixel = if i % period < code { WHITE } else { BLACK };
        }
    }
}
