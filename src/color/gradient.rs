//! Piecewise-linear color gradient over a 0-255 position axis

use heapless::Vec;

use crate::color::{BLACK, Rgb};

/// Maximum number of steps a [`Gradient`] can hold
pub const GRADIENT_CAPACITY: usize = 10;

/// A control point of a gradient
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientStep {
    pub position: u8,
    pub color: Rgb,
}

impl GradientStep {
    pub const fn new(position: u8, color: Rgb) -> Self {
        Self { position, color }
    }
}

/// Gradient built from an ordered list of steps
///
/// Steps must be added in non-decreasing position order; lookups
/// assume this ordering and never re-sort.
#[derive(Debug, Clone, Default)]
pub struct Gradient {
    steps: Vec<GradientStep, GRADIENT_CAPACITY>,
}

impl Gradient {
    pub const fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Remove all steps
    pub fn clear_steps(&mut self) {
        self.steps.clear();
    }

    /// Append a step
    ///
    /// Returns the step back if the gradient is already full. The step
    /// list is left untouched in that case.
    pub fn add_step(&mut self, position: u8, color: Rgb) -> Result<(), GradientStep> {
        self.steps.push(GradientStep::new(position, color))
    }

    /// Replace all steps, keeping at most [`GRADIENT_CAPACITY`] of them
    pub fn set_steps(&mut self, steps: &[GradientStep]) {
        self.steps.clear();
        for step in steps.iter().take(GRADIENT_CAPACITY) {
            let _ = self.steps.push(*step);
        }
    }

    pub fn steps(&self) -> &[GradientStep] {
        &self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Interpolated color at `position`
    ///
    /// Positions before the first or after the last step take that
    /// step's color. An empty gradient is black.
    pub fn color_at(&self, position: u8) -> Rgb {
        let (Some(first), Some(last)) = (self.steps.first(), self.steps.last()) else {
            return BLACK;
        };
        if position <= first.position {
            return first.color;
        }
        if position >= last.position {
            return last.color;
        }

        for pair in self.steps.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if a.position <= position && position <= b.position {
                return interpolate(a, b, position);
            }
        }
        last.color
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn interpolate(a: GradientStep, b: GradientStep, position: u8) -> Rgb {
    let span = i32::from(b.position) - i32::from(a.position);
    if span == 0 {
        return a.color;
    }
    let distance = i32::from(position) - i32::from(a.position);
    let channel = |from: u8, to: u8| -> u8 {
        let delta = i32::from(to) - i32::from(from);
        (i32::from(from) + delta * distance / span) as u8
    };

    Rgb {
        r: channel(a.color.r, b.color.r),
        g: channel(a.color.g, b.color.g),
        b: channel(a.color.b, b.color.b),
    }
}
