//! Pixel buffer surface patterns render into.

use crate::color::{BLACK, Rgb, rgb_from_u32};

/// Mutable view over an LED strip's pixels
///
/// Patterns only ever talk to the strip through this trait. Index
/// accessors are bounds-safe: reads outside the strip return black and
/// writes outside the strip are ignored.
pub trait PixelStrip {
    /// Pixels currently on the strip
    fn pixels(&self) -> &[Rgb];

    /// Mutable access to the pixels
    fn pixels_mut(&mut self) -> &mut [Rgb];

    /// Uniform random integer in `0..bound`, 0 when `bound` is 0
    fn random(&mut self, bound: u32) -> u32;

    /// Number of pixels on the strip
    fn num_pixels(&self) -> usize {
        self.pixels().len()
    }

    /// Color of pixel `index`
    fn pixel(&self, index: usize) -> Rgb {
        self.pixels().get(index).copied().unwrap_or(BLACK)
    }

    /// Set the color of pixel `index`
    fn set_pixel(&mut self, index: usize, color: Rgb) {
        if let Some(pixel) = self.pixels_mut().get_mut(index) {
            *pixel = color;
        }
    }

    /// Paint every pixel with one color
    fn fill(&mut self, color: Rgb) {
        self.pixels_mut().fill(color);
    }

    /// Random index of a pixel on the strip
    fn random_index(&mut self) -> usize {
        let bound = u32::try_from(self.num_pixels()).unwrap_or(u32::MAX);
        self.random(bound) as usize
    }

    /// Random 24-bit color
    fn random_color(&mut self) -> Rgb {
        rgb_from_u32(self.random(0x0100_0000))
    }
}

/// Fixed-capacity frame buffer
///
/// `N` is the capacity; the active strip length may be shorter.
#[derive(Debug, Clone)]
pub struct FrameBuffer<const N: usize> {
    pixels: [Rgb; N],
    len: usize,
    rng: fastrand::Rng,
}

impl<const N: usize> FrameBuffer<N> {
    /// Create a buffer using the full capacity
    pub fn new(seed: u64) -> Self {
        Self::with_len(N, seed)
    }

    /// Create a buffer with `len` active pixels (clamped to `N`)
    pub fn with_len(len: usize, seed: u64) -> Self {
        Self {
            pixels: [BLACK; N],
            len: len.min(N),
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    /// Change the active strip length (clamped to `N`)
    pub fn set_len(&mut self, len: usize) {
        self.len = len.min(N);
    }

    /// Current frame, ready to be written out
    pub fn frame(&self) -> &[Rgb] {
        &self.pixels[..self.len]
    }
}

impl<const N: usize> PixelStrip for FrameBuffer<N> {
    fn pixels(&self) -> &[Rgb] {
        &self.pixels[..self.len]
    }

    fn pixels_mut(&mut self) -> &mut [Rgb] {
        &mut self.pixels[..self.len]
    }

    fn random(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        self.rng.u32(0..bound)
    }
}
