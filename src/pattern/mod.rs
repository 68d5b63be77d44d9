//! Pattern system with compile-time known pattern variants
//!
//! All patterns are stored in an enum to avoid heap allocations.
//! Each pattern implements the `Pattern` trait.
//!
//! A pattern is driven in loops of [`Pattern::duration`] milliseconds.
//! The player calls [`Pattern::init_with`] once when the pattern is
//! created, [`Pattern::begin_loop`] each time a new loop starts and
//! [`Pattern::update`] on every other frame. Offsets handed to these
//! calls are always relative to the start of the current loop.

mod candy_cane;
mod diagnostic;
mod fixed;
mod flash;
mod gradient;
mod march;
mod rainbow;
mod sparkle;
mod strobe;
mod twinkle;
mod wipe;

pub use candy_cane::CandyCanePattern;
pub use diagnostic::DiagnosticPattern;
pub use fixed::FixedPattern;
pub use flash::FlashPattern;
pub use gradient::GradientPattern;
pub use march::MarchPattern;
pub use rainbow::RainbowPattern;
pub use sparkle::{MiniSparklePattern, SparklePattern};
pub use strobe::StrobePattern;
pub use twinkle::{MiniTwinklePattern, wrapping_delta};
pub use wipe::WipePattern;

use crate::{
    color::{GREEN, RED, Rgb, WHITE},
    strip::PixelStrip,
};

/// Time offset or duration in milliseconds
pub type Millis = u32;

/// Loop duration of patterns that do not define their own
pub const DEFAULT_DURATION: Millis = 40;

/// Code shown by the diagnostic pattern for unknown pattern ids
pub const UNKNOWN_PATTERN_CODE: u32 = 1;

const PATTERN_NAME_MINI_TWINKLE: &str = "mini_twinkle";
const PATTERN_NAME_MINI_SPARKLE: &str = "mini_sparkle";
const PATTERN_NAME_SPARKLE: &str = "sparkle";
const PATTERN_NAME_RAINBOW: &str = "rainbow";
const PATTERN_NAME_FLASH: &str = "flash";
const PATTERN_NAME_MARCH: &str = "march";
const PATTERN_NAME_WIPE: &str = "wipe";
const PATTERN_NAME_GRADIENT: &str = "gradient";
const PATTERN_NAME_FIXED: &str = "fixed";
const PATTERN_NAME_STROBE: &str = "strobe";
const PATTERN_NAME_CANDY_CANE: &str = "candy_cane";

const PATTERN_ID_MINI_TWINKLE: u8 = 0;
const PATTERN_ID_MINI_SPARKLE: u8 = 1;
const PATTERN_ID_SPARKLE: u8 = 2;
const PATTERN_ID_RAINBOW: u8 = 3;
const PATTERN_ID_FLASH: u8 = 4;
const PATTERN_ID_MARCH: u8 = 5;
const PATTERN_ID_WIPE: u8 = 6;
const PATTERN_ID_GRADIENT: u8 = 7;
const PATTERN_ID_FIXED: u8 = 8;
const PATTERN_ID_STROBE: u8 = 9;
const PATTERN_ID_CANDY_CANE: u8 = 10;

/// Colors and levels a pattern is configured with
///
/// Level semantics are pattern specific: segment width for march,
/// density for sparkle and twinkle, gradient compression for gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternConfig {
    pub colors: [Rgb; 3],
    pub levels: [u8; 3],
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            colors: [RED, WHITE, GREEN],
            levels: [0x80; 3],
        }
    }
}

pub trait Pattern {
    fn config(&self) -> &PatternConfig;

    fn config_mut(&mut self) -> &mut PatternConfig;

    /// Length of one loop; offsets never reach this value
    fn duration<S: PixelStrip + ?Sized>(&self, _strip: &S) -> Millis {
        DEFAULT_DURATION
    }

    /// Apply new colors and levels without restarting the pattern
    fn configure(&mut self, config: &PatternConfig) {
        *self.config_mut() = *config;
    }

    /// Configure the pattern and set up every pixel
    fn init_with<S: PixelStrip + ?Sized>(
        &mut self,
        strip: &mut S,
        config: &PatternConfig,
        offset: Millis,
    ) {
        self.configure(config);
        self.init(strip, offset);
    }

    /// Set up every pixel; the first frame always starts a loop
    fn init<S: PixelStrip + ?Sized>(&mut self, strip: &mut S, offset: Millis) {
        self.begin_loop(strip, offset);
    }

    /// Called once when a new loop starts
    fn begin_loop<S: PixelStrip + ?Sized>(&mut self, strip: &mut S, offset: Millis) {
        self.update(strip, offset);
    }

    /// Called on every frame within a loop
    fn update<S: PixelStrip + ?Sized>(&mut self, _strip: &mut S, _offset: Millis) {}

    /// Configured color, wrapping `index` over the three slots
    fn color(&self, index: usize) -> Rgb {
        self.config().colors[index % 3]
    }

    /// Configured level, wrapping `index` over the three slots
    fn level(&self, index: usize) -> u8 {
        self.config().levels[index % 3]
    }
}

/// Known pattern ids that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum PatternId {
    MiniTwinkle = PATTERN_ID_MINI_TWINKLE,
    MiniSparkle = PATTERN_ID_MINI_SPARKLE,
    Sparkle = PATTERN_ID_SPARKLE,
    Rainbow = PATTERN_ID_RAINBOW,
    Flash = PATTERN_ID_FLASH,
    March = PATTERN_ID_MARCH,
    Wipe = PATTERN_ID_WIPE,
    Gradient = PATTERN_ID_GRADIENT,
    Fixed = PATTERN_ID_FIXED,
    Strobe = PATTERN_ID_STROBE,
    CandyCane = PATTERN_ID_CANDY_CANE,
}

impl PatternId {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            PATTERN_ID_MINI_TWINKLE => Self::MiniTwinkle,
            PATTERN_ID_MINI_SPARKLE => Self::MiniSparkle,
            PATTERN_ID_SPARKLE => Self::Sparkle,
            PATTERN_ID_RAINBOW => Self::Rainbow,
            PATTERN_ID_FLASH => Self::Flash,
            PATTERN_ID_MARCH => Self::March,
            PATTERN_ID_WIPE => Self::Wipe,
            PATTERN_ID_GRADIENT => Self::Gradient,
            PATTERN_ID_FIXED => Self::Fixed,
            PATTERN_ID_STROBE => Self::Strobe,
            PATTERN_ID_CANDY_CANE => Self::CandyCane,
            _ => return None,
        })
    }

    pub const fn raw(self) -> u8 {
        self as u8
    }

    pub fn to_slot(self) -> PatternSlot {
        match self {
            Self::MiniTwinkle => PatternSlot::MiniTwinkle(MiniTwinklePattern::new()),
            Self::MiniSparkle => PatternSlot::MiniSparkle(MiniSparklePattern::new()),
            Self::Sparkle => PatternSlot::Sparkle(SparklePattern::new()),
            Self::Rainbow => PatternSlot::Rainbow(RainbowPattern::new()),
            Self::Flash => PatternSlot::Flash(FlashPattern::new()),
            Self::March => PatternSlot::March(MarchPattern::new()),
            Self::Wipe => PatternSlot::Wipe(WipePattern::new()),
            Self::Gradient => PatternSlot::Gradient(GradientPattern::new()),
            Self::Fixed => PatternSlot::Fixed(FixedPattern::new()),
            Self::Strobe => PatternSlot::Strobe(StrobePattern::new()),
            Self::CandyCane => PatternSlot::CandyCane(CandyCanePattern::new()),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MiniTwinkle => PATTERN_NAME_MINI_TWINKLE,
            Self::MiniSparkle => PATTERN_NAME_MINI_SPARKLE,
            Self::Sparkle => PATTERN_NAME_SPARKLE,
            Self::Rainbow => PATTERN_NAME_RAINBOW,
            Self::Flash => PATTERN_NAME_FLASH,
            Self::March => PATTERN_NAME_MARCH,
            Self::Wipe => PATTERN_NAME_WIPE,
            Self::Gradient => PATTERN_NAME_GRADIENT,
            Self::Fixed => PATTERN_NAME_FIXED,
            Self::Strobe => PATTERN_NAME_STROBE,
            Self::CandyCane => PATTERN_NAME_CANDY_CANE,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            PATTERN_NAME_MINI_TWINKLE => Some(Self::MiniTwinkle),
            PATTERN_NAME_MINI_SPARKLE => Some(Self::MiniSparkle),
            PATTERN_NAME_SPARKLE => Some(Self::Sparkle),
            PATTERN_NAME_RAINBOW => Some(Self::Rainbow),
            PATTERN_NAME_FLASH => Some(Self::Flash),
            PATTERN_NAME_MARCH => Some(Self::March),
            PATTERN_NAME_WIPE => Some(Self::Wipe),
            PATTERN_NAME_GRADIENT => Some(Self::Gradient),
            PATTERN_NAME_FIXED => Some(Self::Fixed),
            PATTERN_NAME_STROBE => Some(Self::Strobe),
            PATTERN_NAME_CANDY_CANE => Some(Self::CandyCane),
            _ => None,
        }
    }
}

/// Build the pattern for a raw pattern id
///
/// Unknown ids fall back to a diagnostic stripe instead of failing, so a
/// misconfigured device still shows something recognisable.
pub fn create_pattern(raw: u8) -> PatternSlot {
    match PatternId::from_raw(raw) {
        Some(id) => id.to_slot(),
        None => PatternSlot::Diagnostic(DiagnosticPattern::new(UNKNOWN_PATTERN_CODE)),
    }
}

/// Pattern slot - enum containing all possible patterns
#[derive(Debug, Clone)]
pub enum PatternSlot {
    /// Three-color flash bursts over the whole strip
    Flash(FlashPattern),
    /// Scrolling hue wheel
    Rainbow(RainbowPattern),
    /// Random pixels relit every loop
    Sparkle(SparklePattern),
    /// Sparkle with a short duty cycle
    MiniSparkle(MiniSparklePattern),
    /// Random pixels fading out continuously
    MiniTwinkle(MiniTwinklePattern),
    /// Soft segments marching along the strip
    March(MarchPattern),
    /// Color bands wiping across the strip
    Wipe(WipePattern),
    /// Crossfade between random gradient samples
    Gradient(GradientPattern),
    /// Whole-strip strobe cycling through the colors
    Strobe(StrobePattern),
    /// Every third pixel lit in turn
    Fixed(FixedPattern),
    /// Alternating two-color stripes
    CandyCane(CandyCanePattern),
    /// Error code stripe for unknown pattern ids
    Diagnostic(DiagnosticPattern),
}

macro_rules! dispatch {
    ($slot:expr, $pattern:ident => $body:expr) => {
        match $slot {
            PatternSlot::Flash($pattern) => $body,
            PatternSlot::Rainbow($pattern) => $body,
            PatternSlot::Sparkle($pattern) => $body,
            PatternSlot::MiniSparkle($pattern) => $body,
            PatternSlot::MiniTwinkle($pattern) => $body,
            PatternSlot::March($pattern) => $body,
            PatternSlot::Wipe($pattern) => $body,
            PatternSlot::Gradient($pattern) => $body,
            PatternSlot::Strobe($pattern) => $body,
            PatternSlot::Fixed($pattern) => $body,
            PatternSlot::CandyCane($pattern) => $body,
            PatternSlot::Diagnostic($pattern) => $body,
        }
    };
}

impl PatternSlot {
    /// Get the pattern ID for external observation
    ///
    /// The diagnostic fallback has no id of its own.
    pub fn id(&self) -> Option<PatternId> {
        Some(match self {
            Self::Flash(_) => PatternId::Flash,
            Self::Rainbow(_) => PatternId::Rainbow,
            Self::Sparkle(_) => PatternId::Sparkle,
            Self::MiniSparkle(_) => PatternId::MiniSparkle,
            Self::MiniTwinkle(_) => PatternId::MiniTwinkle,
            Self::March(_) => PatternId::March,
            Self::Wipe(_) => PatternId::Wipe,
            Self::Gradient(_) => PatternId::Gradient,
            Self::Strobe(_) => PatternId::Strobe,
            Self::Fixed(_) => PatternId::Fixed,
            Self::CandyCane(_) => PatternId::CandyCane,
            Self::Diagnostic(_) => return None,
        })
    }

    pub fn config(&self) -> &PatternConfig {
        dispatch!(self, pattern => pattern.config())
    }

    pub fn duration<S: PixelStrip + ?Sized>(&self, strip: &S) -> Millis {
        dispatch!(self, pattern => pattern.duration(strip))
    }

    pub fn configure(&mut self, config: &PatternConfig) {
        dispatch!(self, pattern => pattern.configure(config));
    }

    pub fn init_with<S: PixelStrip + ?Sized>(
        &mut self,
        strip: &mut S,
        config: &PatternConfig,
        offset: Millis,
    ) {
        dispatch!(self, pattern => pattern.init_with(strip, config, offset));
    }

    pub fn begin_loop<S: PixelStrip + ?Sized>(&mut self, strip: &mut S, offset: Millis) {
        dispatch!(self, pattern => pattern.begin_loop(strip, offset));
    }

    pub fn update<S: PixelStrip + ?Sized>(&mut self, strip: &mut S, offset: Millis) {
        dispatch!(self, pattern => pattern.update(strip, offset));
    }
}
