mod gradient;
mod utils;

pub use gradient::{GRADIENT_CAPACITY, Gradient, GradientStep};
use smart_leds::{RGB8, hsv::Hsv as HSV};
pub use utils::{
    BLACK, GREEN, RED, WHITE, blend_colors, color_wheel, fade_color, hsv2rgb, rgb_from_u32,
    rgb_to_u32,
};

pub type Rgb = RGB8;
pub type Hsv = HSV;
