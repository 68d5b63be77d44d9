/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Blend two 8-bit values
#[inline]
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub const fn blend8(a: u8, b: u8, amount_of_b: u8) -> u8 {
    let delta = b as i16 - a as i16;

    let mut partial: u32 = (a as u32) << 16; // a * 65536
    partial = partial.wrapping_add(
        (delta as u32)
            .wrapping_mul(amount_of_b as u32)
            .wrapping_mul(257),
    ); // (b - a) * amount_of_b * 257
    partial = partial.wrapping_add(0x8000); // + 32768 for rounding

    (partial >> 16) as u8
}

/// Linear position of `level` (0-255) between `low` and `high`
///
/// `level == 0` yields `low`, `level == 255` yields `high`.
#[inline]
pub const fn scale_between(low: u32, high: u32, level: u8) -> u32 {
    if high <= low {
        return low;
    }
    low + (high - low) * level as u32 / 255
}

/// Calculate progress (0-255) of `elapsed` milliseconds through `duration`
#[allow(clippy::cast_possible_truncation)]
#[inline]
pub const fn progress8(elapsed: u32, duration: u32) -> u8 {
    if duration == 0 {
        return 0;
    }
    if elapsed >= duration {
        return 255;
    }

    ((elapsed as u64 * 255) / duration as u64) as u8
}
