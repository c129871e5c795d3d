//! sRGB transfer curve
//!
//! Decoding only: 8-bit inputs go through a 256-entry table generated by
//! build.rs, float inputs use the IEC 61966-2-1 formula directly.

include!(concat!(env!("OUT_DIR"), "/gamma_lut.rs"));

/// Decode an 8-bit sRGB channel to linear light.
#[inline]
pub fn srgb8_to_linear(value: u8) -> f32 {
    SRGB8_TO_LINEAR[value as usize]
}

/// Decode a normalized sRGB channel (0.0..=1.0) to linear light.
///
/// Inputs outside the unit range are clamped.
#[inline]
pub fn srgb_to_linear(srgb: f32) -> f32 {
    let srgb = srgb.clamp(0.0, 1.0);
    if srgb <= 0.04045 {
        srgb / 12.92
    } else {
        ((srgb + 0.055) / 1.055).powf(2.4)
    }
}
