use crate::constants::{BLUE_OFFSET, CHANNEL_MASK, CHANNEL_SHIFT, GREEN_OFFSET, RED_OFFSET};

/// Packs an 8-bit-per-channel color into the DS 15-bit BGR555 layout.
///
/// Each channel keeps its top five bits; the low three are truncated, never
/// rounded. Red lands in bits 0-4, green in 5-9, blue in 10-14 and bit 15 is
/// left clear.
pub fn quantize_color(r: u8, g: u8, b: u8) -> u16 {
    (channel(r) << RED_OFFSET) | (channel(g) << GREEN_OFFSET) | (channel(b) << BLUE_OFFSET)
}

/// Quantizes an RGBA palette entry. Alpha is ignored.
pub fn quantize_rgba(color: &[u8; 4]) -> u16 {
    quantize_color(color[0], color[1], color[2])
}

fn channel(value: u8) -> u16 {
    (u16::from(value) >> CHANNEL_SHIFT) & CHANNEL_MASK
}
