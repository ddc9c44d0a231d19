#![allow(dead_code)]

use png::{BitDepth, ColorType};

/// 256-entry palette where entry `i` is gray level `i`.
pub fn gray_palette() -> Vec<[u8; 4]> {
    (0..=255u8).map(|i| [i, i, i, 255]).collect()
}

/// Encodes packed scanlines as an indexed PNG.
pub fn indexed_png(
    width: u32,
    height: u32,
    depth: BitDepth,
    palette: &[[u8; 4]],
    data: &[u8],
) -> Vec<u8> {
    let rgb: Vec<u8> = palette.iter().flat_map(|c| [c[0], c[1], c[2]]).collect();
    let alpha: Vec<u8> = palette.iter().map(|c| c[3]).collect();

    let mut bytes = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut bytes, width, height);
        encoder.set_color(ColorType::Indexed);
        encoder.set_depth(depth);
        encoder.set_palette(rgb);
        if alpha.iter().any(|&a| a != 255) {
            encoder.set_trns(alpha);
        }
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(data).unwrap();
        writer.finish().unwrap();
    }
    bytes
}

/// 4x4 8-bit indexed PNG with pixel `i` set to index `i * 16`.
pub fn stepped_image() -> Vec<u8> {
    let data: Vec<u8> = (0..16u8).map(|i| i * 16).collect();
    indexed_png(4, 4, BitDepth::Eight, &gray_palette(), &data)
}

pub fn grayscale_png() -> Vec<u8> {
    let mut bytes = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut bytes, 2, 2);
        encoder.set_color(ColorType::Grayscale);
        encoder.set_depth(BitDepth::Eight);
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(&[0, 64, 128, 255]).unwrap();
        writer.finish().unwrap();
    }
    bytes
}
