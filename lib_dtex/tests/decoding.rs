mod common;

use common::{gray_palette, grayscale_png, indexed_png, stepped_image};
use lib_dtex::{decode, DecodeError};
use png::BitDepth;

#[test]
fn test_decode_indexed_8bit() {
    let decoded = decode(&stepped_image()).unwrap();

    assert_eq!(decoded.width, 4);
    assert_eq!(decoded.height, 4);
    assert_eq!(decoded.palette, gray_palette());
    assert_eq!(decoded.pixels.len(), decoded.pixel_count());
    assert_eq!(decoded.pixels[0], 0);
    assert_eq!(decoded.pixels[15], 240);
}

#[test]
fn test_decode_indexed_2bit_unpacks() {
    let palette = vec![
        [0, 0, 0, 255],
        [255, 0, 0, 255],
        [0, 255, 0, 255],
        [0, 0, 255, 255],
    ];
    // 3 pixels per row, rows padded to a byte
    let data = [0b00_01_10_00, 0b11_10_01_00];
    let decoded = decode(&indexed_png(3, 2, BitDepth::Two, &palette, &data)).unwrap();

    assert_eq!(decoded.palette, palette);
    assert_eq!(decoded.pixels, vec![0, 1, 2, 3, 2, 1]);
}

#[test]
fn test_decode_transparency() {
    let palette = vec![[10, 20, 30, 0], [40, 50, 60, 128], [70, 80, 90, 255]];
    let decoded = decode(&indexed_png(1, 1, BitDepth::Eight, &palette, &[2])).unwrap();

    assert_eq!(decoded.palette, palette);
}

#[test]
fn test_decode_rejects_truecolor() {
    let result = decode(&grayscale_png());
    assert!(matches!(
        result,
        Err(DecodeError::UnsupportedSourceImage(png::ColorType::Grayscale))
    ));
}
