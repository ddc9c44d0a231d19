use std::io::Cursor;

use log::{debug, error, info};
use png::{BitDepth, ColorType, Transformations};
use thiserror::Error;

use super::format::IndexedImage;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("{0:?} images are not supported, the source must be paletted")]
    UnsupportedSourceImage(ColorType),
    #[error("Indexed image has no palette")]
    MissingPalette,
    #[error("Palette has {0} entries, at most 256 are supported")]
    PaletteTooLarge(usize),
    #[error("PNG decoding failed")]
    Png(#[from] png::DecodingError),
}

/// Decodes a paletted PNG into palette indices and RGBA palette colors.
///
/// Sub-byte bit depths are unpacked to one index per pixel. Palette alpha
/// comes from the `tRNS` chunk when present and is opaque otherwise.
///
/// # Errors
/// - `DecodeError::UnsupportedSourceImage` if the PNG is not indexed
/// - `DecodeError::MissingPalette` if an indexed PNG carries no `PLTE`
/// - `DecodeError::Png` for malformed PNG data
pub fn decode(encoded_data: &[u8]) -> Result<IndexedImage, DecodeError> {
    let mut decoder = png::Decoder::new(Cursor::new(encoded_data));
    // Keep palette indices as they are stored
    decoder.set_transformations(Transformations::IDENTITY);
    let mut reader = decoder.read_info()?;

    let color_type = reader.info().color_type;
    if color_type != ColorType::Indexed {
        error!("Source image is {:?}, expected an indexed image", color_type);
        return Err(DecodeError::UnsupportedSourceImage(color_type));
    }

    let palette = read_palette(reader.info())?;
    debug!("Palette size: {}", palette.len());

    let mut buffer = vec![0; reader.output_buffer_size()];
    let frame = reader.next_frame(&mut buffer)?;
    debug!(
        "Image dimensions read: width={} height={} bit_depth={:?}",
        frame.width, frame.height, frame.bit_depth
    );

    let pixels = unpack_rows(
        &buffer,
        frame.width as usize,
        frame.height as usize,
        frame.line_size,
        frame.bit_depth,
    );

    info!("Decoded {} pixels", pixels.len());
    Ok(IndexedImage::new(frame.width, frame.height, palette, pixels))
}

fn read_palette(info: &png::Info) -> Result<Vec<[u8; 4]>, DecodeError> {
    let rgb = info.palette.as_deref().ok_or_else(|| {
        error!("Indexed image is missing its PLTE chunk");
        DecodeError::MissingPalette
    })?;
    let alpha = info.trns.as_deref().unwrap_or(&[]);

    let palette: Vec<[u8; 4]> = rgb
        .chunks_exact(3)
        .enumerate()
        .map(|(i, color)| {
            let a = alpha.get(i).copied().unwrap_or(255);
            [color[0], color[1], color[2], a]
        })
        .collect();

    if palette.len() > IndexedImage::MAX_PALETTE_SIZE {
        error!("Palette has {} entries", palette.len());
        return Err(DecodeError::PaletteTooLarge(palette.len()));
    }
    Ok(palette)
}

/// Expands packed scanlines to one byte per pixel. Samples narrower than a
/// byte are stored most significant first.
fn unpack_rows(
    buffer: &[u8],
    width: usize,
    height: usize,
    line_size: usize,
    bit_depth: BitDepth,
) -> Vec<u8> {
    let depth = bit_depth as usize;
    let mask = ((1u16 << depth) - 1) as u8;
    let mut pixels = Vec::with_capacity(width * height);

    for row in buffer.chunks(line_size).take(height) {
        if depth == 8 {
            pixels.extend_from_slice(&row[..width]);
            continue;
        }
        for x in 0..width {
            let bit = x * depth;
            let shift = 8 - depth - bit % 8;
            pixels.push((row[bit / 8] >> shift) & mask);
        }
    }
    pixels
}
