use log::{debug, error, info};

use super::{EncodeMode, EncodingError};
use crate::texture::TextureFormat;

/// Packs one group of indices into a byte, first index in the low bits.
fn pack(values: &[u8], bpp: u8) -> u8 {
    let mask = ((1u16 << bpp) - 1) as u8;
    values
        .iter()
        .enumerate()
        .fold(0u8, |byte, (i, &value)| byte | ((value & mask) << (i as u8 * bpp)))
}

/// Packs palette indices into DS texel data.
///
/// `8 / bpp` indices go into each output byte, the first one in the least
/// significant bits. Indices are masked to `bpp` bits. A trailing group that
/// does not fill a byte is dropped.
///
/// # Errors
/// - `EncodingError::UnsupportedFormat` for 16bpp and 4x4c
pub fn encode_pixels(indices: &[u8], format: TextureFormat) -> Result<Vec<u8>, EncodingError> {
    let bpp = match format {
        TextureFormat::Bpp16 | TextureFormat::Compressed4x4 => {
            error!("{} pixel conversion is not implemented", format);
            return Err(EncodingError::UnsupportedFormat {
                format,
                mode: EncodeMode::Pixels,
            });
        }
        _ => format.bits_per_pixel(),
    };

    let per_byte = usize::from(8 / bpp);
    let dropped = indices.len() % per_byte;
    if dropped != 0 {
        debug!("Dropping {} trailing indices that do not fill a byte", dropped);
    }

    let packed: Vec<u8> = indices
        .chunks_exact(per_byte)
        .map(|group| pack(group, bpp))
        .collect();

    info!(
        "Packed {} indices at {} bits into {} bytes",
        indices.len() - dropped,
        bpp,
        packed.len()
    );
    Ok(packed)
}
