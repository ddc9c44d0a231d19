pub mod palette;
pub mod pixel;
pub mod quantize;

use std::fmt;

use log::info;
use thiserror::Error;

use crate::texture::TextureFormat;

pub use palette::encode_palette;
pub use pixel::encode_pixels;
pub use quantize::quantize_color;

/// Which half of a texture is being produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeMode {
    /// Packed texel indices.
    Pixels,
    /// Packed 15-bit color table.
    Palette,
}

impl fmt::Display for EncodeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeMode::Pixels => f.write_str("pixel"),
            EncodeMode::Palette => f.write_str("palette"),
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum EncodingError {
    #[error("{format} has no {mode} encoding")]
    UnsupportedFormat {
        format: TextureFormat,
        mode: EncodeMode,
    },
}

/// Encodes either the palette or the texel indices of an indexed image.
pub fn encode(
    palette: &[[u8; 4]],
    indices: &[u8],
    format: TextureFormat,
    mode: EncodeMode,
) -> Result<Vec<u8>, EncodingError> {
    info!("Starting {} encoding to {}", mode, format);

    let encoded = match mode {
        EncodeMode::Pixels => encode_pixels(indices, format)?,
        EncodeMode::Palette => encode_palette(palette, format)?,
    };

    info!("Encoding completed: {} bytes", encoded.len());
    Ok(encoded)
}
