use std::fs;
use std::io;
use std::path::Path;

use log::{debug, info};
use thiserror::Error;

use crate::encoding::{self, EncodeMode, EncodingError};
use crate::image::{decode, DecodeError, IndexedImage};
use crate::texture::TextureFormat;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Encoding(#[from] EncodingError),
}

/// Converts a decoded image to texel data or to its palette table.
pub fn convert_image(
    image: &IndexedImage,
    format: TextureFormat,
    mode: EncodeMode,
) -> Result<Vec<u8>, ConvertError> {
    debug!(
        "Converting {}x{} image with {} colors",
        image.width,
        image.height,
        image.palette.len()
    );
    Ok(encoding::encode(&image.palette, &image.pixels, format, mode)?)
}

/// Reads a paletted PNG from `input` and writes the converted data to
/// `output`. Nothing is written unless the conversion succeeds.
pub fn convert_file(
    input: &Path,
    output: &Path,
    format: TextureFormat,
    mode: EncodeMode,
) -> Result<(), ConvertError> {
    info!("Converting {} to {} ({})", input.display(), format, mode);

    let encoded_data = fs::read(input)?;
    let image = decode(&encoded_data)?;
    let converted = convert_image(&image, format, mode)?;

    fs::write(output, &converted)?;
    info!("Wrote {} bytes to {}", converted.len(), output.display());
    Ok(())
}
