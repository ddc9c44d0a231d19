use log::{debug, error, info};

use super::quantize::quantize_rgba;
use super::{EncodeMode, EncodingError};
use crate::constants::{PALETTE_CAPACITY, PALETTE_ENTRY_SIZE};
use crate::texture::TextureFormat;

/// A contiguous run of palette entries addressed by a texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteWindow {
    /// Index of the first palette entry in the window.
    pub offset: usize,
    /// Number of entries, always a power of two.
    pub len: usize,
}

impl PaletteWindow {
    /// Selects the part of a 256-entry palette `format` can address.
    ///
    /// The alpha formats only see the trailing `2^bits` entries; the leading
    /// entries belong to the alpha encoding.
    pub fn for_format(format: TextureFormat) -> Option<Self> {
        let len = format.palette_len()?;
        let offset = match format {
            TextureFormat::A3I5 | TextureFormat::A5I3 => PALETTE_CAPACITY - len,
            _ => 0,
        };
        Some(Self { offset, len })
    }

    /// The entries of `palette` that fall inside the window. May be shorter
    /// than the window, or empty, when the palette is short.
    pub fn select<'a>(&self, palette: &'a [[u8; 4]]) -> &'a [[u8; 4]] {
        let start = self.offset.min(palette.len());
        let end = (self.offset + self.len).min(palette.len());
        &palette[start..end]
    }
}

/// Encodes `palette` as the DS color table for `format`.
///
/// The table holds one little-endian 15-bit color per window entry, entry 0
/// first. Entries the palette does not provide are zero.
///
/// # Errors
/// - `EncodingError::UnsupportedFormat` for 16bpp (no palette) and 4x4c
///   (not implemented)
pub fn encode_palette(palette: &[[u8; 4]], format: TextureFormat) -> Result<Vec<u8>, EncodingError> {
    let window = PaletteWindow::for_format(format).ok_or_else(|| {
        error!("{} textures have no palette encoding", format);
        EncodingError::UnsupportedFormat {
            format,
            mode: EncodeMode::Palette,
        }
    })?;
    debug!(
        "Palette window for {}: offset={} len={}",
        format, window.offset, window.len
    );

    let colors = window.select(palette);
    if colors.len() < window.len {
        debug!(
            "Palette provides {} of {} window entries, zero filling the rest",
            colors.len(),
            window.len
        );
    }

    let mut encoded = vec![0u8; window.len * PALETTE_ENTRY_SIZE];
    for (entry, color) in encoded.chunks_exact_mut(PALETTE_ENTRY_SIZE).zip(colors) {
        entry.copy_from_slice(&quantize_rgba(color).to_le_bytes());
    }

    info!(
        "Encoded {} palette entries for {} ({} bytes)",
        window.len,
        format,
        encoded.len()
    );
    Ok(encoded)
}
