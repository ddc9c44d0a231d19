use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FormatParseError {
    #[error("unknown texture format \"{0}\" (expected one of 2bpp, 4bpp, 8bpp, 16bpp, a3i5, a5i3, 4x4c)")]
    UnknownFormat(String),
}

/// Texture encodings understood by the DS 3D engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureFormat {
    /// 4-color palette, 2 bits per texel.
    Bpp2,
    /// 16-color palette, 4 bits per texel.
    Bpp4,
    /// 256-color palette, 8 bits per texel.
    Bpp8,
    /// Direct color, no palette.
    Bpp16,
    /// 3-bit alpha, 5-bit palette index.
    A3I5,
    /// 5-bit alpha, 3-bit palette index.
    A5I3,
    /// 4x4 texel block compression. Recognized but not implemented.
    Compressed4x4,
}

impl TextureFormat {
    pub const ALL: [TextureFormat; 7] = [
        TextureFormat::Bpp2,
        TextureFormat::Bpp4,
        TextureFormat::Bpp8,
        TextureFormat::Bpp16,
        TextureFormat::A3I5,
        TextureFormat::A5I3,
        TextureFormat::Compressed4x4,
    ];

    /// Storage width of one texel in the packed texture.
    ///
    /// The alpha formats store alpha and index together in a full byte, so
    /// they report 8 here. Their palette width is [`Self::palette_index_bits`].
    pub const fn bits_per_pixel(self) -> u8 {
        match self {
            TextureFormat::Bpp2 => 2,
            TextureFormat::Bpp4 => 4,
            TextureFormat::Bpp8 => 8,
            TextureFormat::Bpp16 => 16,
            TextureFormat::A3I5 => 8,
            TextureFormat::A5I3 => 8,
            TextureFormat::Compressed4x4 => 2,
        }
    }

    /// Width of the palette index, or `None` when the format has no palette
    /// encoding.
    pub const fn palette_index_bits(self) -> Option<u8> {
        match self {
            TextureFormat::Bpp2 | TextureFormat::Bpp4 | TextureFormat::Bpp8 => {
                Some(self.bits_per_pixel())
            }
            TextureFormat::A3I5 => Some(5),
            TextureFormat::A5I3 => Some(3),
            TextureFormat::Bpp16 | TextureFormat::Compressed4x4 => None,
        }
    }

    /// Number of entries in the encoded palette table.
    pub const fn palette_len(self) -> Option<usize> {
        match self.palette_index_bits() {
            Some(bits) => Some(1 << bits),
            None => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            TextureFormat::Bpp2 => "2bpp",
            TextureFormat::Bpp4 => "4bpp",
            TextureFormat::Bpp8 => "8bpp",
            TextureFormat::Bpp16 => "16bpp",
            TextureFormat::A3I5 => "a3i5",
            TextureFormat::A5I3 => "a5i3",
            TextureFormat::Compressed4x4 => "4x4c",
        }
    }
}

impl fmt::Display for TextureFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TextureFormat {
    type Err = FormatParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TextureFormat::ALL
            .into_iter()
            .find(|format| format.name() == s)
            .ok_or_else(|| FormatParseError::UnknownFormat(s.to_string()))
    }
}
