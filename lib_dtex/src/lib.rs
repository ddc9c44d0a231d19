pub mod constants;
pub mod convert;
pub mod encoding;
pub mod image;
pub mod texture;

use log::*;
use std::io::Write;

pub use crate::convert::{convert_file, convert_image, ConvertError};
pub use crate::encoding::{encode_palette, encode_pixels, quantize_color, EncodeMode, EncodingError};
pub use crate::image::{decode, DecodeError, IndexedImage};
pub use crate::texture::{FormatParseError, TextureFormat};

pub fn init_logging(level: LevelFilter) {
    env_logger::Builder::new()
        .target(env_logger::Target::Stderr)
        .filter(Some("lib_dtex"), level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}:{}] {}",
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}
