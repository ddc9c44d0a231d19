pub mod decoder;
pub mod format;

pub use decoder::{decode, DecodeError};
pub use format::IndexedImage;
