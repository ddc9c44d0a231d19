/// A decoded paletted image: one palette index per pixel, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedImage {
    pub width: u32,
    pub height: u32,
    /// RGBA colors, at most 256 entries.
    pub palette: Vec<[u8; 4]>,
    pub pixels: Vec<u8>,
}

impl IndexedImage {
    pub const MAX_PALETTE_SIZE: usize = crate::constants::PALETTE_CAPACITY;

    pub fn new(width: u32, height: u32, palette: Vec<[u8; 4]>, pixels: Vec<u8>) -> Self {
        Self {
            width,
            height,
            palette,
            pixels,
        }
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}
