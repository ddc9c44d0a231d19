/// Number of entries addressable by an 8-bit palette index.
pub const PALETTE_CAPACITY: usize = 256;

/// Bytes per entry in an encoded palette table (one little-endian `u16`).
pub const PALETTE_ENTRY_SIZE: usize = std::mem::size_of::<u16>();

/// Bits dropped from each 8-bit channel when quantizing to 5 bits.
pub const CHANNEL_SHIFT: u8 = 3;
pub const CHANNEL_MASK: u16 = 0x1F;

/// Bit offsets of each channel inside a packed 15-bit color.
pub const RED_OFFSET: u16 = 0;
pub const GREEN_OFFSET: u16 = 5;
pub const BLUE_OFFSET: u16 = 10;
