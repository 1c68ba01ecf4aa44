//! Colors in ARGB8888 format.

pub const BACKGROUND: u32 = 0xFFFFFFFF;
pub const BAR: u32 = 0xFF0000FF;
pub const BAR_OUTLINE: u32 = 0xFF000000;
/// Bars touched by the most recent mutation.
pub const HIGHLIGHT: u32 = 0xFFFF0000;

/// Splits an ARGB8888 color into `[r, g, b, a]` bytes.
#[inline]
pub fn to_rgba(color: u32) -> [u8; 4] {
    let [a, r, g, b] = color.to_be_bytes();
    [r, g, b, a]
}
