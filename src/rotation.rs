//! Coordinate rotation utilities
//!
//! This module provides the transform from logical (caller-facing, rotated)
//! pixel coordinates to the physical byte and bit address in the packed
//! framebuffer.
//!
//! The buffer packs 8 vertically stacked pixels per byte per column,
//! matching the page-addressed memory of monochrome OLED controllers:
//! `index = x + (y / 8) * width`, with the least significant bit holding the
//! lowest row of each 8-row page.
//!
//! ## Rotation Modes
//!
//! - **Rotate0**: native orientation
//! - **Rotate90**: 90° clockwise, logical width and height swapped
//! - **Rotate180**: origin at bottom-right
//! - **Rotate270**: 270° clockwise, logical width and height swapped
//!
//! ## Example
//!
//! ```
//! use mono_oled::{rotation::apply_rotation, Rotation};
//!
//! // 128x64 panel at native orientation: pixel (0,0) is byte 0, bit 0
//! let (idx, mask) = apply_rotation(0, 0, 128, 64, Rotation::Rotate0);
//! assert_eq!(idx, 0);
//! assert_eq!(mask, 0x01);
//!
//! // Pixel (127,63) is the last byte, top bit of the last page
//! let (idx, mask) = apply_rotation(127, 63, 128, 64, Rotation::Rotate0);
//! assert_eq!(idx, 1023);
//! assert_eq!(mask, 0x80);
//! ```

use crate::config::Rotation;

/// Apply rotation transformation to get buffer index and bit mask
///
/// Converts logical (x, y) coordinates to a physical buffer location
/// `(byte_index, bit_mask)`. The caller must bounds-check against the
/// *logical* dimensions first; `width` and `height` here are always the
/// *physical* panel dimensions fixed at construction.
///
/// # Arguments
///
/// * `x` - Logical X coordinate (column)
/// * `y` - Logical Y coordinate (row)
/// * `width` - Physical display width in pixels
/// * `height` - Physical display height in pixels
/// * `rotation` - Rotation mode
///
/// # Example
///
/// ```
/// use mono_oled::{rotation::apply_rotation, Rotation};
///
/// // 128x64 panel rotated 90 degrees: the caller's logical space is 64x128,
/// // and logical (0,0) lands on physical (127,0).
/// let (idx, mask) = apply_rotation(0, 0, 128, 64, Rotation::Rotate90);
/// assert_eq!(idx, 127);
/// assert_eq!(mask, 0x01);
/// ```
pub fn apply_rotation(x: u32, y: u32, width: u32, height: u32, rotation: Rotation) -> (usize, u8) {
    let (x, y) = match rotation {
        Rotation::Rotate0 => (x, y),
        Rotation::Rotate90 => (width - 1 - y, x),
        Rotation::Rotate180 => (width - 1 - x, height - 1 - y),
        Rotation::Rotate270 => (y, height - 1 - x),
    };
    let index = (x + (y / 8) * width) as usize;
    let mask = 1 << (y % 8);
    (index, mask)
}
