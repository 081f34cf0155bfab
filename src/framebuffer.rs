//! Packed 1-bit-per-pixel framebuffer
//!
//! This module provides the [`Framebuffer`] owning the in-memory mirror of
//! the display's page-addressed pixel RAM. The layout is column-major bytes
//! with 8 vertically stacked pixels per byte; the least significant bit holds
//! the lowest row of each 8-row page. Any bulk transfer to hardware must
//! preserve this bit order exactly.
//!
//! Pixel operations touch buffer memory only; nothing here talks to the bus.
//! Bounds are checked in *logical* (rotated, caller-facing) coordinates, so
//! out-of-range writes are no-ops and out-of-range reads come back as off.

use alloc::vec::Vec;

use crate::color::Color;
use crate::config::{Dimensions, Rotation};
use crate::error::AllocationError;
use crate::rotation::apply_rotation;

/// Owned packed pixel buffer for a monochrome display
///
/// Allocated once at initialization; the dimensions are fixed for its
/// lifetime. Rotation is owned by the display surface and passed in per
/// operation, so there is a single source of truth for it.
pub struct Framebuffer {
    /// Physical display dimensions
    dimensions: Dimensions,
    /// Packed pixel storage, `width * ceil(height/8)` bytes
    buf: Vec<u8>,
}

impl Framebuffer {
    /// Allocate a zero-filled framebuffer for the given dimensions
    ///
    /// # Errors
    ///
    /// Returns [`AllocationError`] if the heap cannot supply
    /// `dimensions.buffer_size()` bytes. Allocation failure is reported, not
    /// aborted on.
    pub fn new(dimensions: Dimensions) -> Result<Self, AllocationError> {
        let requested = dimensions.buffer_size();
        let mut buf = Vec::new();
        if buf.try_reserve_exact(requested).is_err() {
            return Err(AllocationError { requested });
        }
        buf.resize(requested, 0);
        Ok(Self { dimensions, buf })
    }

    /// Physical dimensions this buffer was allocated for
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Set, clear or invert a single pixel
    ///
    /// Coordinates are logical: under `Rotate90`/`Rotate270` the valid range
    /// swaps to `[0, height) x [0, width)`. Out-of-bounds writes are silent
    /// no-ops.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color, rotation: Rotation) {
        let Some((index, mask)) = self.locate(x, y, rotation) else {
            return;
        };
        match color {
            Color::On => self.buf[index] |= mask,
            Color::Off => self.buf[index] &= !mask,
            Color::Invert => self.buf[index] ^= mask,
        }
    }

    /// Whether the pixel at logical (x, y) is lit
    ///
    /// Out-of-bounds reads return `false`; that is a defined result, not an
    /// error.
    pub fn get_pixel(&self, x: u32, y: u32, rotation: Rotation) -> bool {
        self.locate(x, y, rotation)
            .is_some_and(|(index, mask)| self.buf[index] & mask != 0)
    }

    /// Set every pixel to off
    pub fn clear(&mut self) {
        self.buf.fill(0);
    }

    /// Direct read access to the packed buffer
    pub fn data(&self) -> &[u8] {
        &self.buf
    }

    /// Direct write access to the packed buffer
    ///
    /// Intended for bulk operations such as full-frame transfers; callers
    /// must respect the packing format.
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.buf
    }

    /// Bounds check in logical space, then transform to a physical address
    fn locate(&self, x: u32, y: u32, rotation: Rotation) -> Option<(usize, u8)> {
        let logical = self.dimensions.rotated(rotation);
        if x >= u32::from(logical.width) || y >= u32::from(logical.height) {
            return None;
        }
        Some(apply_rotation(
            x,
            y,
            u32::from(self.dimensions.width),
            u32::from(self.dimensions.height),
            rotation,
        ))
    }
}
