//! Pixel write semantics for monochrome displays
//!
//! This module defines the [`Color`] enum describing what a pixel write does
//! to the packed framebuffer. Unlike a stored color value, [`Color::Invert`]
//! is a write-time operation (a bit toggle) and is never persisted.
//!
//! ## Bit Semantics
//!
//! | Color  | Effect on the addressed bit |
//! |--------|-----------------------------|
//! | Off    | cleared (`&= !mask`)        |
//! | On     | set (`|= mask`)             |
//! | Invert | toggled (`^= mask`)         |
//!
//! ## Example
//!
//! ```
//! use mono_oled::Color;
//!
//! // Tri-state write semantics, selected per pixel operation
//! let lit = Color::On;
//! let dark = Color::Off;
//! let toggled = Color::Invert;
//! assert_ne!(lit, dark);
//! assert_ne!(lit, toggled);
//! ```

/// Write semantics for a single pixel operation
///
/// Monochrome OLED pixels are 1-bit; `Invert` toggles whatever is in the
/// framebuffer rather than storing a third state.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Color {
    /// Pixel off (bit cleared)
    Off,
    /// Pixel on (bit set)
    On,
    /// Toggle the pixel's current state (bit flipped)
    Invert,
}

#[cfg(feature = "graphics")]
impl embedded_graphics_core::prelude::PixelColor for Color {
    type Raw = embedded_graphics_core::pixelcolor::raw::RawU8;
}

#[cfg(feature = "graphics")]
impl From<embedded_graphics_core::pixelcolor::BinaryColor> for Color {
    fn from(color: embedded_graphics_core::pixelcolor::BinaryColor) -> Self {
        match color {
            embedded_graphics_core::pixelcolor::BinaryColor::Off => Self::Off,
            embedded_graphics_core::pixelcolor::BinaryColor::On => Self::On,
        }
    }
}
