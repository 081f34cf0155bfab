//! Monochrome OLED Driver Core
//!
//! A framebuffer-backed hardware abstraction core for monochrome OLED
//! display modules connected over I2C or SPI (hardware or bit-banged),
//! targeting `embedded-hal` v1.0 platforms.
//!
//! ## Features
//!
//! - `no_std` compatible (requires `alloc` for the framebuffer)
//! - `embedded-hal` v1.0 support
//! - `embedded-graphics` integration (with `graphics` feature)
//! - Packed 1-bit-per-pixel framebuffer with rotation-aware pixel access
//! - Three transport bindings: I2C, hardware SPI, software (bit-banged) SPI
//! - Optional hardware reset sequencing
//!
//! Controller-specific command sequences (SSD1306, SH1107, ...) are out of
//! scope; display-specific layers build on [`Display::send_command_list`]
//! and [`Display::send_data`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use embedded_hal::delay::DelayNs;
//! use mono_oled::{
//!     Builder, Color, Dimensions, Display, I2cInterface, NoReset, Rotation, DEFAULT_I2C_ADDRESS,
//! };
//!
//! # use core::convert::Infallible;
//! # use embedded_hal::i2c::{ErrorType, I2c, Operation};
//! # struct MockI2c;
//! # impl ErrorType for MockI2c { type Error = Infallible; }
//! # impl I2c for MockI2c {
//! #     fn transaction(
//! #         &mut self,
//! #         _address: u8,
//! #         _operations: &mut [Operation<'_>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let i2c = MockI2c;
//! # let mut delay = MockDelay;
//! let interface = I2cInterface::new(i2c, DEFAULT_I2C_ADDRESS);
//! let dims = match Dimensions::new(128, 64) {
//!     Ok(dims) => dims,
//!     Err(_) => return,
//! };
//! let config = match Builder::new().dimensions(dims).rotation(Rotation::Rotate0).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut display: Display<_, NoReset> = Display::new(interface, config, None);
//! if display.init(&mut delay, true).is_err() {
//!     return;
//! }
//!
//! display.set_pixel(0, 0, Color::On);
//! // Hand display.buffer() to a controller-specific transfer routine...
//! ```

#![no_std]

extern crate alloc;

/// Pixel write semantics (off/on/invert)
pub mod color;
/// Controller-agnostic command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display surface and lifecycle
pub mod display;
/// Error types for the driver
pub mod error;
/// Packed 1-bit-per-pixel framebuffer
pub mod framebuffer;
/// Transport abstraction over I2C and SPI
pub mod interface;
/// Coordinate rotation utilities
pub mod rotation;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
mod graphics;

pub use color::Color;
pub use config::{Builder, Config, Dimensions, Rotation};
pub use display::{Display, NoReset};
pub use error::{AllocationError, BuilderError, Error};
pub use framebuffer::Framebuffer;
pub use interface::{
    DisplayInterface, I2cInterface, InterfaceError, SoftSpiInterface, SpiInterface,
    DEFAULT_I2C_ADDRESS,
};
