//! Error types for the driver
//!
//! This module defines error types for configuration building
//! ([`BuilderError`]), framebuffer allocation ([`AllocationError`]) and
//! display operations ([`Error`]).
//!
//! Out-of-bounds pixel access is deliberately absent from this taxonomy:
//! writes outside the surface are silent no-ops and reads return `false`,
//! matching the tolerant style of graphics APIs whose primitives routinely
//! compute intermediate coordinates off-screen.
//!
//! ## Example
//!
//! ```
//! use mono_oled::{Builder, Dimensions, BuilderError};
//!
//! // Missing dimensions
//! let result = Builder::new().build();
//! assert!(matches!(result, Err(BuilderError::MissingDimensions)));
//!
//! // Invalid dimensions
//! let result = Dimensions::new(0, 64);
//! assert!(result.is_err());
//! ```

use crate::interface::DisplayInterface;

/// Framebuffer allocation failure
///
/// Raised when the heap cannot supply the packed pixel buffer. The display
/// remains uninitialized and unusable; callers must check
/// [`Display::init`](crate::Display::init) before drawing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AllocationError {
    /// Number of bytes that could not be allocated
    pub requested: usize,
}

impl core::fmt::Display for AllocationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "failed to allocate {} byte framebuffer", self.requested)
    }
}

impl core::error::Error for AllocationError {}

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific transport error.
/// This allows error handling code to match on the underlying hardware error.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Transport error (I2C/SPI/GPIO)
    ///
    /// Wraps the underlying hardware error from the [`DisplayInterface`]
    /// implementation, for both bind and steady-state write failures.
    Interface(I::Error),
    /// Framebuffer allocation failed during initialization
    Allocation(AllocationError),
}

impl<I: DisplayInterface> From<AllocationError> for Error<I> {
    fn from(err: AllocationError) -> Self {
        Self::Allocation(err)
    }
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(_) => write!(f, "Interface error"),
            Self::Allocation(err) => write!(f, "{err}"),
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
///
/// These errors occur during the builder pattern before the display is created.
#[derive(Debug, PartialEq)]
pub enum BuilderError {
    /// Dimensions were not specified
    ///
    /// [`Builder::dimensions()`](crate::config::Builder::dimensions) must be
    /// called before building.
    MissingDimensions,
    /// Invalid dimensions provided
    ///
    /// Width and height must both be nonzero.
    InvalidDimensions {
        /// Width (pixels) requested
        width: u16,
        /// Height (pixels) requested
        height: u16,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingDimensions => write!(f, "Dimensions must be specified"),
            Self::InvalidDimensions { width, height } => {
                write!(f, "Invalid dimensions {width}x{height} (must be nonzero)")
            }
        }
    }
}

impl core::error::Error for BuilderError {}
