//! Display configuration types and builder

pub use crate::error::BuilderError;

/// Physical display dimensions in pixels
///
/// These are fixed at construction and define the framebuffer size; they
/// never change afterwards, regardless of rotation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    /// Width in pixels (columns)
    pub width: u16,
    /// Height in pixels (rows)
    pub height: u16,
}

impl Dimensions {
    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if either dimension is zero.
    pub fn new(width: u16, height: u16) -> Result<Self, BuilderError> {
        if width == 0 || height == 0 {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Required framebuffer size in bytes
    ///
    /// Each byte packs 8 vertically stacked pixels in one column, so the
    /// size is `width * ceil(height / 8)` regardless of rotation.
    pub fn buffer_size(&self) -> usize {
        self.width as usize * (self.height as usize).div_ceil(8)
    }

    /// Dimensions as seen by callers under the given rotation
    ///
    /// Width and height swap for 90 and 270 degree rotations.
    pub fn rotated(&self, rotation: Rotation) -> Dimensions {
        match rotation {
            Rotation::Rotate0 | Rotation::Rotate180 => *self,
            Rotation::Rotate90 | Rotation::Rotate270 => Dimensions {
                width: self.height,
                height: self.width,
            },
        }
    }
}

/// Display rotation relative to native orientation
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Rotation {
    /// No rotation
    #[default]
    Rotate0,
    /// Rotate 90 degrees clockwise
    Rotate90,
    /// Rotate 180 degrees
    Rotate180,
    /// Rotate 270 degrees clockwise
    Rotate270,
}

/// Display configuration
///
/// Holds the physical dimensions and the caller-facing rotation.
/// Use [`Builder`] to create a Config.
#[derive(Clone, Debug)]
pub struct Config {
    /// Physical display dimensions
    pub dimensions: Dimensions,
    /// Display rotation
    pub rotation: Rotation,
}

impl Config {
    /// Get the logical (caller-facing) dimensions under the current rotation
    pub fn logical_dimensions(&self) -> Dimensions {
        self.dimensions.rotated(self.rotation)
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```
/// use mono_oled::{Builder, Dimensions, Rotation};
///
/// let dims = match Dimensions::new(128, 64) {
///     Ok(dims) => dims,
///     Err(_) => return,
/// };
/// let config = match Builder::new().dimensions(dims).rotation(Rotation::Rotate90).build() {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// assert_eq!(config.logical_dimensions().width, 64);
/// ```
#[must_use]
#[derive(Default)]
pub struct Builder {
    /// Display dimensions (required)
    dimensions: Option<Dimensions>,
    /// Display rotation
    rotation: Rotation,
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set display dimensions (required)
    pub fn dimensions(mut self, dims: Dimensions) -> Self {
        self.dimensions = Some(dims);
        self
    }

    /// Set display rotation
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::MissingDimensions` if dimensions were not set
    pub fn build(self) -> Result<Config, BuilderError> {
        Ok(Config {
            dimensions: self.dimensions.ok_or(BuilderError::MissingDimensions)?,
            rotation: self.rotation,
        })
    }
}
