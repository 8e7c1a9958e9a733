//! Error types for the picker.

use thiserror::Error;

use crate::Component;

/// Reasons the palette layout can not be used to map pointer positions.
///
/// These never reach the host from input handlers; the picker logs them and
/// skips the update.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum LayoutError {
    /// The host has not reported a resolved layout yet.
    #[error("palette layout has not been resolved yet")]
    Uninitialized,

    /// The mapping area is zero sized, negative or not finite.
    #[error("palette bounds are degenerate ({width} x {height})")]
    Degenerate {
        /// Width of the mapping area.
        width: Component,
        /// Height of the mapping area.
        height: Component,
    },
}

/// Errors returned when constructing a picker from an invalid configuration.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConfigError {
    /// The gradient raster needs between 2 and
    /// [`crate::MAX_RASTER_RESOLUTION`] samples per axis.
    #[error("raster resolution must be between 2 and {}, got {0}", crate::MAX_RASTER_RESOLUTION)]
    RasterResolution(usize),

    /// The palette size must be finite and not negative.
    #[error("invalid palette size {width} x {height}")]
    PaletteSize {
        /// Configured width.
        width: Component,
        /// Configured height.
        height: Component,
    },

    /// The pointer size must be finite and not negative.
    #[error("invalid pointer size {0}")]
    PointerSize(Component),
}
