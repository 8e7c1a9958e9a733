//! Configuration accepted when constructing a picker.

use crate::{
    color::{Component, Rgba},
    error::ConfigError,
    math::is_valid_extent,
    pointer::Size,
};

/// Number of samples per axis of the gradient raster. The raster resolution
/// is independent of the on-screen palette size, so sampling density does not
/// change when the palette is resized.
pub const DEFAULT_RASTER_RESOLUTION: usize = 64;

/// Upper limit for [`PickerConfig::raster_resolution`].
pub const MAX_RASTER_RESOLUTION: usize = 1024;

/// Configuration for a [`crate::ColorPicker`].
#[derive(Clone, Debug, PartialEq)]
pub struct PickerConfig {
    /// The color selected when the picker is initialized.
    pub initial_color: Rgba,
    /// Size of the gradient palette. The indicator is kept within this area.
    pub palette_size: Size,
    /// Diameter of the draggable indicator.
    pub pointer_size: Component,
    /// Samples per axis of the gradient raster.
    pub raster_resolution: usize,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            initial_color: Rgba::WHITE,
            palette_size: Size::new(300.0, 300.0),
            pointer_size: 32.0,
            raster_resolution: DEFAULT_RASTER_RESOLUTION,
        }
    }
}

impl PickerConfig {
    /// Set the initial color.
    pub fn with_initial_color(mut self, color: Rgba) -> Self {
        self.initial_color = color;
        self
    }

    /// Set the palette size.
    pub fn with_palette_size(mut self, width: Component, height: Component) -> Self {
        self.palette_size = Size::new(width, height);
        self
    }

    /// Set the indicator diameter.
    pub fn with_pointer_size(mut self, pointer_size: Component) -> Self {
        self.pointer_size = pointer_size;
        self
    }

    /// Set the raster resolution.
    pub fn with_raster_resolution(mut self, resolution: usize) -> Self {
        self.raster_resolution = resolution;
        self
    }

    /// Check that the configuration can be used to build a picker.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(2..=MAX_RASTER_RESOLUTION).contains(&self.raster_resolution) {
            return Err(ConfigError::RasterResolution(self.raster_resolution));
        }

        let Size { width, height, .. } = self.palette_size;
        if !is_valid_extent(width) || !is_valid_extent(height) {
            return Err(ConfigError::PaletteSize { width, height });
        }

        if !is_valid_extent(self.pointer_size) {
            return Err(ConfigError::PointerSize(self.pointer_size));
        }

        Ok(())
    }
}
