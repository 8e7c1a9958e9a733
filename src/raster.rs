//! The gradient raster: a fixed resolution grid of colors at a single hue,
//! used to draw the palette and to look up the color under the indicator.
//!
//! Cell `(x, y)` holds the color with saturation `x / dim` and value
//! `y / dim`. Row 0 is the bottom of the palette (value 0).

use crate::{
    color::Component,
    math::normalize_hue,
    models::{Hsv, Rgb},
};

/// An owned buffer of gradient samples. Hosts upload [`GradientRaster::pixels`]
/// into whatever texture they draw the palette with and call
/// [`GradientRaster::dispose`] when the picker is torn down.
#[derive(Debug)]
pub struct GradientRaster {
    dimension: usize,
    hue: Component,
    revision: u64,
    pixels: Vec<Rgb>,
}

impl GradientRaster {
    /// Allocate a square raster with `dimension` samples per axis and fill it
    /// for the given hue.
    pub fn new(dimension: usize, hue: Component) -> Self {
        debug_assert!(dimension >= 2, "raster needs at least 2 samples per axis");

        let mut raster = Self {
            dimension,
            hue: 0.0,
            revision: 0,
            pixels: vec![Rgb::new(0.0, 0.0, 0.0); dimension * dimension],
        };
        raster.regenerate(hue);
        raster
    }

    /// Samples per axis.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// The hue the raster was last generated for, in degrees.
    pub fn hue(&self) -> Component {
        self.hue
    }

    /// Incremented every time the samples are regenerated.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// All samples, row major, starting at the bottom row.
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Recompute every sample for a new hue, in place.
    pub fn regenerate(&mut self, hue: Component) {
        let hue = normalize_hue(hue);
        let dim = self.dimension;

        for (index, pixel) in self.pixels.iter_mut().enumerate() {
            let (x, y) = (index % dim, index / dim);
            let (saturation, value) = (Self::axis_fraction(x, dim), Self::axis_fraction(y, dim));
            *pixel = Hsv::new(hue, saturation, value).to_rgb();
        }

        self.hue = hue;
        self.revision += 1;

        log::debug!(
            "regenerated {dim}x{dim} gradient raster for hue {hue} (revision {})",
            self.revision
        );
    }

    /// Regenerate only if the hue differs from the one the raster holds.
    /// Returns true if the samples changed.
    pub fn regenerate_if_changed(&mut self, hue: Component) -> bool {
        if normalize_hue(hue) == self.hue {
            return false;
        }
        self.regenerate(hue);
        true
    }

    /// The sample at `(x, y)`. Indices past the edge are clamped.
    pub fn sample(&self, x: usize, y: usize) -> Rgb {
        let (x, y) = self.clamp_cell(x, y);
        self.pixels[y * self.dimension + x]
    }

    /// Saturation and value of the sample at `(x, y)`. Indices past the edge
    /// are clamped.
    pub fn cell_saturation_value(&self, x: usize, y: usize) -> (Component, Component) {
        let (x, y) = self.clamp_cell(x, y);
        (
            Self::axis_fraction(x, self.dimension),
            Self::axis_fraction(y, self.dimension),
        )
    }

    /// The cell whose saturation and value are closest to the given ones.
    pub fn nearest_cell(&self, saturation: Component, value: Component) -> (usize, usize) {
        let dim = self.dimension as Component;
        let to_index = |c: Component| (c.clamp(0.0, 1.0) * dim).round() as usize;
        self.clamp_cell(to_index(saturation), to_index(value))
    }

    /// Pack the samples as 8-bit RGB, row major, starting at the bottom row.
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|p| {
                let q = |c: Component| (c * 255.0).round() as u8;
                [q(p.red), q(p.green), q(p.blue)]
            })
            .collect()
    }

    /// Release the sample buffer.
    pub fn dispose(self) {
        log::debug!("released {0}x{0} gradient raster", self.dimension);
    }

    fn clamp_cell(&self, x: usize, y: usize) -> (usize, usize) {
        let last = self.dimension - 1;
        (x.min(last), y.min(last))
    }

    fn axis_fraction(index: usize, dimension: usize) -> Component {
        index as Component / dimension as Component
    }
}
