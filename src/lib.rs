//! colorpick is the headless core of an HSV color picker widget: a
//! saturation/value palette at a fixed hue, a draggable indicator, and four
//! RGBA channel sliders, all kept consistent with a single color model.
//!
//! The host toolkit draws the palette and forwards input; the picker tells
//! subscribers whenever the selected color changes.

#![deny(missing_docs)]

mod color;
mod color_model;
mod config;
mod convert;
mod error;
mod events;
mod math;
pub mod models;
mod picker;
mod pointer;
mod raster;
mod sliders;

pub use color::{Channel, Channels, Component, Components, Rgba};
pub use color_model::ColorModel;
pub use config::{PickerConfig, DEFAULT_RASTER_RESOLUTION, MAX_RASTER_RESOLUTION};
pub use error::{ConfigError, LayoutError};
pub use events::{ColorHandler, EventBus, SubscriberId, Subscription};
pub use picker::{ColorPicker, Lifecycle};
pub use pointer::{
    DragState, PaletteSpace, Point, PointerMapper, PointerTarget, Sample, Size, Vector,
};
pub use raster::GradientRaster;
pub use sliders::{Slider, SliderSync, ValueChanged, DISPLAY_DIGITS};
