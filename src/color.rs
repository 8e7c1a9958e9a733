//! Scalar and color value types shared by every part of the picker.

use bitflags::bitflags;

use crate::math::normalize;
use crate::models::Rgb;

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all components are stored as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all components are stored as.
pub type Component = f64;

/// Represent the three components that describe any color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

bitflags! {
    /// A set of RGBA channels, used to report which channels were touched by
    /// an update.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Channels : u8 {
        /// The red channel.
        const RED = 1 << 0;
        /// The green channel.
        const GREEN = 1 << 1;
        /// The blue channel.
        const BLUE = 1 << 2;
        /// The alpha channel.
        const ALPHA = 1 << 3;
        /// The three color channels.
        const RGB = Self::RED.bits() | Self::GREEN.bits() | Self::BLUE.bits();
    }
}

/// A single RGBA channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    /// The red channel.
    Red,
    /// The green channel.
    Green,
    /// The blue channel.
    Blue,
    /// The alpha channel.
    Alpha,
}

impl Channel {
    /// All channels in display order.
    pub const ALL: [Channel; 4] = [Channel::Red, Channel::Green, Channel::Blue, Channel::Alpha];

    /// The flag matching this channel.
    pub fn flag(self) -> Channels {
        match self {
            Channel::Red => Channels::RED,
            Channel::Green => Channels::GREEN,
            Channel::Blue => Channels::BLUE,
            Channel::Alpha => Channels::ALPHA,
        }
    }
}

/// A color with red, green, blue and alpha channels, each in `[0, 1]`.
///
/// Channels are clamped on construction, NaN becomes `0.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    /// The red channel.
    pub red: Component,
    /// The green channel.
    pub green: Component,
    /// The blue channel.
    pub blue: Component,
    /// The alpha channel.
    pub alpha: Component,
}

impl Rgba {
    /// Opaque white.
    pub const WHITE: Self = Self {
        red: 1.0,
        green: 1.0,
        blue: 1.0,
        alpha: 1.0,
    };

    /// Opaque black.
    pub const BLACK: Self = Self {
        red: 0.0,
        green: 0.0,
        blue: 0.0,
        alpha: 1.0,
    };

    /// Create a new color, clamping every channel into `[0, 1]`.
    pub fn new(red: Component, green: Component, blue: Component, alpha: Component) -> Self {
        Self {
            red: normalize(red),
            green: normalize(green),
            blue: normalize(blue),
            alpha: normalize(alpha),
        }
    }

    /// Combine an RGB color with an alpha value.
    pub fn from_rgb(rgb: Rgb, alpha: Component) -> Self {
        Self::new(rgb.red, rgb.green, rgb.blue, alpha)
    }

    /// The color channels without alpha.
    pub fn rgb(&self) -> Rgb {
        Rgb::new(self.red, self.green, self.blue)
    }

    /// Return a copy of this color with the alpha channel replaced.
    pub fn with_alpha(self, alpha: Component) -> Self {
        Self::new(self.red, self.green, self.blue, alpha)
    }

    /// Read a single channel.
    pub fn channel(&self, channel: Channel) -> Component {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
            Channel::Alpha => self.alpha,
        }
    }

    /// Return a copy with a single channel replaced.
    pub fn with_channel(self, channel: Channel, value: Component) -> Self {
        let Self {
            red,
            green,
            blue,
            alpha,
        } = self;
        match channel {
            Channel::Red => Self::new(value, green, blue, alpha),
            Channel::Green => Self::new(red, value, blue, alpha),
            Channel::Blue => Self::new(red, green, value, alpha),
            Channel::Alpha => Self::new(red, green, blue, value),
        }
    }

    /// Quantize to 8 bits per channel for display.
    pub fn to_rgba8(&self) -> [u8; 4] {
        let q = |c: Component| (c * 255.0).round() as u8;
        [q(self.red), q(self.green), q(self.blue), q(self.alpha)]
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::WHITE
    }
}
