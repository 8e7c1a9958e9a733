//! Models are structs that represent a color in a specific notation. They
//! give a type safe way to convert between the notations the picker uses.

mod hsv;
mod rgb;

pub use hsv::Hsv;
pub use rgb::Rgb;
