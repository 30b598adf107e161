//! The image model and the operations on it.
//!
//! ## Module Map
//!
//! - `pixel` - `Pixel`, the two pixel values
//! - `bw_image` - `Image`, constructors and accessors
//! - `algebra` - equality, negation, AND / OR / XOR
//! - `transform` - mirrors, stacking and side-by-side concatenation
//! - `dump` - RAW and RLE text dumps

pub mod algebra;
pub mod bw_image;
pub mod dump;
pub mod pixel;
pub mod transform;

pub use bw_image::Image;
pub use pixel::Pixel;
