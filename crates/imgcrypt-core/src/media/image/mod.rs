pub mod decoder;
pub mod encoder;
pub mod geometry;

pub use geometry::{Geometry, CHANNELS};
