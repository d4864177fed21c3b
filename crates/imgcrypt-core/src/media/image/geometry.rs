//! Square matrix geometry of an artifact.
//!
//! A framed buffer of `n` bytes needs `ceil(n / 3)` pixels, and the artifact
//! is the smallest square holding them:
//!
//! ```text
//! dimension = ceil(sqrt(ceil(n / 3)))
//! padding   = dimension² · 3 - n
//! ```

/// Color channels per pixel, R, G and B
pub const CHANNELS: usize = 3;

/// Geometry of the pixel matrix for a framed buffer of a given length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub framed_len: usize,
    pub dimension: u32,
}

impl Geometry {
    pub fn for_framed_len(framed_len: usize) -> Self {
        let dimension = ceil_sqrt(required_pixels(framed_len) as u64) as u32;

        Self {
            framed_len,
            dimension,
        }
    }

    pub fn pixel_count(&self) -> usize {
        self.dimension as usize * self.dimension as usize
    }

    /// Bytes carried by the whole matrix
    pub fn capacity(&self) -> usize {
        self.pixel_count() * CHANNELS
    }

    pub fn padding_len(&self) -> usize {
        self.capacity() - self.framed_len
    }
}

pub fn required_pixels(framed_len: usize) -> usize {
    framed_len.div_ceil(CHANNELS)
}

/// Zero pads `buffer` so it fills the square matrix exactly.
pub fn pad_to_square(mut buffer: Vec<u8>) -> (Vec<u8>, Geometry) {
    let geometry = Geometry::for_framed_len(buffer.len());
    buffer.resize(geometry.capacity(), 0);

    (buffer, geometry)
}

fn ceil_sqrt(n: u64) -> u64 {
    let mut root = (n as f64).sqrt() as u64;
    while root * root > n {
        root -= 1;
    }
    while root * root < n {
        root += 1;
    }

    root
}
