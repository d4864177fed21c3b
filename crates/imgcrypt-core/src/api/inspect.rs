use std::fmt;
use std::path::Path;

use crate::media::image::{Geometry, CHANNELS};
use crate::media::payload::LengthHeader;
use crate::media::{Artifact, RgbImage};
use crate::{ImgCryptError, Result};

/// What the length header of an artifact claims, read without inflating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtifactInfo {
    pub width: u32,
    pub height: u32,
    pub compressed_len: usize,
    pub padding_len: usize,
}

impl ArtifactInfo {
    pub fn of(image: &RgbImage) -> Result<Self> {
        let flat = image.as_raw();
        let header = LengthHeader::parse(flat)?;
        if header.framed_len() > flat.len() {
            return Err(ImgCryptError::TruncatedData {
                expected: header.framed_len(),
                available: flat.len(),
            });
        }

        Ok(Self {
            width: image.width(),
            height: image.height(),
            compressed_len: header.declared_len(),
            padding_len: flat.len() - header.framed_len(),
        })
    }

    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    /// True when no smaller square could carry the same framed bytes,
    /// which holds for everything the packer writes.
    pub fn has_minimal_padding(&self) -> bool {
        let capacity = self.width as usize * self.height as usize * CHANNELS;
        let framed_len = capacity - self.padding_len;

        self.is_square() && Geometry::for_framed_len(framed_len).dimension == self.width
    }
}

impl fmt::Display for ArtifactInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} px, {} compressed bytes, {} padding bytes",
            self.width, self.height, self.compressed_len, self.padding_len
        )
    }
}

pub fn inspect(image: impl AsRef<Path>) -> Result<ArtifactInfo> {
    let artifact = Artifact::from_file(image.as_ref())?;
    ArtifactInfo::of(artifact.image())
}
