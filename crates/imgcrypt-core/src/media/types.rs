use std::io::Write;
use std::path::Path;

pub use image::RgbImage;
use image::ImageFormat;
use log::error;

use super::image::{decoder, encoder};
use super::{write_atomically, Persist, PngCompression};
use crate::error::ImgCryptError;
use crate::result::Result;

/// an image that carries a packed payload in its pixels
#[derive(Debug)]
pub struct Artifact {
    image: RgbImage,
    png_compression: PngCompression,
}

impl Artifact {
    pub fn from_image(image: RgbImage) -> Self {
        Self {
            image,
            png_compression: PngCompression::default(),
        }
    }

    /// Loads an artifact, any pixel layout besides 8 bit RGB is rejected.
    pub fn from_file(f: &Path) -> Result<Self> {
        let image = decoder::into_rgb(decoder::read_image(f)?)?;

        Ok(Self::from_image(image))
    }

    pub fn with_png_compression(mut self, png_compression: PngCompression) -> Self {
        self.png_compression = png_compression;
        self
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }

    /// The embedded byte stream, header and padding included
    pub fn as_bytes(&self) -> &[u8] {
        decoder::flatten(&self.image)
    }

    pub fn save_to_writer<W: Write>(&self, writer: W) -> Result<()> {
        encoder::write_png(&self.image, writer, self.png_compression)
    }
}

impl Persist for Artifact {
    fn save_as(&mut self, file: &Path) -> Result<()> {
        ensure_png_target(file)?;
        write_atomically(file, |w| self.save_to_writer(w))
    }
}

/// Only PNG is written, anything else is refused before touching the disk.
pub fn ensure_png_target(file: &Path) -> Result<()> {
    match ImageFormat::from_path(file) {
        Ok(ImageFormat::Png) => Ok(()),
        _ => {
            error!("Refusing to write {file:?}, only png is supported");
            Err(ImgCryptError::UnsupportedImageFormat(file.to_path_buf()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb};
    use tempfile::TempDir;

    #[test]
    fn should_save_and_load_the_same_pixels() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("artifact.png");
        let img: RgbImage = ImageBuffer::from_fn(4, 4, |x, y| Rgb([x as u8, y as u8, 0xab]));

        Artifact::from_image(img.clone()).save_as(&target).unwrap();
        let loaded = Artifact::from_file(&target).unwrap();

        assert_eq!(loaded.image(), &img);
    }

    #[test]
    fn should_refuse_non_png_targets() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("artifact.jpg");
        let mut artifact = Artifact::from_image(RgbImage::new(2, 2));

        assert!(matches!(
            artifact.save_as(&target),
            Err(ImgCryptError::UnsupportedImageFormat(_))
        ));
        assert!(!target.exists());
    }

    #[test]
    fn should_accept_upper_case_png_extension() {
        assert!(ensure_png_target(Path::new("OUT.PNG")).is_ok());
        assert!(ensure_png_target(Path::new("out")).is_err());
    }
}
