use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;

use image::{DynamicImage, ImageFormat, ImageReader, RgbImage};
use log::error;

use crate::result::Result;
use crate::ImgCryptError;

/// Loads an artifact image from disk, whatever its file extension says.
pub fn read_image(path: &Path) -> Result<DynamicImage> {
    let mut reader = ImageReader::open(path)
        .map_err(|source| match source.kind() {
            ErrorKind::NotFound => ImgCryptError::ImageNotFound(path.to_path_buf()),
            _ => ImgCryptError::ReadError { source },
        })?
        .with_guessed_format()
        .map_err(|source| ImgCryptError::ReadError { source })?;
    reader.no_limits();

    if reader.format() == Some(ImageFormat::Png) {
        ensure_truecolor_png(path)?;
    }

    reader.decode().map_err(|e| {
        error!("Error decoding image {path:?}: {e}");
        ImgCryptError::ImageDecodeError(e)
    })
}

/// The PNG decoder expands palette and low bit depth images to RGB, so the
/// stored layout has to be checked on the header before decoding.
fn ensure_truecolor_png(path: &Path) -> Result<()> {
    let file = File::open(path).map_err(|source| ImgCryptError::ReadError { source })?;
    let mut decoder = png::Decoder::new(BufReader::new(file));
    // a broken header is reported by the image decoder
    let Ok(info) = decoder.read_header_info() else {
        return Ok(());
    };

    match (info.color_type, info.bit_depth) {
        (png::ColorType::Rgb, png::BitDepth::Eight) => Ok(()),
        (color_type, bit_depth) => {
            let found = format!("{color_type:?} {} bit", bit_depth as u8);
            error!("Image {path:?} is stored as {found}, expected Rgb 8 bit");
            Err(ImgCryptError::FormatMismatch { found })
        }
    }
}

/// Accepts only the 8 bit RGB layout the packer writes.
pub fn into_rgb(image: DynamicImage) -> Result<RgbImage> {
    match image {
        DynamicImage::ImageRgb8(rgb) => Ok(rgb),
        other => {
            let found = format!("{:?}", other.color());
            error!("Image has pixel format {found}, expected Rgb8");
            Err(ImgCryptError::FormatMismatch { found })
        }
    }
}

/// Flattens the pixels back into one byte sequence, row by row,
/// channel order R, G, B.
pub fn flatten(image: &RgbImage) -> &[u8] {
    image.as_raw()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb, Rgba};
    use tempfile::TempDir;

    fn write_indexed_png(path: &Path, palette: &[[u8; 3]], indices: &[u8], width: u32) {
        let file = File::create(path).unwrap();
        let height = indices.len() as u32 / width;
        let mut encoder = png::Encoder::new(file, width, height);
        encoder.set_color(png::ColorType::Indexed);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_palette(palette.concat());
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(indices).unwrap();
        writer.finish().unwrap();
    }

    #[test]
    fn should_flatten_row_major() {
        let img: RgbImage = ImageBuffer::from_fn(2, 2, |x, y| {
            let i = (6 * y + 3 * x) as u8;
            Rgb([i, i + 1, i + 2])
        });

        assert_eq!(flatten(&img), &(0..12).collect::<Vec<u8>>()[..]);
    }

    #[test]
    fn should_reject_an_alpha_channel() {
        let img = DynamicImage::ImageRgba8(ImageBuffer::from_pixel(2, 2, Rgba([1, 2, 3, 4])));

        match into_rgb(img) {
            Err(ImgCryptError::FormatMismatch { found }) => assert_eq!(found, "Rgba8"),
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn should_reject_grayscale() {
        let img = DynamicImage::new_luma8(3, 3);
        assert!(matches!(
            into_rgb(img),
            Err(ImgCryptError::FormatMismatch { .. })
        ));
    }

    #[test]
    fn should_report_a_missing_image() {
        match read_image(Path::new("this/image/does/not/exist.png")) {
            Err(ImgCryptError::ImageNotFound(p)) => {
                assert_eq!(p, Path::new("this/image/does/not/exist.png"))
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn should_fail_to_decode_a_non_image() {
        assert!(matches!(
            read_image(Path::new("Cargo.toml")),
            Err(ImgCryptError::ImageDecodeError(_))
        ));
    }

    #[test]
    fn should_reject_a_palette_png() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("indexed.png");
        write_indexed_png(&path, &[[0, 0, 0], [0, 0, 10]], &[0, 1, 0, 0], 2);

        match read_image(&path) {
            Err(ImgCryptError::FormatMismatch { found }) => assert_eq!(found, "Indexed 8 bit"),
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn should_read_a_truecolor_png() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rgb.png");
        let img: RgbImage = ImageBuffer::from_pixel(3, 3, Rgb([1, 2, 3]));
        img.save(&path).unwrap();

        let read = into_rgb(read_image(&path).unwrap()).unwrap();

        assert_eq!(read, img);
    }
}
