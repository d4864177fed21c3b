use std::io::Write;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::error::{ImageError, ParameterError, ParameterErrorKind};
use image::{ExtendedColorType, ImageEncoder, RgbImage};
use log::{debug, error};

use super::geometry::pad_to_square;
use crate::media::codec_options::PngCompression;
use crate::result::Result;
use crate::ImgCryptError;

/// Lays out a framed buffer as a square RGB pixel matrix, row by row,
/// three consecutive bytes per pixel.
pub fn to_pixel_matrix(framed: Vec<u8>) -> Result<RgbImage> {
    let framed_len = framed.len();
    let (padded, geometry) = pad_to_square(framed);
    debug!(
        "{framed_len} framed bytes -> {0}x{0} px with {1} padding bytes",
        geometry.dimension,
        geometry.padding_len()
    );

    square_from_raw(geometry.dimension, padded)
}

/// Wraps `raw` as a `dimension`×`dimension` image. The buffer has to hold
/// exactly one RGB triple per pixel.
fn square_from_raw(dimension: u32, raw: Vec<u8>) -> Result<RgbImage> {
    let raw_len = raw.len();
    RgbImage::from_raw(dimension, dimension, raw)
        .filter(|img| img.as_raw().len() == raw_len)
        .ok_or_else(|| {
            error!("{raw_len} bytes do not fill a {dimension}x{dimension} px image");
            ImgCryptError::ImageEncodingError(ImageError::Parameter(ParameterError::from_kind(
                ParameterErrorKind::DimensionMismatch,
            )))
        })
}

/// Encodes the matrix as an 8 bit RGB PNG
pub fn write_png<W: Write>(
    image: &RgbImage,
    writer: W,
    png_compression: PngCompression,
) -> Result<()> {
    let compression = match png_compression {
        PngCompression::Fast => CompressionType::Fast,
        PngCompression::Default => CompressionType::Default,
        PngCompression::Best => CompressionType::Best,
    };

    PngEncoder::new_with_quality(writer, compression, FilterType::Adaptive)
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            ExtendedColorType::Rgb8,
        )
        .map_err(|e| {
            error!("Error encoding png: {e}");
            ImgCryptError::ImageEncodingError(e)
        })
}
