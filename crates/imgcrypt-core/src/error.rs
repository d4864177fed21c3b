use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImgCryptError {
    /// Represents a missing input file on the packing side
    #[error("Input file '{}' was not found", .0.display())]
    InputNotFound(PathBuf),

    /// Represents a missing image on the unpacking side
    #[error("Image '{}' was not found", .0.display())]
    ImageNotFound(PathBuf),

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents an output path whose extension does not name the PNG format
    #[error("Image format of '{}' is not supported, only .png is", .0.display())]
    UnsupportedImageFormat(PathBuf),

    /// Represents a compressed payload that does not fit into the 32 bit length header
    #[error("Compressed payload of {0} bytes exceeds the maximum of 4294967295 bytes")]
    PayloadTooLarge(usize),

    /// Represents a failure when encoding the pixel matrix as PNG.
    #[error("Image encoding error")]
    ImageEncodingError(#[source] image::ImageError),

    /// Represents an unreadable or broken image container, for example a truncated PNG
    #[error("Image could not be decoded")]
    ImageDecodeError(#[source] image::ImageError),

    /// Represents an image whose pixels are not 8 bit RGB
    #[error("Image pixel format {found} does not match the expected 8 bit RGB")]
    FormatMismatch { found: String },

    /// Represents a length header that promises more bytes than the image carries
    #[error("Truncated data: {expected} bytes are required but only {available} are available")]
    TruncatedData { expected: usize, available: usize },

    /// Represents a compressed stream that could not be inflated
    #[error("Compressed data is corrupt")]
    CorruptData(#[source] std::io::Error),

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No source file set")]
    SourceNotSet,

    #[error("No target file set")]
    TargetNotSet,
}

impl ImgCryptError {
    /// True for every failure that points at an image that was altered or
    /// never produced by the packer, as opposed to plain I/O trouble.
    pub fn is_corrupted_artifact(&self) -> bool {
        matches!(
            self,
            Self::ImageDecodeError(_)
                | Self::FormatMismatch { .. }
                | Self::TruncatedData { .. }
                | Self::CorruptData(_)
        )
    }
}
