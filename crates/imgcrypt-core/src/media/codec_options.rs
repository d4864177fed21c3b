use std::fmt;
use std::str::FromStr;

/// Highest zlib compression level, used by default
pub const MAX_COMPRESSION_LEVEL: u32 = 9;

/// Codec configuration for packing a payload into an image
///
/// The pixel layout itself is fixed (3 channels of 8 bit), only the effort
/// spent on compressing is tunable. Unpacking needs no options at all, every
/// artifact is self describing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecOptions {
    /// zlib level for the payload, `0` stores, `9` squeezes hardest.
    /// Values above `9` are clamped.
    pub compression_level: u32,

    /// Effort of the PNG container encoder wrapping the pixel matrix.
    pub png_compression: PngCompression,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            compression_level: MAX_COMPRESSION_LEVEL,
            png_compression: PngCompression::Best,
        }
    }
}

impl CodecOptions {
    pub fn with_compression_level(mut self, level: u32) -> Self {
        self.compression_level = level;
        self
    }

    pub fn with_png_compression(mut self, png_compression: PngCompression) -> Self {
        self.png_compression = png_compression;
        self
    }

    pub fn get_compression_level(&self) -> u32 {
        self.compression_level.min(MAX_COMPRESSION_LEVEL)
    }
}

/// Effort of the PNG encoder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PngCompression {
    Fast,
    Default,
    #[default]
    Best,
}

impl FromStr for PngCompression {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fast" => Ok(Self::Fast),
            "default" => Ok(Self::Default),
            "best" => Ok(Self::Best),
            other => Err(format!(
                "unknown png compression '{other}', expected one of: fast, default, best"
            )),
        }
    }
}

impl fmt::Display for PngCompression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Fast => "fast",
            Self::Default => "default",
            Self::Best => "best",
        };
        f.write_str(name)
    }
}
