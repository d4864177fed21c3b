use std::path::PathBuf;

use clap::{ArgGroup, Parser};
use imgcrypt_core::{CodecOptions, PngCompression};

use crate::commands::{decode::DecodeArgs, encode::EncodeArgs};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(group(ArgGroup::new("mode").required(true).args(["encode", "decode"])))]
pub struct CliArgs {
    /// Packs a file into a PNG image
    #[arg(short = 'e', num_args = 2, value_names = ["input_file", "output_image"])]
    pub encode: Option<Vec<PathBuf>>,

    /// Restores a file from a PNG image
    #[arg(short = 'd', num_args = 2, value_names = ["input_image", "output_file"])]
    pub decode: Option<Vec<PathBuf>>,

    /// zlib compression level of the packed file, 0 (store) to 9 (best)
    #[arg(
        long,
        default_value_t = 9,
        value_parser = clap::value_parser!(u32).range(0..=9)
    )]
    pub compression_level: u32,

    /// Effort of the PNG encoder: fast, default or best
    #[arg(long, default_value_t = PngCompression::Best)]
    pub png_compression: PngCompression,
}

/// What to do, once the arguments are parsed
#[derive(Debug)]
pub enum Mode {
    Encode(EncodeArgs),
    Decode(DecodeArgs),
}

impl CliArgs {
    pub fn options(&self) -> CodecOptions {
        CodecOptions::default()
            .with_compression_level(self.compression_level)
            .with_png_compression(self.png_compression)
    }

    pub fn mode(self) -> Option<Mode> {
        if let Some([input_file, output_image]) = self.encode.as_deref() {
            return Some(Mode::Encode(EncodeArgs {
                input_file: input_file.clone(),
                output_image: output_image.clone(),
            }));
        }
        if let Some([input_image, output_file]) = self.decode.as_deref() {
            return Some(Mode::Decode(DecodeArgs {
                input_image: input_image.clone(),
                output_file: output_file.clone(),
            }));
        }

        None
    }
}
