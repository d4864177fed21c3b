use std::path::PathBuf;

use imgcrypt_core::CodecOptions;

use crate::CliResult;

/// Packs a file into a PNG image
#[derive(Debug)]
pub struct EncodeArgs {
    pub input_file: PathBuf,
    pub output_image: PathBuf,
}

impl EncodeArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        println!(
            "Packing: {} -> {} ...",
            self.input_file.display(),
            self.output_image.display()
        );

        let report =
            imgcrypt_core::commands::encode(&self.input_file, &self.output_image, options)?;

        println!("{report}");
        println!("Success! Image saved to: {}", self.output_image.display());

        Ok(())
    }
}
