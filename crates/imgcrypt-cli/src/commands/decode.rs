use std::path::PathBuf;

use crate::CliResult;

/// Restores a file from a PNG image
#[derive(Debug)]
pub struct DecodeArgs {
    pub input_image: PathBuf,
    pub output_file: PathBuf,
}

impl DecodeArgs {
    pub fn run(self) -> CliResult<()> {
        println!(
            "Unpacking: {} -> {} ...",
            self.input_image.display(),
            self.output_file.display()
        );

        let report = imgcrypt_core::commands::decode(&self.input_image, &self.output_file)?;

        println!(
            "Success! {} bytes restored to: {}",
            report.restored_len,
            self.output_file.display()
        );

        Ok(())
    }
}
