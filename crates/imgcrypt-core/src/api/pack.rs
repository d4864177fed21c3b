use std::path::{Path, PathBuf};

use crate::{CodecOptions, ImgCryptError, PackReport};

pub fn prepare() -> PackApi {
    PackApi::default()
}

#[derive(Default, Debug)]
pub struct PackApi {
    source: Option<PathBuf>,
    output: Option<PathBuf>,
    options: CodecOptions,
}

impl PackApi {
    /// Use the given codec options
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// The file whose bytes get packed into the image
    pub fn from_file<A: AsRef<Path>>(mut self, source: A) -> Self {
        self.source = Some(source.as_ref().to_path_buf());
        self
    }

    /// The PNG image that will be written
    pub fn into_image<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Execute the packing and blocks until it is finished
    pub fn execute(self) -> Result<PackReport, ImgCryptError> {
        let Some(source) = self.source else {
            return Err(ImgCryptError::SourceNotSet);
        };
        let Some(output) = self.output else {
            return Err(ImgCryptError::TargetNotSet);
        };

        crate::packer::pack_file(&source, &output, &self.options)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use crate::ImgCryptError;

    #[test]
    fn illustrate_api_usage() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let report = crate::api::pack::prepare()
            .from_file("Cargo.toml")
            .into_image(temp_dir.path().join("cargo-toml.png"))
            .execute()
            .expect("Failed to pack file into image");

        assert_eq!(
            report.original_len as u64,
            std::fs::metadata("Cargo.toml").unwrap().len()
        );
        assert!(temp_dir.path().join("cargo-toml.png").exists());
    }

    #[test]
    fn should_require_source_and_target() {
        assert!(matches!(
            crate::api::pack::prepare().into_image("out.png").execute(),
            Err(ImgCryptError::SourceNotSet)
        ));
        assert!(matches!(
            crate::api::pack::prepare().from_file("Cargo.toml").execute(),
            Err(ImgCryptError::TargetNotSet)
        ));
    }
}
