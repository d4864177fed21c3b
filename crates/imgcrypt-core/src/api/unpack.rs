use std::path::{Path, PathBuf};

use crate::{ImgCryptError, UnpackReport};

pub fn prepare() -> UnpackApi {
    UnpackApi::default()
}

#[derive(Default, Debug)]
pub struct UnpackApi {
    image: Option<PathBuf>,
    destination_file: Option<PathBuf>,
}

impl UnpackApi {
    /// This is the packed image that contains the file to be restored
    pub fn from_image(mut self, image: impl AsRef<Path>) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    /// This is the file the restored bytes will be saved to
    pub fn into_file(mut self, destination_file: impl AsRef<Path>) -> Self {
        self.destination_file = Some(destination_file.as_ref().to_path_buf());
        self
    }

    /// Execute the unpacking and blocks until it is finished
    pub fn execute(self) -> Result<UnpackReport, ImgCryptError> {
        let Some(image) = self.image else {
            return Err(ImgCryptError::SourceNotSet);
        };
        let Some(destination_file) = self.destination_file else {
            return Err(ImgCryptError::TargetNotSet);
        };

        crate::unpacker::unpack_file(&image, &destination_file)
    }
}
