use std::path::Path;

use crate::{CodecOptions, ImgCryptError, PackReport, UnpackReport};

pub fn encode(
    input_file: &Path,
    output_image: &Path,
    options: CodecOptions,
) -> Result<PackReport, ImgCryptError> {
    crate::api::pack::prepare()
        .with_options(options)
        .from_file(input_file)
        .into_image(output_image)
        .execute()
}

pub fn decode(input_image: &Path, output_file: &Path) -> Result<UnpackReport, ImgCryptError> {
    crate::api::unpack::prepare()
        .from_image(input_image)
        .into_file(output_file)
        .execute()
}
