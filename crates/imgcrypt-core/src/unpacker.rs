use std::io::Write;
use std::path::Path;

use log::debug;

use crate::media::image::decoder::flatten;
use crate::media::payload::{unframe, PayloadDecoder, ZlibPayloadCodec};
use crate::media::{write_atomically, Artifact, RgbImage};
use crate::result::Result;
use crate::ImgCryptError;

/// Outcome of an unpacking run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnpackReport {
    pub compressed_len: usize,
    pub restored_len: usize,
}

/// Recovers the original payload from the pixels of a packed image.
pub fn unpack_image(image: &RgbImage) -> Result<Vec<u8>> {
    unpack_bytes(flatten(image)).map(|(payload, _)| payload)
}

fn unpack_bytes(flat: &[u8]) -> Result<(Vec<u8>, UnpackReport)> {
    let compressed = unframe(flat)?;
    let payload = ZlibPayloadCodec::default().decode(compressed)?;
    debug!(
        "inflated {} compressed bytes to {}",
        compressed.len(),
        payload.len()
    );

    let report = UnpackReport {
        compressed_len: compressed.len(),
        restored_len: payload.len(),
    };

    Ok((payload, report))
}

/// Restores the file packed into the image at `source` and writes it to
/// `target`. Nothing is written unless the payload was recovered completely.
pub fn unpack_file(source: &Path, target: &Path) -> Result<UnpackReport> {
    let artifact = Artifact::from_file(source)?;
    let (payload, report) = unpack_bytes(artifact.as_bytes())?;

    write_atomically(target, |w| write_payload(w, &payload))?;

    Ok(report)
}

fn write_payload(w: &mut dyn Write, payload: &[u8]) -> Result<()> {
    w.write_all(payload)
        .map_err(|source| ImgCryptError::WriteError { source })
}
