use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use log::{debug, error, info};

use crate::media::image::encoder::to_pixel_matrix;
use crate::media::payload::{artifact_codec, PayloadEncoder, HEADER_LEN};
use crate::media::{ensure_png_target, Artifact, CodecOptions, Persist};
use crate::result::Result;
use crate::ImgCryptError;

/// Outcome of a packing run, the sizes are informational only and not part
/// of the artifact format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackReport {
    pub original_len: usize,
    pub compressed_len: usize,
    pub dimension: u32,
}

impl PackReport {
    /// Percentage of bytes saved by compression, negative when the payload grew.
    pub fn savings_ratio(&self) -> f64 {
        if self.original_len == 0 {
            return 0.0;
        }

        (1.0 - self.compressed_len as f64 / self.original_len as f64) * 100.0
    }
}

impl fmt::Display for PackReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Size: {} -> {} bytes (saved {:.1}%)",
            self.original_len,
            self.compressed_len,
            self.savings_ratio()
        )?;
        write!(f, "Image dimensions: {0}x{0} px", self.dimension)
    }
}

/// A payload laid out as pixels, ready to be persisted
#[derive(Debug)]
pub struct Packed {
    pub artifact: Artifact,
    pub report: PackReport,
}

/// Compresses `payload`, frames it with its length and lays it out as the
/// smallest square RGB image that holds it.
pub fn pack_bytes(payload: &[u8], opts: &CodecOptions) -> Result<Packed> {
    let framed = artifact_codec(opts.get_compression_level()).encode(payload)?;
    let compressed_len = framed.len() - HEADER_LEN;
    debug!(
        "compressed {} bytes to {compressed_len} at level {}",
        payload.len(),
        opts.get_compression_level()
    );
    if compressed_len > payload.len() {
        info!(
            "payload grew by {} bytes while compressing",
            compressed_len - payload.len()
        );
    }

    let image = to_pixel_matrix(framed)?;
    let report = PackReport {
        original_len: payload.len(),
        compressed_len,
        dimension: image.width(),
    };

    Ok(Packed {
        artifact: Artifact::from_image(image).with_png_compression(opts.png_compression),
        report,
    })
}

/// Packs the file at `source` into a PNG written to `target`.
pub fn pack_file(source: &Path, target: &Path, opts: &CodecOptions) -> Result<PackReport> {
    ensure_png_target(target)?;

    let payload = fs::read(source).map_err(|source_err| match source_err.kind() {
        ErrorKind::NotFound => ImgCryptError::InputNotFound(source.to_path_buf()),
        _ => {
            error!("Error reading {source:?}: {source_err}");
            ImgCryptError::ReadError { source: source_err }
        }
    })?;

    let Packed {
        mut artifact,
        report,
    } = pack_bytes(&payload, opts)?;
    artifact.save_as(target)?;

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::payload::LengthHeader;

    #[test]
    fn should_record_the_compressed_length_in_the_header() {
        let payload = b"imgcrypt ".repeat(50);
        let packed = pack_bytes(&payload, &CodecOptions::default()).unwrap();
        let header = LengthHeader::parse(packed.artifact.as_bytes()).unwrap();

        assert_eq!(header.declared_len(), packed.report.compressed_len);
        assert!(packed.report.compressed_len < payload.len());
    }

    #[test]
    fn should_pack_an_empty_payload() {
        let packed = pack_bytes(&[], &CodecOptions::default()).unwrap();

        assert_eq!(packed.report.original_len, 0);
        assert!(packed.report.dimension >= 2);
        assert_eq!(packed.report.savings_ratio(), 0.0);
    }

    #[test]
    fn should_accept_expansion_of_incompressible_data() {
        // xorshift noise does not compress
        let mut state = 0x2545_f491_u32;
        let noise: Vec<u8> = (0..4096)
            .map(|_| {
                state ^= state << 13;
                state ^= state >> 17;
                state ^= state << 5;
                state as u8
            })
            .collect();

        let packed = pack_bytes(&noise, &CodecOptions::default()).unwrap();
        assert!(packed.report.compressed_len > noise.len());
        assert!(packed.report.savings_ratio() < 0.0);
    }

    #[test]
    fn should_store_uncompressed_at_level_zero() {
        let payload = vec![0u8; 1000];
        let stored =
            pack_bytes(&payload, &CodecOptions::default().with_compression_level(0)).unwrap();
        let best = pack_bytes(&payload, &CodecOptions::default()).unwrap();

        assert!(stored.report.compressed_len > payload.len());
        assert!(best.report.compressed_len < stored.report.compressed_len);
    }

    #[test]
    fn should_render_console_summary() {
        let report = PackReport {
            original_len: 1000,
            compressed_len: 250,
            dimension: 10,
        };

        assert_eq!(
            report.to_string(),
            "Size: 1000 -> 250 bytes (saved 75.0%)\nImage dimensions: 10x10 px"
        );
    }

    #[test]
    fn should_report_a_missing_input() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = pack_file(
            &dir.path().join("missing.bin"),
            &dir.path().join("out.png"),
            &CodecOptions::default(),
        );

        assert!(matches!(result, Err(ImgCryptError::InputNotFound(_))));
        assert!(!dir.path().join("out.png").exists());
    }
}
