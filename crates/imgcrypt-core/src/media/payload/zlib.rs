use std::io::{self, Write};

use flate2::write::ZlibEncoder;
use flate2::{Compression, Decompress, FlushDecompress, Status};
use log::error;

use super::codec::{PayloadCodec, PayloadDecoder, PayloadEncoder};
use crate::result::Result;
use crate::ImgCryptError;

/// zlib stream compression (deflate with adler32 trailer).
///
/// Always compresses, even when the stream ends up larger than its input.
#[derive(Debug, Clone, Copy)]
pub struct ZlibPayloadCodec {
    level: u32,
}

impl ZlibPayloadCodec {
    pub fn new(level: u32) -> Self {
        Self { level }
    }
}

impl Default for ZlibPayloadCodec {
    fn default() -> Self {
        Self::new(Compression::best().level())
    }
}

impl PayloadEncoder for ZlibPayloadCodec {
    fn encode(&self, content: &[u8]) -> Result<Vec<u8>> {
        let mut encoder = ZlibEncoder::new(
            Vec::with_capacity(content.len() / 2 + 16),
            Compression::new(self.level),
        );
        encoder.write_all(content)?;

        Ok(encoder.finish()?)
    }
}

impl PayloadDecoder for ZlibPayloadCodec {
    fn decode(&self, content: &[u8]) -> Result<Vec<u8>> {
        inflate(content).map_err(|e| {
            error!("Error inflating {} compressed bytes: {e}", content.len());
            ImgCryptError::CorruptData(e)
        })
    }
}

impl PayloadCodec for ZlibPayloadCodec {}

/// Inflates a complete zlib stream. A stream that runs out of input before
/// its end marker is an error, not a short result.
fn inflate(content: &[u8]) -> io::Result<Vec<u8>> {
    let mut inflater = Decompress::new(true);
    let mut out = Vec::with_capacity(content.len().saturating_mul(2).max(64));

    loop {
        if out.len() == out.capacity() {
            out.reserve(out.capacity());
        }
        let consumed = inflater.total_in() as usize;
        let produced = inflater.total_out();

        let status = inflater
            .decompress_vec(&content[consumed..], &mut out, FlushDecompress::None)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        match status {
            Status::StreamEnd => return Ok(out),
            Status::Ok | Status::BufError => {
                let stalled = inflater.total_in() as usize == consumed
                    && inflater.total_out() == produced;
                if stalled {
                    return Err(io::Error::new(
                        io::ErrorKind::UnexpectedEof,
                        "compressed stream ended before its end marker",
                    ));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_restore_compressed_content() {
        let codec = ZlibPayloadCodec::default();
        let content = b"Hello World, Hello World, Hello World".repeat(100);

        let compressed = codec.encode(&content).unwrap();
        assert!(compressed.len() < content.len());
        assert_eq!(codec.decode(&compressed).unwrap(), content);
    }

    #[test]
    fn should_produce_a_zlib_stream() {
        let compressed = ZlibPayloadCodec::default().encode(b"abc").unwrap();
        let (cmf, flg) = (compressed[0] as u16, compressed[1] as u16);
        assert_eq!(cmf & 0x0f, 8, "compression method must be deflate");
        assert_eq!((cmf << 8 | flg) % 31, 0, "zlib header check bits");
    }

    #[test]
    fn should_compress_empty_content_to_a_valid_stream() {
        let codec = ZlibPayloadCodec::default();
        let compressed = codec.encode(&[]).unwrap();

        assert!(!compressed.is_empty());
        assert!(codec.decode(&compressed).unwrap().is_empty());
    }

    #[test]
    fn should_reject_a_truncated_stream() {
        let codec = ZlibPayloadCodec::default();
        let compressed = codec.encode(&[7u8; 4096]).unwrap();

        match codec.decode(&compressed[..compressed.len() - 5]) {
            Err(ImgCryptError::CorruptData(_)) => (),
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn should_reject_a_checksum_mismatch() {
        let codec = ZlibPayloadCodec::default();
        let mut compressed = codec.encode(b"checksummed content").unwrap();
        let last = compressed.len() - 1;
        compressed[last] ^= 0xff;

        assert!(matches!(
            codec.decode(&compressed),
            Err(ImgCryptError::CorruptData(_))
        ));
    }

    #[test]
    fn should_reject_garbage() {
        let codec = ZlibPayloadCodec::default();
        assert!(matches!(
            codec.decode(&[0x12, 0x34, 0x56, 0x78, 0x9a]),
            Err(ImgCryptError::CorruptData(_))
        ));
    }
}
