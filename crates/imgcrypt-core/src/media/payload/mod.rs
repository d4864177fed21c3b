mod codec;
mod zlib;

pub use codec::*;
pub use zlib::*;

/// The payload codec every artifact is written and read with:
/// zlib compression behind a 4 byte big endian length header.
pub fn artifact_codec(compression_level: u32) -> FramedPayloadCodec<ZlibPayloadCodec> {
    FramedPayloadCodec::new(ZlibPayloadCodec::new(compression_level))
}
