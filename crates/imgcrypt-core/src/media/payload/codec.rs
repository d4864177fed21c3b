use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use log::debug;

use crate::result::Result;
use crate::ImgCryptError;

/// Size of the big endian length prefix in front of every compressed payload
pub const HEADER_LEN: usize = 4;

pub trait PayloadEncoder {
    fn encode(&self, content: &[u8]) -> Result<Vec<u8>>;
}

pub trait PayloadDecoder {
    fn decode(&self, content: &[u8]) -> Result<Vec<u8>>;
}

pub trait PayloadCodec: PayloadEncoder + PayloadDecoder {}

/// The 4 byte prefix that records how many compressed bytes follow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthHeader(u32);

impl LengthHeader {
    pub fn for_payload(payload: &[u8]) -> Result<Self> {
        u32::try_from(payload.len())
            .map(Self)
            .map_err(|_| ImgCryptError::PayloadTooLarge(payload.len()))
    }

    /// Reads the header from the first 4 bytes of `data`
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() < HEADER_LEN {
            return Err(ImgCryptError::TruncatedData {
                expected: HEADER_LEN,
                available: data.len(),
            });
        }
        let mut header = &data[..HEADER_LEN];

        Ok(Self(header.read_u32::<BigEndian>()?))
    }

    pub fn declared_len(&self) -> usize {
        self.0 as usize
    }

    /// Length of header plus the payload it announces
    pub fn framed_len(&self) -> usize {
        HEADER_LEN + self.declared_len()
    }

    pub fn to_bytes(self) -> [u8; HEADER_LEN] {
        self.0.to_be_bytes()
    }
}

impl From<LengthHeader> for u32 {
    fn from(value: LengthHeader) -> Self {
        value.0
    }
}

/// Prefixes `payload` with its length header
pub fn frame(payload: &[u8]) -> Result<Vec<u8>> {
    let header = LengthHeader::for_payload(payload)?;
    let mut buffer = Vec::with_capacity(header.framed_len());
    buffer.write_u32::<BigEndian>(header.into())?;
    buffer.extend_from_slice(payload);

    Ok(buffer)
}

/// Returns exactly the bytes announced by the leading length header,
/// everything behind them (padding) is ignored.
pub fn unframe(data: &[u8]) -> Result<&[u8]> {
    let header = LengthHeader::parse(data)?;
    let end = header.framed_len();
    if end > data.len() {
        return Err(ImgCryptError::TruncatedData {
            expected: end,
            available: data.len(),
        });
    }
    debug!(
        "length header announces {} bytes, {} trailing bytes ignored",
        header.declared_len(),
        data.len() - end
    );

    Ok(&data[HEADER_LEN..end])
}

/// Composes a compression stage with the length header framing.
pub struct FramedPayloadCodec<C> {
    inner: C,
}

impl<C> FramedPayloadCodec<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }
}

impl<C: PayloadCodec> PayloadEncoder for FramedPayloadCodec<C> {
    fn encode(&self, content: &[u8]) -> Result<Vec<u8>> {
        frame(&self.inner.encode(content)?)
    }
}

impl<C: PayloadCodec> PayloadDecoder for FramedPayloadCodec<C> {
    fn decode(&self, content: &[u8]) -> Result<Vec<u8>> {
        self.inner.decode(unframe(content)?)
    }
}

impl<C: PayloadCodec> PayloadCodec for FramedPayloadCodec<C> {}
