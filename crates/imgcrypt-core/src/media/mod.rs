pub mod codec_options;
pub mod image;
pub mod payload;
mod persist;
mod types;

use std::path::Path;

pub use codec_options::{CodecOptions, PngCompression};
pub use persist::write_atomically;
pub use types::*;

pub trait Persist {
    fn save_as(&mut self, _: &Path) -> crate::Result<()>;
}
