//! # imgcrypt Core API
//!
//! Packs the bytes of any file into the pixels of a lossless PNG image, and
//! restores them byte for byte. The embedded stream is laid out as
//!
//! ```text
//! [u32 big endian compressed length][zlib stream][zero padding]
//! ```
//!
//! filling the smallest square RGB image that holds it, three bytes per pixel,
//! row by row.
//!
//! # Usage Examples
//!
//! ## Pack a file into an image
//!
//! ```rust
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//!
//! let report = imgcrypt_core::api::pack::prepare()
//!     .from_file("Cargo.toml")              // the file to pack
//!     .into_image(temp_dir.path().join("Cargo.toml.png"))
//!     .execute()
//!     .expect("Failed to pack file into image");
//!
//! println!("{report}");
//! ```
//!
//! ## Unpack a file from an image
//!
//! ```rust
//! # use tempfile::tempdir;
//! # let temp_dir = tempdir().expect("Failed to create temporary directory");
//! # imgcrypt_core::api::pack::prepare()
//! #     .from_file("Cargo.toml")
//! #     .into_image(temp_dir.path().join("Cargo.toml.png"))
//! #     .execute()
//! #     .expect("Failed to pack file into image");
//! imgcrypt_core::api::unpack::prepare()
//!     .from_image(temp_dir.path().join("Cargo.toml.png"))
//!     .into_file(temp_dir.path().join("Cargo.toml"))
//!     .execute()
//!     .expect("Failed to unpack file from image");
//! ```
//!
//! ## In memory
//!
//! ```rust
//! use imgcrypt_core::{pack_bytes, unpack_image, CodecOptions};
//!
//! let packed = pack_bytes(b"Hello World", &CodecOptions::default()).unwrap();
//! let restored = unpack_image(packed.artifact.image()).unwrap();
//!
//! assert_eq!(restored, b"Hello World");
//! ```

#![warn(clippy::redundant_else)]

pub mod api;
pub mod commands;
pub mod error;
pub mod media;
pub mod packer;
pub mod result;
pub mod unpacker;

pub use crate::error::ImgCryptError;
pub use crate::media::{Artifact, CodecOptions, Persist, PngCompression};
pub use crate::packer::{pack_bytes, pack_file, PackReport, Packed};
pub use crate::result::Result;
pub use crate::unpacker::{unpack_file, unpack_image, UnpackReport};
