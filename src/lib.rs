#![no_std]
#![cfg_attr(docs_rs, feature(doc_cfg))]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! A crate for reading the chunk structure of PNG data.
//!
//! A PNG data stream is an 8 byte signature followed by a series of
//! "chunks". Each chunk is laid out like this:
//!
//! ```text
//! | length: u32 BE | type: [u8; 4] | data: [u8; length] | crc: u32 BE |
//! ```
//!
//! The CRC covers the type bytes and the data bytes (not the length).
//!
//! The [`ChunkReader`] checks the signature, then walks the chunks one at a
//! time, verifying each CRC as it goes. All chunk data is returned as
//! sub-slices of your input buffer, nothing is copied.
//!
//! ```
//! use pngr::*;
//! # fn main() -> Result<(), PngError> {
//! # let bytes: &[u8] = &[137, 80, 78, 71, 13, 10, 26, 10, 0, 0, 0, 0, 73, 69, 78, 68, 174, 66, 96, 130];
//! let mut reader = ChunkReader::new(bytes, ChunkFilter::all())?;
//! while let Some(chunk) = reader.next_chunk()? {
//!   println!("{}: {} bytes", chunk.chunk_type(), chunk.data().len());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Filtering
//!
//! Pass a [`ChunkFilter`] to only get back the chunk types you care about.
//! Chunks of other types are still read and still have their CRC checked,
//! they're just not handed to you.
//!
//! ## What This Crate Doesn't Do
//!
//! * It doesn't interpret chunk data at all (no header parsing, no
//!   decompression, no pixels).
//! * It doesn't check any of the chunk ordering rules.
//! * It doesn't write PNG data.
//!
//! ## Truncated Data
//!
//! If the final chunk of the buffer is cut off partway through, the reader
//! treats that the same as reaching the end of the data. Only a CRC mismatch
//! is a hard error once the signature has been accepted.

#[cfg(feature = "alloc")]
extern crate alloc;

mod parser_helpers;
pub(crate) use parser_helpers::*;

mod chunk_type;
pub use chunk_type::*;

mod chunk;
pub use chunk::*;

mod error;
pub use error::*;

mod filter;
pub use filter::*;

mod reader;
pub use reader::*;


/// The 8 bytes that every PNG data stream must start with.
pub const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Checks if the bytes given begin with the [`PNG_SIGNATURE`].
#[inline]
#[must_use]
pub fn is_png_signature_correct(bytes: &[u8]) -> bool {
  bytes.get(..8) == Some(PNG_SIGNATURE.as_slice())
}
