use crate::ChunkType;

/// An error from the `pngr` crate.
///
/// Running out of data is *not* an error, the reader just reports that there's
/// no more chunks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PngError {
  /// The data is shorter than 8 bytes, or doesn't start with the
  /// [`PNG_SIGNATURE`](crate::PNG_SIGNATURE).
  #[error("missing png file header")]
  InvalidSignature,

  /// A chunk's declared CRC didn't match the CRC of its type and data.
  ///
  /// This means the data stream is corrupt.
  #[error("bad crc for {chunk_type} chunk: declared {declared:#010x}, actual {actual:#010x}")]
  BadChecksum {
    /// Type of the bad chunk.
    chunk_type: ChunkType,
    /// The CRC stored in the data stream.
    declared: u32,
    /// The CRC computed from the chunk's type and data.
    actual: u32,
  },
}

/// Shorthand for results with a [`PngError`].
pub type PngResult<T> = Result<T, PngError>;
