use crate::ChunkType;

/// A single chunk from a PNG.
///
/// The data is a view into the buffer the chunk was read from, so the chunk
/// can't outlive that buffer. The reader only ever hands these out after the
/// CRC has been checked.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PngChunk<'b> {
  pub(crate) length: u32,
  pub(crate) chunk_type: ChunkType,
  pub(crate) data: &'b [u8],
  pub(crate) declared_crc: u32,
}
impl<'b> PngChunk<'b> {
  /// The length as declared in the data stream.
  ///
  /// Always the same as `self.data().len()`.
  #[inline]
  #[must_use]
  pub const fn length(&self) -> u32 {
    self.length
  }
  /// The 4 byte type tag.
  #[inline]
  #[must_use]
  pub const fn chunk_type(&self) -> ChunkType {
    self.chunk_type
  }
  /// The chunk's payload.
  #[inline]
  #[must_use]
  pub const fn data(&self) -> &'b [u8] {
    self.data
  }
  /// The CRC that was stored in the data stream.
  #[inline]
  #[must_use]
  pub const fn declared_crc(&self) -> u32 {
    self.declared_crc
  }
  /// Computes the CRC of the type and data.
  #[inline]
  #[must_use]
  pub fn compute_actual_crc(&self) -> u32 {
    png_crc(self.chunk_type.as_bytes(), self.data)
  }
  /// If the declared CRC matches the actual CRC.
  #[inline]
  #[must_use]
  pub fn is_crc_valid(&self) -> bool {
    self.declared_crc == self.compute_actual_crc()
  }
  /// Copies the data out so it can outlive the source buffer.
  #[cfg(feature = "alloc")]
  #[cfg_attr(docs_rs, doc(cfg(feature = "alloc")))]
  #[inline]
  #[must_use]
  pub fn to_vec(&self) -> alloc::vec::Vec<u8> {
    self.data.to_vec()
  }
}
impl core::fmt::Debug for PngChunk<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    // Note: image data chunks can be huge, only show the start of the data.
    f.debug_struct("PngChunk")
      .field("length", &self.length)
      .field("chunk_type", &self.chunk_type)
      .field("data", &(&self.data[..self.data.len().min(12)], self.data.len()))
      .field("declared_crc", &self.declared_crc)
      .finish()
  }
}

/// Reflected CRC-32 lookup table for the PNG (ISO 3309, "IEEE") polynomial.
const CRC_TABLE: [u32; 256] = {
  const POLY: u32 = 0xEDB8_8320;
  let mut table = [0_u32; 256];
  let mut i = 0;
  while i < table.len() {
    let mut bit = 0;
    let mut crc = i as u32;
    while bit < 8 {
      crc = (crc >> 1) ^ if crc & 1 == 1 { POLY } else { 0 };
      bit += 1;
    }
    table[i] = crc;
    i += 1;
  }
  table
};

/// Computes the CRC of a chunk from its type and data bytes.
///
/// This is the value a chunk's declared CRC must match.
#[inline]
#[must_use]
pub fn png_crc(chunk_type: &[u8; 4], data: &[u8]) -> u32 {
  !chunk_type.iter().chain(data).fold(u32::MAX, |crc, &byte| {
    CRC_TABLE[usize::from(crc as u8 ^ byte)] ^ (crc >> 8)
  })
}
