use core::iter::FusedIterator;

use crate::{
  is_png_signature_correct, try_split_off_pod, try_split_off_u32_be, ChunkFilter, ChunkType,
  PngChunk, PngError, PngResult, PNG_SIGNATURE,
};

#[cfg(target_pointer_width = "16")]
compile_error!("this crate assumes 32-bit or bigger pointers!");

/// Reads successive chunks out of PNG bytes.
///
/// * Construction checks the PNG signature.
/// * Each call to [`next_chunk`](Self::next_chunk) reads chunks until it finds
///   one the filter accepts, checking the CRC of *every* chunk it reads along
///   the way.
///
/// Once the reader has reported the end of the data or a bad CRC it stays
/// finished: all further calls report the end of the data. It can also be used
/// as an [`Iterator`] of `PngResult<PngChunk>`, which likewise ends after the
/// first error.
///
/// The reader only borrows the bytes, so you can run any number of readers
/// (with different filters, or on different threads) over the same buffer.
#[derive(Debug, Clone)]
pub struct ChunkReader<'b, 'f> {
  bytes: &'b [u8],
  spare: &'b [u8],
  filter: ChunkFilter<'f>,
}
impl<'b, 'f> ChunkReader<'b, 'f> {
  /// Checks the signature and makes a reader positioned at the first chunk.
  ///
  /// ## Failure
  /// * [`PngError::InvalidSignature`] if there's less than 8 bytes or they
  ///   aren't the [`PNG_SIGNATURE`].
  #[inline]
  pub fn new(bytes: &'b [u8], filter: ChunkFilter<'f>) -> PngResult<Self> {
    if !is_png_signature_correct(bytes) {
      log::debug!("rejecting {} bytes without a png signature", bytes.len());
      return Err(PngError::InvalidSignature);
    }
    Ok(Self { bytes, spare: &bytes[PNG_SIGNATURE.len()..], filter })
  }

  /// Gets the next chunk that the filter accepts.
  ///
  /// * `Ok(Some(chunk))`: the next accepted chunk.
  /// * `Ok(None)`: there's no more chunks. This includes when the final chunk
  ///   is cut off partway through.
  ///
  /// ## Failure
  /// * [`PngError::BadChecksum`] if any chunk read during this call has the
  ///   wrong CRC, even a chunk the filter would have skipped. The reader is
  ///   finished after this.
  pub fn next_chunk(&mut self) -> PngResult<Option<PngChunk<'b>>> {
    loop {
      let offset = self.offset();
      let (chunk, rest) = match split_off_chunk(self.spare) {
        Some(pair) => pair,
        None => {
          if !self.spare.is_empty() {
            log::debug!(
              "ignoring {} trailing bytes at offset {offset}: incomplete chunk",
              self.spare.len()
            );
          }
          self.spare = &[];
          return Ok(None);
        }
      };
      self.spare = rest;
      log::trace!("read {:?} at offset {offset}", chunk);

      let actual = chunk.compute_actual_crc();
      if actual != chunk.declared_crc {
        log::warn!(
          "bad crc for {} chunk at offset {offset}: declared {:#010x}, actual {actual:#010x}",
          chunk.chunk_type,
          chunk.declared_crc
        );
        self.spare = &[];
        return Err(PngError::BadChecksum {
          chunk_type: chunk.chunk_type,
          declared: chunk.declared_crc,
          actual,
        });
      }

      if self.filter.accepts(chunk.chunk_type) {
        return Ok(Some(chunk));
      }
      log::trace!("skipping {} chunk, not in filter", chunk.chunk_type);
    }
  }

  /// Byte offset of the cursor within the full input (8 for a new reader).
  #[inline]
  #[must_use]
  pub fn offset(&self) -> usize {
    self.bytes.len() - self.spare.len()
  }

  /// The bytes that haven't been read yet.
  #[inline]
  #[must_use]
  pub const fn remaining(&self) -> &'b [u8] {
    self.spare
  }

  /// The filter this reader was made with.
  #[inline]
  #[must_use]
  pub const fn chunk_filter(&self) -> ChunkFilter<'f> {
    self.filter
  }
}
impl<'b> Iterator for ChunkReader<'b, '_> {
  type Item = PngResult<PngChunk<'b>>;
  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    self.next_chunk().transpose()
  }
  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    // every chunk is at least 12 bytes
    (0, Some(self.spare.len() / 12))
  }
}
impl FusedIterator for ChunkReader<'_, '_> {}

/// Splits one whole chunk off the front of the bytes, without checking the CRC.
///
/// Gives `None` if the bytes run out anywhere within the chunk.
fn split_off_chunk(bytes: &[u8]) -> Option<(PngChunk<'_>, &[u8])> {
  let (length, rest) = try_split_off_u32_be(bytes)?;
  // type + data + crc
  if rest.len() < 8 || rest.len() - 8 < length as usize {
    return None;
  }
  let (chunk_type, rest) = try_split_off_pod::<ChunkType>(rest)?;
  let (data, rest) = rest.split_at_checked(length as usize)?;
  let (declared_crc, rest) = try_split_off_u32_be(rest)?;
  Some((PngChunk { length, chunk_type, data, declared_crc }, rest))
}
