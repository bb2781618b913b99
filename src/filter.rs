use crate::ChunkType;

/// Decides which chunk types a [`ChunkReader`](crate::ChunkReader) hands back.
///
/// * [`all`](Self::all) accepts every chunk.
/// * [`only`](Self::only) accepts just the listed types. Matching is exact byte
///   equality between the tag and the string: no wildcards, no case folding.
///   An empty list is the same as `all`.
///
/// Chunks that the filter rejects are still fully read (and CRC checked) by
/// the reader, they're just skipped over instead of returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ChunkFilter<'f> {
  allowed: Option<&'f [&'f str]>,
}
impl<'f> ChunkFilter<'f> {
  /// A filter that accepts every chunk type.
  #[inline]
  #[must_use]
  pub const fn all() -> Self {
    Self { allowed: None }
  }

  /// A filter that accepts only the chunk types listed.
  #[inline]
  #[must_use]
  pub const fn only(allowed: &'f [&'f str]) -> Self {
    if allowed.is_empty() {
      Self::all()
    } else {
      Self { allowed: Some(allowed) }
    }
  }

  /// The allow-list, or `None` if every type is accepted.
  #[inline]
  #[must_use]
  pub const fn allowed(&self) -> Option<&'f [&'f str]> {
    self.allowed
  }

  /// If this filter lets the given chunk type through.
  #[inline]
  #[must_use]
  pub fn accepts(&self, chunk_type: ChunkType) -> bool {
    match self.allowed {
      None => true,
      Some(allowed) => allowed.iter().any(|s| chunk_type.matches_str(s)),
    }
  }
}
impl<'f> From<Option<&'f [&'f str]>> for ChunkFilter<'f> {
  #[inline]
  fn from(opt: Option<&'f [&'f str]>) -> Self {
    match opt {
      None => Self::all(),
      Some(allowed) => Self::only(allowed),
    }
  }
}
impl<'f> From<&'f [&'f str]> for ChunkFilter<'f> {
  #[inline]
  fn from(allowed: &'f [&'f str]) -> Self {
    Self::only(allowed)
  }
}
