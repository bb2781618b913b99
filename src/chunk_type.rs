use core::fmt::Write;

use bytemuck::{Pod, Zeroable};

/// The 4 byte type tag of a PNG chunk.
///
/// There's no actual enforced encoding! Chunk types are *supposed* to be four
/// ascii letters, but the reader never checks that. The `Debug` and `Display`
/// impls will just `as` cast each byte into a character, which works as
/// expected for ascii and is still safe for anything else.
///
/// The case of each letter is meaningful in PNG: bit 5 of each byte is a
/// property flag. See the `is_` methods.
#[derive(Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(Zeroable, Pod)]
#[repr(transparent)]
pub struct ChunkType(pub [u8; 4]);

#[allow(nonstandard_style)]
impl ChunkType {
  /// Image header
  pub const IHDR: Self = Self(*b"IHDR");
  /// Palette
  pub const PLTE: Self = Self(*b"PLTE");
  /// Image data
  pub const IDAT: Self = Self(*b"IDAT");
  /// Image end
  pub const IEND: Self = Self(*b"IEND");
  /// Transparency
  pub const tRNS: Self = Self(*b"tRNS");
  /// Background color
  pub const bKGD: Self = Self(*b"bKGD");
  /// Chromaticities and white point
  pub const cHRM: Self = Self(*b"cHRM");
  /// Image gamma
  pub const gAMA: Self = Self(*b"gAMA");
  /// Embedded ICC profile
  pub const iCCP: Self = Self(*b"iCCP");
  /// Significant bits
  pub const sBIT: Self = Self(*b"sBIT");
  /// Standard RGB color space
  pub const sRGB: Self = Self(*b"sRGB");
  /// Latin-1 text
  pub const tEXt: Self = Self(*b"tEXt");
  /// Compressed latin-1 text
  pub const zTXt: Self = Self(*b"zTXt");
  /// International (utf-8) text
  pub const iTXt: Self = Self(*b"iTXt");
  /// Physical pixel dimensions
  pub const pHYs: Self = Self(*b"pHYs");
  /// Last modification time
  pub const tIME: Self = Self(*b"tIME");
  /// Exif data
  pub const eXIf: Self = Self(*b"eXIf");

  /// The raw tag bytes.
  #[inline]
  #[must_use]
  pub const fn as_bytes(&self) -> &[u8; 4] {
    &self.0
  }

  /// The tag as a `str`, or `None` if the bytes aren't utf-8.
  #[inline]
  #[must_use]
  pub fn as_str(&self) -> Option<&str> {
    core::str::from_utf8(&self.0).ok()
  }

  /// If the tag equals the string given, byte for byte.
  ///
  /// No case folding is done, `"idat"` does not match `IDAT`.
  #[inline]
  #[must_use]
  pub fn matches_str(&self, s: &str) -> bool {
    self.0.as_slice() == s.as_bytes()
  }

  /// Critical chunks must be understood to display the image.
  ///
  /// Uppercase first letter.
  #[inline]
  #[must_use]
  pub const fn is_critical(self) -> bool {
    (self.0[0] & 32) == 0
  }

  /// Public chunks are part of the PNG spec or registered extensions.
  ///
  /// Uppercase second letter.
  #[inline]
  #[must_use]
  pub const fn is_public(self) -> bool {
    (self.0[1] & 32) == 0
  }

  /// All current PNG chunk types have an uppercase third letter.
  #[inline]
  #[must_use]
  pub const fn is_reserved_bit_valid(self) -> bool {
    (self.0[2] & 32) == 0
  }

  /// Editors may copy unrecognized safe-to-copy chunks into a modified image.
  ///
  /// Lowercase fourth letter.
  #[inline]
  #[must_use]
  pub const fn is_safe_to_copy(self) -> bool {
    (self.0[3] & 32) != 0
  }
}

impl core::fmt::Debug for ChunkType {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_char('\"')?;
    core::fmt::Display::fmt(self, f)?;
    f.write_char('\"')?;
    Ok(())
  }
}
impl core::fmt::Display for ChunkType {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    for ch in self.0.iter().copied().map(|u| u as char) {
      f.write_char(ch)?;
    }
    Ok(())
  }
}

impl From<[u8; 4]> for ChunkType {
  #[inline]
  fn from(array: [u8; 4]) -> Self {
    Self(array)
  }
}
impl From<ChunkType> for [u8; 4] {
  #[inline]
  fn from(ty: ChunkType) -> Self {
    ty.0
  }
}
impl PartialEq<str> for ChunkType {
  #[inline]
  fn eq(&self, other: &str) -> bool {
    self.matches_str(other)
  }
}
impl PartialEq<&str> for ChunkType {
  #[inline]
  fn eq(&self, other: &&str) -> bool {
    self.matches_str(other)
  }
}

