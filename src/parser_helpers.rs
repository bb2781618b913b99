//! Just has shorthands for splitting fixed size fields off the front of a
//! byte slice.

use bytemuck::Pod;

/// Splits a `T` off the front of the slice, if there's enough bytes.
///
/// The bytes are copied out as-is, so this is only for types where any bit
/// pattern is valid and the byte order doesn't matter.
#[inline]
#[must_use]
pub fn try_split_off_pod<T: Pod>(bytes: &[u8]) -> Option<(T, &[u8])> {
  let (head, tail) = bytes.split_at_checked(core::mem::size_of::<T>())?;
  let t: T = bytemuck::try_pod_read_unaligned(head).ok()?;
  Some((t, tail))
}

/// Splits a big-endian `u32` off the front of the slice.
#[inline]
#[must_use]
pub fn try_split_off_u32_be(bytes: &[u8]) -> Option<(u32, &[u8])> {
  try_split_off_pod::<[u8; 4]>(bytes).map(|(a, tail)| (u32::from_be_bytes(a), tail))
}
