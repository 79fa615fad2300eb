//! Digest serialization and the variable-length digest value.

#![allow(clippy::indexing_slicing)] // `len` never exceeds MAX_DIGEST_LEN (checked at construction)

use core::{fmt, ops::Deref};

use super::word::Word;

/// Largest digest any variant produces (BLAKE2b).
pub const MAX_DIGEST_LEN: usize = 64;

/// A finished BLAKE2 digest of 1 to [`MAX_DIGEST_LEN`] bytes.
///
/// Dereferences to the digest bytes. `{:x}` and `{}` both render lower-case hex.
///
/// Equality is not constant-time; compare MAC tags with a constant-time routine.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Output {
  bytes: [u8; MAX_DIGEST_LEN],
  len: u8,
}

impl Output {
  /// Serialize the chaining state little-endian and keep the first `len` bytes.
  pub(crate) fn from_state<W: Word>(h: &[W; 8], len: usize) -> Self {
    debug_assert!(len >= 1 && len <= 8 * W::BYTES);
    let mut bytes = [0u8; MAX_DIGEST_LEN];
    for (word, chunk) in h.iter().zip(bytes.chunks_exact_mut(W::BYTES)) {
      word.store_le(chunk);
    }
    bytes[len..].fill(0);
    Self { bytes, len: len as u8 }
  }

  /// The digest bytes.
  #[inline]
  #[must_use]
  pub fn as_bytes(&self) -> &[u8] {
    &self.bytes[..self.len as usize]
  }

  /// Digest length in bytes.
  #[inline]
  #[must_use]
  #[allow(clippy::len_without_is_empty)] // A digest is never empty
  pub const fn len(&self) -> usize {
    self.len as usize
  }

  /// Copy the digest into a fixed-size array.
  ///
  /// Returns `None` unless `N` equals the digest length.
  #[inline]
  #[must_use]
  pub fn to_array<const N: usize>(&self) -> Option<[u8; N]> {
    self.as_bytes().try_into().ok()
  }
}

impl Deref for Output {
  type Target = [u8];

  #[inline]
  fn deref(&self) -> &[u8] {
    self.as_bytes()
  }
}

impl AsRef<[u8]> for Output {
  #[inline]
  fn as_ref(&self) -> &[u8] {
    self.as_bytes()
  }
}

impl PartialEq<[u8]> for Output {
  #[inline]
  fn eq(&self, other: &[u8]) -> bool {
    self.as_bytes() == other
  }
}

impl fmt::LowerHex for Output {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for b in self.as_bytes() {
      write!(f, "{b:02x}")?;
    }
    Ok(())
  }
}

impl fmt::Display for Output {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::LowerHex::fmt(self, f)
  }
}

impl fmt::Debug for Output {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Output({self:x})")
  }
}
