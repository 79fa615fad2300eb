//! Lane primitives shared by the 64-bit (BLAKE2b) and 32-bit (BLAKE2s) variants.

use core::{
  fmt::Debug,
  ops::{BitXor, BitXorAssign},
};

use zeroize::Zeroize;

/// An unsigned machine word used as a BLAKE2 lane.
///
/// Implemented for `u64` and `u32` only. All arithmetic is modular.
pub trait Word:
  Copy + Eq + Ord + Debug + BitXor<Output = Self> + BitXorAssign + Zeroize + Send + Sync + 'static
{
  /// Width in bytes.
  const BYTES: usize;
  /// All bits clear.
  const ZERO: Self;
  /// Value one, used to carry into the high counter word.
  const ONE: Self;
  /// All bits set, used for the finalization flags.
  const MAX: Self;

  /// Modular addition.
  fn wrapping_add(self, rhs: Self) -> Self;

  /// Rotate right by `n` bits.
  fn rotr(self, n: u32) -> Self;

  /// Convert a byte count no larger than one block.
  fn from_block_len(len: usize) -> Self;

  /// Read a word from exactly [`Self::BYTES`] little-endian bytes.
  fn load_le(bytes: &[u8]) -> Self;

  /// Write the word to exactly [`Self::BYTES`] bytes, little-endian.
  fn store_le(self, out: &mut [u8]);
}

macro_rules! impl_word {
  ($t:ty) => {
    impl Word for $t {
      const BYTES: usize = core::mem::size_of::<$t>();
      const ZERO: Self = 0;
      const ONE: Self = 1;
      const MAX: Self = <$t>::MAX;

      #[inline(always)]
      fn wrapping_add(self, rhs: Self) -> Self {
        <$t>::wrapping_add(self, rhs)
      }

      #[inline(always)]
      fn rotr(self, n: u32) -> Self {
        self.rotate_right(n)
      }

      #[inline(always)]
      fn from_block_len(len: usize) -> Self {
        debug_assert!(len <= 128);
        len as $t
      }

      #[inline(always)]
      fn load_le(bytes: &[u8]) -> Self {
        let mut raw = [0u8; core::mem::size_of::<$t>()];
        raw.copy_from_slice(bytes);
        <$t>::from_le_bytes(raw)
      }

      #[inline(always)]
      fn store_le(self, out: &mut [u8]) {
        out.copy_from_slice(&self.to_le_bytes());
      }
    }
  };
}

impl_word!(u64);
impl_word!(u32);

/// Read one block of little-endian bytes as 16 message words.
#[inline(always)]
pub(crate) fn load_block<W: Word>(block: &[u8]) -> [W; 16] {
  debug_assert_eq!(block.len(), 16 * W::BYTES);
  let mut m = [W::ZERO; 16];
  for (word, chunk) in m.iter_mut().zip(block.chunks_exact(W::BYTES)) {
    *word = W::load_le(chunk);
  }
  m
}
