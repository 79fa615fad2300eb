//! BLAKE2s (RFC 7693): 32-bit lanes, 10 rounds, digests of 1 to 32 bytes.
//!
//! Suited to 8- to 32-bit targets. Node offsets are limited to 48 bits.

use traits::Digest;

use super::blake2::{State, Variant, variant::Sealed};

/// BLAKE2s parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Blake2sVariant {}

impl Sealed for Blake2sVariant {}

impl Variant for Blake2sVariant {
  type Word = u32;
  type Block = [u8; 64];

  const NAME: &'static str = "blake2s";
  const ZERO_BLOCK: Self::Block = [0u8; 64];
  const BLOCK_LEN: usize = 64;
  const OUT_LEN: usize = 32;
  const KEY_LEN: usize = 32;
  const SALT_LEN: usize = 8;
  const PERSONAL_LEN: usize = 8;
  const NODE_OFFSET_LEN: usize = 6;
  const ROUNDS: usize = 10;
  const ROTATIONS: [u32; 4] = [16, 12, 8, 7];

  const IV: [u32; 8] = [
    0x6A09_E667,
    0xBB67_AE85,
    0x3C6E_F372,
    0xA54F_F53A,
    0x510E_527F,
    0x9B05_688C,
    0x1F83_D9AB,
    0x5BE0_CD19,
  ];
}

/// Configurable BLAKE2s state. See [`State`].
pub type Blake2s = State<Blake2sVariant>;

/// BLAKE2s-256: unkeyed, 32-byte digest.
#[derive(Clone, Default)]
pub struct Blake2s256(Blake2s);

impl core::fmt::Debug for Blake2s256 {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_tuple("Blake2s256").finish_non_exhaustive()
  }
}

impl Digest for Blake2s256 {
  const OUTPUT_SIZE: usize = 32;
  type Output = [u8; 32];

  #[inline]
  fn new() -> Self {
    Self::default()
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    self.0.absorb(data);
  }

  fn finalize(&self) -> Self::Output {
    let digest = self.0.clone().finish();
    let mut out = [0u8; 32];
    out.copy_from_slice(digest.as_bytes());
    out
  }

  #[inline]
  fn reset(&mut self) {
    *self = Self::default();
  }
}
