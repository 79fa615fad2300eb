//! BLAKE2b (RFC 7693): 64-bit lanes, 12 rounds, digests of 1 to 64 bytes.
//!
//! [`Blake2b`] is the configurable, single-use state (keyed, salted,
//! personalized, tree parameters). [`Blake2b512`] is the fixed 64-byte unkeyed
//! hasher behind the [`Digest`] trait.

use traits::Digest;

use super::blake2::{State, Variant, variant::Sealed};

/// BLAKE2b parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Blake2bVariant {}

impl Sealed for Blake2bVariant {}

impl Variant for Blake2bVariant {
  type Word = u64;
  type Block = [u8; 128];

  const NAME: &'static str = "blake2b";
  const ZERO_BLOCK: Self::Block = [0u8; 128];
  const BLOCK_LEN: usize = 128;
  const OUT_LEN: usize = 64;
  const KEY_LEN: usize = 64;
  const SALT_LEN: usize = 16;
  const PERSONAL_LEN: usize = 16;
  const NODE_OFFSET_LEN: usize = 8;
  const ROUNDS: usize = 12;
  const ROTATIONS: [u32; 4] = [32, 24, 16, 63];

  const IV: [u64; 8] = [
    0x6a09_e667_f3bc_c908,
    0xbb67_ae85_84ca_a73b,
    0x3c6e_f372_fe94_f82b,
    0xa54f_f53a_5f1d_36f1,
    0x510e_527f_ade6_82d1,
    0x9b05_688c_2b3e_6c1f,
    0x1f83_d9ab_fb41_bd6b,
    0x5be0_cd19_137e_2179,
  ];
}

/// Configurable BLAKE2b state. See [`State`].
pub type Blake2b = State<Blake2bVariant>;

/// BLAKE2b-512: unkeyed, 64-byte digest.
///
/// `finalize` works on a copy of the state, so the hasher stays usable.
#[derive(Clone, Default)]
pub struct Blake2b512(Blake2b);

impl core::fmt::Debug for Blake2b512 {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_tuple("Blake2b512").finish_non_exhaustive()
  }
}

impl Digest for Blake2b512 {
  const OUTPUT_SIZE: usize = 64;
  type Output = [u8; 64];

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
    let mut out = [0u8; 64];
    out.copy_from_slice(digest.as_bytes());
    out
  }

  #[inline]
  fn reset(&mut self) {
    *self = Self::default();
  }
}
