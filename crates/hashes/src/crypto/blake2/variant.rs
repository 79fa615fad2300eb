//! Variant description: lane width, round schedule, and parameter limits.

use zeroize::Zeroize;

use super::word::Word;

mod private {
  pub trait Sealed {}
}

pub(crate) use private::Sealed;

/// Compile-time description of one BLAKE2 variant.
///
/// Sealed: the only implementors are [`Blake2bVariant`](crate::crypto::blake2b::Blake2bVariant)
/// and [`Blake2sVariant`](crate::crypto::blake2s::Blake2sVariant). Everything the
/// generic compression and state code needs to know about a variant lives here.
pub trait Variant: Sealed + Copy + Send + Sync + 'static {
  /// Lane type (`u64` for BLAKE2b, `u32` for BLAKE2s).
  type Word: Word;

  /// Block buffer type, exactly [`Self::BLOCK_LEN`] bytes.
  type Block: Copy + AsRef<[u8]> + AsMut<[u8]> + Zeroize + Send + Sync;

  /// Lower-case algorithm name.
  const NAME: &'static str;

  /// An all-zero block.
  const ZERO_BLOCK: Self::Block;

  /// Block size in bytes (16 words).
  const BLOCK_LEN: usize;

  /// Maximum digest length in bytes.
  const OUT_LEN: usize;

  /// Maximum key length in bytes.
  const KEY_LEN: usize;

  /// Salt field width in bytes.
  const SALT_LEN: usize;

  /// Personalization field width in bytes.
  const PERSONAL_LEN: usize;

  /// Width of the node offset field in the parameter block.
  const NODE_OFFSET_LEN: usize;

  /// Number of mixing rounds.
  const ROUNDS: usize;

  /// Rotation distances `(R1, R2, R3, R4)` of the `G` function.
  const ROTATIONS: [u32; 4];

  /// Initialization vector.
  const IV: [Self::Word; 8];

  /// Parameter block size in bytes (8 words).
  const PARAM_LEN: usize = 8 * <Self::Word as Word>::BYTES;

  /// Largest encodable node offset.
  const MAX_NODE_OFFSET: u64 = if Self::NODE_OFFSET_LEN >= 8 {
    u64::MAX
  } else {
    (1u64 << (8 * Self::NODE_OFFSET_LEN)) - 1
  };
}
