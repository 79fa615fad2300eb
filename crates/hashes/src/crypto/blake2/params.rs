//! Parameter block: construction-time configuration of a BLAKE2 state.
//!
//! [`Params`] is a `Copy` builder over borrowed key, salt and personalization
//! bytes. Nothing is validated until a state is built from it, at which point
//! the variant limits apply and the block is folded into the IV.
//!
//! Parameter block layout (RFC 7693, Section 2.5):
//!
//! | field            | BLAKE2b | BLAKE2s |
//! |------------------|---------|---------|
//! | digest length    | 0       | 0       |
//! | key length       | 1       | 1       |
//! | fanout           | 2       | 2       |
//! | depth            | 3       | 3       |
//! | leaf length      | 4..8    | 4..8    |
//! | node offset      | 8..16   | 8..14   |
//! | node depth       | 16      | 14      |
//! | inner length     | 17      | 15      |
//! | reserved         | 18..32  | -       |
//! | salt             | 32..48  | 16..24  |
//! | personalization  | 48..64  | 24..32  |

#![allow(clippy::indexing_slicing)] // Offsets are fixed by the layout and checked by `validate`

use core::fmt;

use traits::ConfigError;
use zeroize::Zeroize;

use super::{variant::Variant, word::Word};

/// Largest parameter block across variants (BLAKE2b: 8 x 8 bytes).
const MAX_PARAM_LEN: usize = 64;

/// Construction parameters for a BLAKE2 state.
///
/// Defaults follow the sequential (non-tree) mode: fanout 1, depth 1, every
/// other tree field 0, no key, no salt, no personalization.
///
/// # Examples
///
/// ```
/// use hashes::crypto::{Blake2b, blake2::Params};
///
/// let params = Params::new(32).key(b"secret").personal(b"my-app v1");
/// let mut h = Blake2b::new(&params)?;
/// h.update(b"message")?;
/// let tag = h.finalize()?;
/// assert_eq!(tag.len(), 32);
/// # Ok::<(), hashes::Error>(())
/// ```
///
/// `Params` holds key bytes, so it has no `PartialEq`: comparing two builders
/// would compare keys in variable time.
///
/// ```compile_fail
/// use hashes::crypto::Params;
///
/// let _ = Params::new(32).key(b"a") == Params::new(32).key(b"b");
/// ```
#[derive(Clone, Copy)]
pub struct Params<'a> {
  digest_len: usize,
  key: &'a [u8],
  salt: &'a [u8],
  personal: &'a [u8],
  fanout: u8,
  depth: u8,
  leaf_len: u32,
  node_offset: u64,
  node_depth: u8,
  inner_len: usize,
  last_node: bool,
}

impl<'a> Params<'a> {
  /// Sequential-mode parameters producing a `digest_len`-byte digest.
  #[inline]
  #[must_use]
  pub const fn new(digest_len: usize) -> Self {
    Self {
      digest_len,
      key: &[],
      salt: &[],
      personal: &[],
      fanout: 1,
      depth: 1,
      leaf_len: 0,
      node_offset: 0,
      node_depth: 0,
      inner_len: 0,
      last_node: false,
    }
  }

  /// Set the digest length in bytes.
  #[inline]
  #[must_use]
  pub const fn digest_len(mut self, digest_len: usize) -> Self {
    self.digest_len = digest_len;
    self
  }

  /// Set the MAC key. An empty key means unkeyed hashing.
  #[inline]
  #[must_use]
  pub const fn key(mut self, key: &'a [u8]) -> Self {
    self.key = key;
    self
  }

  /// Set the salt. Shorter salts are zero-padded to the field width.
  #[inline]
  #[must_use]
  pub const fn salt(mut self, salt: &'a [u8]) -> Self {
    self.salt = salt;
    self
  }

  /// Set the personalization string. Shorter values are zero-padded.
  #[inline]
  #[must_use]
  pub const fn personal(mut self, personal: &'a [u8]) -> Self {
    self.personal = personal;
    self
  }

  /// Set the tree fanout (0 means unlimited).
  #[inline]
  #[must_use]
  pub const fn fanout(mut self, fanout: u8) -> Self {
    self.fanout = fanout;
    self
  }

  /// Set the maximal tree depth (1 for sequential mode).
  #[inline]
  #[must_use]
  pub const fn depth(mut self, depth: u8) -> Self {
    self.depth = depth;
    self
  }

  /// Set the leaf length in bytes (0 means unlimited).
  #[inline]
  #[must_use]
  pub const fn leaf_len(mut self, leaf_len: u32) -> Self {
    self.leaf_len = leaf_len;
    self
  }

  /// Set the node offset within its tree level.
  #[inline]
  #[must_use]
  pub const fn node_offset(mut self, node_offset: u64) -> Self {
    self.node_offset = node_offset;
    self
  }

  /// Set the node depth (0 for leaves).
  #[inline]
  #[must_use]
  pub const fn node_depth(mut self, node_depth: u8) -> Self {
    self.node_depth = node_depth;
    self
  }

  /// Set the inner hash length in bytes (0 for sequential mode).
  #[inline]
  #[must_use]
  pub const fn inner_len(mut self, inner_len: usize) -> Self {
    self.inner_len = inner_len;
    self
  }

  /// Mark this node as the last one of its level.
  ///
  /// Not part of the parameter block: it sets the second finalization flag
  /// when the state is finalized.
  #[inline]
  #[must_use]
  pub const fn last_node(mut self, last_node: bool) -> Self {
    self.last_node = last_node;
    self
  }

  /// Configured digest length in bytes.
  #[inline]
  #[must_use]
  pub const fn output_len(&self) -> usize {
    self.digest_len
  }

  /// Key length in bytes.
  #[inline]
  #[must_use]
  pub const fn key_len(&self) -> usize {
    self.key.len()
  }

  /// Configured key bytes.
  #[inline]
  #[must_use]
  pub(crate) const fn key_bytes(&self) -> &'a [u8] {
    self.key
  }

  /// Whether the last-node flag will be set at finalization.
  #[inline]
  #[must_use]
  pub const fn is_last_node(&self) -> bool {
    self.last_node
  }

  /// Check every field against the limits of `V`.
  pub fn validate<V: Variant>(&self) -> Result<(), ConfigError> {
    if self.digest_len == 0 || self.digest_len > V::OUT_LEN {
      return Err(ConfigError::DigestLength {
        len: self.digest_len,
        max: V::OUT_LEN,
      });
    }
    if self.salt.len() > V::SALT_LEN {
      return Err(ConfigError::SaltLength {
        len: self.salt.len(),
        max: V::SALT_LEN,
      });
    }
    if self.personal.len() > V::PERSONAL_LEN {
      return Err(ConfigError::PersonalLength {
        len: self.personal.len(),
        max: V::PERSONAL_LEN,
      });
    }
    if self.depth == 0 {
      return Err(ConfigError::Depth);
    }
    if self.node_offset > V::MAX_NODE_OFFSET {
      return Err(ConfigError::NodeOffset {
        offset: self.node_offset,
        max: V::MAX_NODE_OFFSET,
      });
    }
    if self.inner_len > V::OUT_LEN {
      return Err(ConfigError::InnerLength {
        len: self.inner_len,
        max: V::OUT_LEN,
      });
    }
    if self.key.len() > V::KEY_LEN {
      return Err(ConfigError::KeyLength {
        len: self.key.len(),
        max: V::KEY_LEN,
      });
    }
    Ok(())
  }

  /// Derive the initial chaining state: IV xor the serialized parameter block.
  pub fn initial_state<V: Variant>(&self) -> Result<[V::Word; 8], ConfigError> {
    self.validate::<V>()?;
    Ok(self.initial_state_unchecked::<V>())
  }

  /// [`Self::initial_state`] for parameters already known to be valid for `V`.
  pub(crate) fn initial_state_unchecked<V: Variant>(&self) -> [V::Word; 8] {
    let mut block = [0u8; MAX_PARAM_LEN];
    self.encode::<V>(&mut block[..V::PARAM_LEN]);

    let mut h = V::IV;
    for (word, chunk) in h.iter_mut().zip(block.chunks_exact(<V::Word as Word>::BYTES)) {
      *word ^= <V::Word as Word>::load_le(chunk);
    }
    block.zeroize();
    h
  }

  /// Serialize into `out`, which is exactly `V::PARAM_LEN` zeroed bytes.
  fn encode<V: Variant>(&self, out: &mut [u8]) {
    debug_assert_eq!(out.len(), V::PARAM_LEN);

    out[0] = self.digest_len as u8;
    out[1] = self.key.len() as u8;
    out[2] = self.fanout;
    out[3] = self.depth;
    out[4..8].copy_from_slice(&self.leaf_len.to_le_bytes());

    let depth_at = 8 + V::NODE_OFFSET_LEN;
    out[8..depth_at].copy_from_slice(&self.node_offset.to_le_bytes()[..V::NODE_OFFSET_LEN]);
    out[depth_at] = self.node_depth;
    out[depth_at + 1] = self.inner_len as u8;

    let salt_at = V::PARAM_LEN / 2;
    out[salt_at..salt_at + self.salt.len()].copy_from_slice(self.salt);

    let personal_at = salt_at + V::SALT_LEN;
    out[personal_at..personal_at + self.personal.len()].copy_from_slice(self.personal);
  }
}

impl fmt::Debug for Params<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    // Key bytes are never printed.
    f.debug_struct("Params")
      .field("digest_len", &self.digest_len)
      .field("key_len", &self.key.len())
      .field("salt", &self.salt)
      .field("personal", &self.personal)
      .field("fanout", &self.fanout)
      .field("depth", &self.depth)
      .field("leaf_len", &self.leaf_len)
      .field("node_offset", &self.node_offset)
      .field("node_depth", &self.node_depth)
      .field("inner_len", &self.inner_len)
      .field("last_node", &self.last_node)
      .finish()
  }
}
