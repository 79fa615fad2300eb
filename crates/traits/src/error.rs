//! Error types for BLAKE2 state construction and use.
//!
//! Two disjoint failure classes exist:
//!
//! - [`ConfigError`] - a parameter was rejected while building a hash state.
//! - [`StateError`] - a hash state was used after it reached its terminal state.
//!
//! Neither is transient: nothing here is retryable, and no I/O is involved.
//! [`Error`] unifies both for callers that drive construction and hashing
//! through a single `Result`.

use thiserror::Error;

/// A parameter was rejected while building a hash state.
///
/// Every variant carries the offending value and the bound it violated, so
/// callers can report the problem without re-deriving the variant limits.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ConfigError {
  /// Digest length was zero or above the variant maximum.
  #[error("digest length must be between 1 and {max} bytes (got {len})")]
  DigestLength {
    /// Requested digest length in bytes.
    len: usize,
    /// Variant maximum in bytes.
    max: usize,
  },

  /// Key was longer than the variant maximum.
  #[error("maximum key length is {max} bytes (got {len})")]
  KeyLength {
    /// Supplied key length in bytes.
    len: usize,
    /// Variant maximum in bytes.
    max: usize,
  },

  /// Salt was longer than the variant salt width.
  #[error("maximum salt length is {max} bytes (got {len})")]
  SaltLength {
    /// Supplied salt length in bytes.
    len: usize,
    /// Variant salt width in bytes.
    max: usize,
  },

  /// Personalization was longer than the variant personalization width.
  #[error("maximum personalization length is {max} bytes (got {len})")]
  PersonalLength {
    /// Supplied personalization length in bytes.
    len: usize,
    /// Variant personalization width in bytes.
    max: usize,
  },

  /// Tree depth was zero.
  #[error("depth must be between 1 and 255")]
  Depth,

  /// Node offset does not fit the variant's node offset field.
  #[error("node offset {offset} is too large (maximum {max})")]
  NodeOffset {
    /// Supplied node offset.
    offset: u64,
    /// Largest encodable node offset.
    max: u64,
  },

  /// Inner hash length was above the variant maximum digest length.
  #[error("inner length must be between 0 and {max} bytes (got {len})")]
  InnerLength {
    /// Supplied inner length in bytes.
    len: usize,
    /// Variant maximum in bytes.
    max: usize,
  },
}

/// A hash state was used after it was finalized.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum StateError {
  /// `update` or `finalize` was called on a state that already produced its digest.
  #[error("hash state already finalized")]
  Finalized,
}

/// Any error produced while constructing or driving a hash state.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Error {
  /// Construction rejected a parameter.
  #[error(transparent)]
  Config(#[from] ConfigError),

  /// The state was misused after finalization.
  #[error(transparent)]
  State(#[from] StateError),
}
