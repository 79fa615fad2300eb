//! BLAKE2 hashing with the variant chosen at runtime.
//!
//! A thin facade over [`hashes::crypto`]: pick an [`Algorithm`], build a
//! [`Hasher`] from [`Params`], feed it, and finalize once.
//!
//! ```
//! use rsblake2::{Algorithm, Params};
//!
//! let mut h = rsblake2::create(Algorithm::Blake2s, &Params::new(32))?;
//! h.update(b"cats")?;
//! let digest = h.finalize()?;
//! assert_eq!(
//!   digest.to_string(),
//!   "c473a8d190c3867bdaf6529e8d8531925e824cff07f17d489233fde665979f0c"
//! );
//!
//! let same = rsblake2::hash(Algorithm::Blake2s, &Params::new(32), b"cats")?;
//! assert_eq!(same, digest);
//! # Ok::<(), rsblake2::Error>(())
//! ```
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

use core::fmt;

use hashes::crypto::{Blake2b, Blake2s, blake2::Variant, blake2b::Blake2bVariant, blake2s::Blake2sVariant};
pub use hashes::crypto::{Output, Params};
pub use traits::{ConfigError, Error, StateError};

/// BLAKE2 variant selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
  /// 64-bit lanes, digests up to 64 bytes.
  Blake2b,
  /// 32-bit lanes, digests up to 32 bytes.
  Blake2s,
}

impl Algorithm {
  /// Look up a variant by its lower-case name.
  #[must_use]
  pub fn from_name(name: &str) -> Option<Self> {
    match name {
      "blake2b" => Some(Self::Blake2b),
      "blake2s" => Some(Self::Blake2s),
      _ => None,
    }
  }

  /// Lower-case name (`"blake2b"` or `"blake2s"`).
  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Self::Blake2b => Blake2bVariant::NAME,
      Self::Blake2s => Blake2sVariant::NAME,
    }
  }

  /// Block size in bytes.
  #[must_use]
  pub const fn block_len(self) -> usize {
    match self {
      Self::Blake2b => Blake2bVariant::BLOCK_LEN,
      Self::Blake2s => Blake2sVariant::BLOCK_LEN,
    }
  }

  /// Largest digest (and key) length in bytes.
  #[must_use]
  pub const fn max_digest_len(self) -> usize {
    match self {
      Self::Blake2b => Blake2bVariant::OUT_LEN,
      Self::Blake2s => Blake2sVariant::OUT_LEN,
    }
  }
}

impl fmt::Display for Algorithm {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

/// A single-use hash state of either variant.
#[derive(Clone, Debug)]
pub enum Hasher {
  /// BLAKE2b state.
  Blake2b(Blake2b),
  /// BLAKE2s state.
  Blake2s(Blake2s),
}

impl Hasher {
  /// Build a state of `algorithm` from `params`.
  ///
  /// # Errors
  ///
  /// [`ConfigError`] if `params` exceed the limits of `algorithm`.
  pub fn new(algorithm: Algorithm, params: &Params<'_>) -> Result<Self, ConfigError> {
    Ok(match algorithm {
      Algorithm::Blake2b => Self::Blake2b(Blake2b::new(params)?),
      Algorithm::Blake2s => Self::Blake2s(Blake2s::new(params)?),
    })
  }

  /// Absorb `data`.
  ///
  /// # Errors
  ///
  /// [`StateError::Finalized`] after [`Self::finalize`].
  pub fn update(&mut self, data: &[u8]) -> Result<(), StateError> {
    match self {
      Self::Blake2b(h) => h.update(data),
      Self::Blake2s(h) => h.update(data),
    }
  }

  /// Produce the digest; the state is unusable afterwards.
  ///
  /// # Errors
  ///
  /// [`StateError::Finalized`] if the digest was already produced.
  pub fn finalize(&mut self) -> Result<Output, StateError> {
    match self {
      Self::Blake2b(h) => h.finalize(),
      Self::Blake2s(h) => h.finalize(),
    }
  }

  /// Variant of this state.
  #[must_use]
  pub const fn algorithm(&self) -> Algorithm {
    match self {
      Self::Blake2b(_) => Algorithm::Blake2b,
      Self::Blake2s(_) => Algorithm::Blake2s,
    }
  }

  /// Configured digest length in bytes.
  #[must_use]
  pub const fn digest_len(&self) -> usize {
    match self {
      Self::Blake2b(h) => h.digest_len(),
      Self::Blake2s(h) => h.digest_len(),
    }
  }

  /// Block size of the variant in bytes.
  #[must_use]
  pub const fn block_len(&self) -> usize {
    self.algorithm().block_len()
  }

  /// Whether the digest has already been produced.
  #[must_use]
  pub fn is_finalized(&self) -> bool {
    match self {
      Self::Blake2b(h) => h.is_finalized(),
      Self::Blake2s(h) => h.is_finalized(),
    }
  }
}

/// Build a [`Hasher`]; same as [`Hasher::new`].
///
/// # Errors
///
/// [`ConfigError`] if `params` exceed the limits of `algorithm`.
#[inline]
pub fn create(algorithm: Algorithm, params: &Params<'_>) -> Result<Hasher, ConfigError> {
  Hasher::new(algorithm, params)
}

/// Hash `data` in one call.
///
/// # Errors
///
/// [`Error::Config`] if `params` exceed the limits of `algorithm`.
pub fn hash(algorithm: Algorithm, params: &Params<'_>, data: &[u8]) -> Result<Output, Error> {
  let mut h = Hasher::new(algorithm, params)?;
  h.update(data)?;
  Ok(h.finalize()?)
}
