//! BLAKE2b and BLAKE2s (RFC 7693).
//!
//! This crate is `no_std` compatible. Library dependencies are limited to the
//! workspace `traits` crate, `zeroize`, and an optional `log` facade. Dev-only
//! dependencies are used for oracle testing and benchmarking.
//!
//! # Usage
//!
//! ```
//! use hashes::crypto::{Blake2b, Blake2b512, Params};
//! use hashes::Digest;
//!
//! // Fixed-size, non-consuming `Digest` API.
//! let digest = Blake2b512::digest(b"abc");
//! assert_eq!(digest.len(), 64);
//!
//! // Configurable, single-use state.
//! let mut mac = Blake2b::new(&Params::new(32).key(b"k").salt(b"pepper"))?;
//! mac.update(b"abc")?;
//! let tag = mac.finalize()?;
//! assert_eq!(tag.len(), 32);
//! # Ok::<(), hashes::Error>(())
//! ```
//!
//! # Features
//!
//! - `std` - `std::error::Error` for the error types.
//! - `log` - trace construction and log misuse through the `log` facade.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod crypto;

pub use traits::{ConfigError, Digest, Error, StateError};
