//! Core traits and error vocabulary for rsblake2.
//!
//! This crate is `no_std` compatible. Its only dependency is `thiserror`
//! (without default features) for the error derives.
//!
//! # Contents
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`Digest`] | Fixed-size streaming hash with idempotent finalize |
//! | [`ConfigError`] | Rejected construction parameter |
//! | [`StateError`] | Use of a finalized hash state |
//! | [`Error`] | Either of the above |
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod digest;
pub mod error;

pub use digest::Digest;
pub use error::{ConfigError, Error, StateError};
