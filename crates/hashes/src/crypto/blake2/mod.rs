//! Shared BLAKE2 machinery.
//!
//! Both variants run the same compression function, parameter block encoding,
//! and streaming state, generic over [`Variant`]:
//!
//! - [`Word`] - lane arithmetic (`u64` / `u32`).
//! - [`Params`] - digest length, key, salt, personalization, tree fields.
//! - [`State`] - incremental hashing with a terminal finalize.
//! - [`Output`] - the variable-length digest.
//!
//! The concrete variants live in [`blake2b`](super::blake2b) and
//! [`blake2s`](super::blake2s).

mod compress;
mod output;
mod params;
mod state;
pub(crate) mod variant;
mod word;

pub use output::{MAX_DIGEST_LEN, Output};
pub use params::Params;
pub use state::State;
pub use variant::Variant;
pub use word::Word;
