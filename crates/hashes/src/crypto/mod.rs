//! BLAKE2 hash functions.

pub mod blake2;
pub mod blake2b;
pub mod blake2s;

pub use blake2::{Output, Params};
pub use blake2b::{Blake2b, Blake2b512};
pub use blake2s::{Blake2s, Blake2s256};
