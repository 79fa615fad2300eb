//! The BLAKE2 compression function `F` (RFC 7693, Section 3.2).
//!
//! One generic implementation serves both variants; [`Variant`] supplies the
//! lane type, IV, round count, and `G` rotation distances.

#![allow(clippy::indexing_slicing)] // Fixed 16-lane working vector; SIGMA entries are all < 16

use zeroize::Zeroize;

use super::{
  variant::Variant,
  word::{Word, load_block},
};

/// Message word schedule. BLAKE2b's rounds 10 and 11 reuse rows 0 and 1.
pub(crate) const SIGMA: [[usize; 16]; 10] = [
  [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
  [14, 10, 4, 8, 9, 15, 13, 6, 1, 12, 0, 2, 11, 7, 5, 3],
  [11, 8, 12, 0, 5, 2, 15, 13, 10, 14, 3, 6, 7, 1, 9, 4],
  [7, 9, 3, 1, 13, 12, 11, 14, 2, 6, 5, 10, 4, 0, 15, 8],
  [9, 0, 5, 7, 2, 4, 10, 15, 14, 1, 11, 12, 6, 8, 3, 13],
  [2, 12, 6, 10, 0, 11, 8, 3, 4, 13, 7, 5, 15, 14, 1, 9],
  [12, 5, 1, 15, 14, 13, 4, 10, 0, 7, 6, 3, 9, 2, 8, 11],
  [13, 11, 7, 14, 12, 1, 3, 9, 5, 0, 15, 4, 8, 6, 2, 10],
  [6, 15, 14, 9, 11, 3, 0, 8, 12, 2, 13, 7, 1, 4, 10, 5],
  [10, 2, 8, 4, 7, 6, 1, 5, 15, 11, 9, 14, 3, 12, 13, 0],
];

#[inline(always)]
fn g<W: Word>(v: &mut [W; 16], [a, b, c, d]: [usize; 4], x: W, y: W, [r1, r2, r3, r4]: [u32; 4]) {
  v[a] = v[a].wrapping_add(v[b]).wrapping_add(x);
  v[d] = (v[d] ^ v[a]).rotr(r1);
  v[c] = v[c].wrapping_add(v[d]);
  v[b] = (v[b] ^ v[c]).rotr(r2);
  v[a] = v[a].wrapping_add(v[b]).wrapping_add(y);
  v[d] = (v[d] ^ v[a]).rotr(r3);
  v[c] = v[c].wrapping_add(v[d]);
  v[b] = (v[b] ^ v[c]).rotr(r4);
}

/// Compress 16 message words into the chaining state `h`.
///
/// `t` is the byte counter as `(low, high)` words and `f` the finalization
/// flags: `f[0]` is all-ones for the last block, `f[1]` is all-ones for the
/// last block of the last node in a tree.
#[inline]
pub(crate) fn compress<V: Variant>(h: &mut [V::Word; 8], m: &[V::Word; 16], t: [V::Word; 2], f: [V::Word; 2]) {
  let mut v = [<V::Word as Word>::ZERO; 16];
  v[..8].copy_from_slice(h);
  v[8..].copy_from_slice(&V::IV);
  v[12] ^= t[0];
  v[13] ^= t[1];
  v[14] ^= f[0];
  v[15] ^= f[1];

  for round in 0..V::ROUNDS {
    let s = &SIGMA[round % SIGMA.len()];

    g(&mut v, [0, 4, 8, 12], m[s[0]], m[s[1]], V::ROTATIONS);
    g(&mut v, [1, 5, 9, 13], m[s[2]], m[s[3]], V::ROTATIONS);
    g(&mut v, [2, 6, 10, 14], m[s[4]], m[s[5]], V::ROTATIONS);
    g(&mut v, [3, 7, 11, 15], m[s[6]], m[s[7]], V::ROTATIONS);

    g(&mut v, [0, 5, 10, 15], m[s[8]], m[s[9]], V::ROTATIONS);
    g(&mut v, [1, 6, 11, 12], m[s[10]], m[s[11]], V::ROTATIONS);
    g(&mut v, [2, 7, 8, 13], m[s[12]], m[s[13]], V::ROTATIONS);
    g(&mut v, [3, 4, 9, 14], m[s[14]], m[s[15]], V::ROTATIONS);
  }

  for i in 0..8 {
    h[i] ^= v[i] ^ v[i + 8];
  }
  v.zeroize();
}

/// Compress one block of raw bytes, wiping the decoded message words afterwards.
#[inline]
pub(crate) fn compress_bytes<V: Variant>(h: &mut [V::Word; 8], block: &[u8], t: [V::Word; 2], f: [V::Word; 2]) {
  let mut m = load_block::<V::Word>(block);
  compress::<V>(h, &m, t, f);
  m.zeroize();
}
