//! Incremental BLAKE2 state: buffering, counter, and the single-use lifecycle.

#![allow(clippy::indexing_slicing)] // Buffer offsets are bounded by `buf_len <= BLOCK_LEN`

use core::{fmt, marker::PhantomData};

use traits::{ConfigError, StateError};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::{
  compress::compress_bytes,
  output::Output,
  params::Params,
  variant::Variant,
  word::Word,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
  Ready,
  Finalized,
}

/// Streaming BLAKE2 state for variant `V`.
///
/// `Ready -> Ready (update) -> Finalized (finalize)`. Once finalized, every
/// further call fails with [`StateError::Finalized`]. Clone an in-progress
/// state to fork it; the clone is fully independent.
///
/// Working state is wiped on finalization and on drop.
///
/// # Examples
///
/// ```
/// use hashes::{StateError, crypto::Blake2s};
///
/// let mut h = Blake2s::with_digest_len(32)?;
/// h.update(b"ca")?;
/// h.update(b"ts")?;
/// let digest = h.finalize()?;
/// assert_eq!(
///   format!("{digest:x}"),
///   "c473a8d190c3867bdaf6529e8d8531925e824cff07f17d489233fde665979f0c"
/// );
/// assert_eq!(h.update(b"more"), Err(StateError::Finalized));
/// # Ok::<(), hashes::Error>(())
/// ```
pub struct State<V: Variant> {
  h: [V::Word; 8],
  t: [V::Word; 2],
  buf: V::Block,
  buf_len: usize,
  digest_len: u8,
  last_node: bool,
  phase: Phase,
  _variant: PhantomData<V>,
}

impl<V: Variant> State<V> {
  /// Build a state from `params`.
  ///
  /// With a non-empty key, the key zero-padded to one block is absorbed before
  /// any caller data, so it is compressed ahead of the first message block.
  ///
  /// # Errors
  ///
  /// [`ConfigError`] if any parameter is outside the limits of `V`.
  pub fn new(params: &Params<'_>) -> Result<Self, ConfigError> {
    let h = params.initial_state::<V>()?;
    let mut state = Self::from_chaining_state(h, params.output_len(), params.is_last_node());

    let key = params.key_bytes();
    if !key.is_empty() {
      let mut block = V::ZERO_BLOCK;
      block.as_mut()[..key.len()].copy_from_slice(key);
      state.absorb(block.as_ref());
      block.zeroize();
    }

    #[cfg(feature = "log")]
    log::trace!(
      "{} state created: digest_len={} keyed={} last_node={}",
      V::NAME,
      params.output_len(),
      !key.is_empty(),
      params.is_last_node()
    );

    Ok(state)
  }

  /// Unkeyed sequential-mode state with a `digest_len`-byte digest.
  ///
  /// # Errors
  ///
  /// [`ConfigError::DigestLength`] if `digest_len` is 0 or above the variant maximum.
  #[inline]
  pub fn with_digest_len(digest_len: usize) -> Result<Self, ConfigError> {
    Self::new(&Params::new(digest_len))
  }

  /// Keyed (MAC) state with a `digest_len`-byte tag.
  ///
  /// # Errors
  ///
  /// [`ConfigError`] if the key or digest length is out of range.
  #[inline]
  pub fn keyed(key: &[u8], digest_len: usize) -> Result<Self, ConfigError> {
    Self::new(&Params::new(digest_len).key(key))
  }

  fn from_chaining_state(h: [V::Word; 8], digest_len: usize, last_node: bool) -> Self {
    Self {
      h,
      t: [<V::Word as Word>::ZERO; 2],
      buf: V::ZERO_BLOCK,
      buf_len: 0,
      digest_len: digest_len as u8,
      last_node,
      phase: Phase::Ready,
      _variant: PhantomData,
    }
  }

  /// Absorb `data`.
  ///
  /// Empty input is accepted and changes nothing.
  ///
  /// # Errors
  ///
  /// [`StateError::Finalized`] if the state already produced its digest.
  #[inline]
  pub fn update(&mut self, data: &[u8]) -> Result<(), StateError> {
    self.ensure_ready("update")?;
    self.absorb(data);
    Ok(())
  }

  /// Produce the digest and move to the terminal state.
  ///
  /// # Errors
  ///
  /// [`StateError::Finalized`] if called more than once.
  #[inline]
  pub fn finalize(&mut self) -> Result<Output, StateError> {
    self.ensure_ready("finalize")?;
    Ok(self.finish())
  }

  /// Configured digest length in bytes.
  #[inline]
  #[must_use]
  pub const fn digest_len(&self) -> usize {
    self.digest_len as usize
  }

  /// Block size of the variant in bytes.
  #[inline]
  #[must_use]
  pub const fn block_len(&self) -> usize {
    V::BLOCK_LEN
  }

  /// Algorithm name (`"blake2b"` or `"blake2s"`).
  #[inline]
  #[must_use]
  pub const fn name(&self) -> &'static str {
    V::NAME
  }

  /// Whether the digest has already been produced.
  #[inline]
  #[must_use]
  pub fn is_finalized(&self) -> bool {
    self.phase == Phase::Finalized
  }

  #[cfg_attr(not(feature = "log"), allow(unused_variables))]
  fn ensure_ready(&self, op: &'static str) -> Result<(), StateError> {
    match self.phase {
      Phase::Ready => Ok(()),
      Phase::Finalized => {
        #[cfg(feature = "log")]
        log::debug!("{}: {op} called on a finalized state", V::NAME);
        Err(StateError::Finalized)
      }
    }
  }

  fn advance(&mut self, len: usize) {
    let inc = <V::Word as Word>::from_block_len(len);
    self.t[0] = self.t[0].wrapping_add(inc);
    if self.t[0] < inc {
      self.t[1] = self.t[1].wrapping_add(<V::Word as Word>::ONE);
    }
  }

  /// Buffer `data`, compressing only blocks known not to be the last one.
  ///
  /// A full buffer stays uncompressed until more input arrives, so the final
  /// block can still be flagged in [`Self::finish`].
  pub(crate) fn absorb(&mut self, mut data: &[u8]) {
    let not_last = [<V::Word as Word>::ZERO; 2];
    let free = V::BLOCK_LEN - self.buf_len;

    if data.len() > free {
      let (head, rest) = data.split_at(free);
      self.buf.as_mut()[self.buf_len..].copy_from_slice(head);
      self.advance(V::BLOCK_LEN);
      compress_bytes::<V>(&mut self.h, self.buf.as_ref(), self.t, not_last);
      self.buf_len = 0;
      data = rest;

      while data.len() > V::BLOCK_LEN {
        let (block, rest) = data.split_at(V::BLOCK_LEN);
        self.advance(V::BLOCK_LEN);
        compress_bytes::<V>(&mut self.h, block, self.t, not_last);
        data = rest;
      }
    }

    self.buf.as_mut()[self.buf_len..self.buf_len + data.len()].copy_from_slice(data);
    self.buf_len += data.len();
  }

  /// Pad and compress the buffered block with the finalization flags set,
  /// serialize, then wipe. Callers check the phase first.
  pub(crate) fn finish(&mut self) -> Output {
    let len = self.buf_len;
    self.advance(len);
    self.buf.as_mut()[len..].fill(0);

    let max = <V::Word as Word>::MAX;
    let zero = <V::Word as Word>::ZERO;
    let flags = [max, if self.last_node { max } else { zero }];
    compress_bytes::<V>(&mut self.h, self.buf.as_ref(), self.t, flags);

    let out = Output::from_state(&self.h, self.digest_len());
    self.wipe();
    self.phase = Phase::Finalized;
    out
  }

  fn wipe(&mut self) {
    self.h.zeroize();
    self.t.zeroize();
    self.buf.zeroize();
    self.buf_len = 0;
  }
}

impl<V: Variant> Default for State<V> {
  /// Unkeyed state producing the variant's full-length digest.
  fn default() -> Self {
    let params = Params::new(V::OUT_LEN);
    Self::from_chaining_state(params.initial_state_unchecked::<V>(), V::OUT_LEN, false)
  }
}

impl<V: Variant> Clone for State<V> {
  fn clone(&self) -> Self {
    Self {
      h: self.h,
      t: self.t,
      buf: self.buf,
      buf_len: self.buf_len,
      digest_len: self.digest_len,
      last_node: self.last_node,
      phase: self.phase,
      _variant: PhantomData,
    }
  }
}

impl<V: Variant> Drop for State<V> {
  fn drop(&mut self) {
    self.wipe();
  }
}

impl<V: Variant> ZeroizeOnDrop for State<V> {}

impl<V: Variant> fmt::Debug for State<V> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    // Chaining state and buffered bytes are never printed.
    f.debug_struct("State")
      .field("name", &V::NAME)
      .field("digest_len", &self.digest_len)
      .field("buffered", &self.buf_len)
      .field("last_node", &self.last_node)
      .field("finalized", &self.is_finalized())
      .finish()
  }
}
