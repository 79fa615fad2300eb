use blake2::digest::{
  Mac, Update, VariableOutput,
  consts::{U32, U64},
};
use hashes::{
  Digest as _,
  crypto::{Blake2b, Blake2b512, Blake2s, Blake2s256, Params},
};
use proptest::prelude::*;

fn blake2s256_ref(data: &[u8]) -> [u8; 32] {
  use blake2::Digest as _;
  let out = blake2::Blake2s256::digest(data);
  let mut bytes = [0u8; 32];
  bytes.copy_from_slice(&out);
  bytes
}

fn blake2b512_ref(data: &[u8]) -> [u8; 64] {
  use blake2::Digest as _;
  let out = blake2::Blake2b512::digest(data);
  let mut bytes = [0u8; 64];
  bytes.copy_from_slice(&out);
  bytes
}

fn blake2b_var_ref(data: &[u8], len: usize) -> Vec<u8> {
  let mut h = blake2::Blake2bVar::new(len).unwrap();
  h.update(data);
  let mut out = vec![0u8; len];
  h.finalize_variable(&mut out).unwrap();
  out
}

fn blake2s_var_ref(data: &[u8], len: usize) -> Vec<u8> {
  let mut h = blake2::Blake2sVar::new(len).unwrap();
  h.update(data);
  let mut out = vec![0u8; len];
  h.finalize_variable(&mut out).unwrap();
  out
}

fn blake2b_mac_ref(key: &[u8], salt: &[u8], personal: &[u8], data: &[u8]) -> Vec<u8> {
  let mut mac = blake2::Blake2bMac::<U64>::new_with_salt_and_personal(key, salt, personal).unwrap();
  Mac::update(&mut mac, data);
  mac.finalize().into_bytes().to_vec()
}

fn blake2s_mac_ref(key: &[u8], salt: &[u8], personal: &[u8], data: &[u8]) -> Vec<u8> {
  let mut mac = blake2::Blake2sMac::<U32>::new_with_salt_and_personal(key, salt, personal).unwrap();
  Mac::update(&mut mac, data);
  mac.finalize().into_bytes().to_vec()
}

/// Feed `data` in pseudo-random chunk sizes derived from the data itself.
fn feed(data: &[u8], mut update: impl FnMut(&[u8])) {
  let mut i = 0usize;
  while i < data.len() {
    let step = (data[i] as usize % 97) + 1;
    let end = core::cmp::min(data.len(), i + step);
    update(&data[i..end]);
    i = end;
  }
}

proptest! {
  #[test]
  fn blake2s256_one_shot_matches_blake2(data in proptest::collection::vec(any::<u8>(), 0..8192)) {
    prop_assert_eq!(Blake2s256::digest(&data), blake2s256_ref(&data));
  }

  #[test]
  fn blake2s256_streaming_matches_blake2(data in proptest::collection::vec(any::<u8>(), 0..8192)) {
    let expected = blake2s256_ref(&data);
    let mut h = Blake2s256::new();
    feed(&data, |chunk| h.update(chunk));
    prop_assert_eq!(h.finalize(), expected);
  }

  #[test]
  fn blake2b512_one_shot_matches_blake2(data in proptest::collection::vec(any::<u8>(), 0..8192)) {
    prop_assert_eq!(Blake2b512::digest(&data), blake2b512_ref(&data));
  }

  #[test]
  fn blake2b512_streaming_matches_blake2(data in proptest::collection::vec(any::<u8>(), 0..8192)) {
    let expected = blake2b512_ref(&data);
    let mut h = Blake2b512::new();
    feed(&data, |chunk| h.update(chunk));
    prop_assert_eq!(h.finalize(), expected);
  }

  #[test]
  fn blake2b_variable_length_matches_blake2(
    data in proptest::collection::vec(any::<u8>(), 0..1024),
    len in 1usize..=64,
  ) {
    let mut h = Blake2b::with_digest_len(len).unwrap();
    feed(&data, |chunk| h.update(chunk).unwrap());
    let out = h.finalize().unwrap();
    prop_assert_eq!(out.as_bytes(), &blake2b_var_ref(&data, len)[..]);
  }

  #[test]
  fn blake2s_variable_length_matches_blake2(
    data in proptest::collection::vec(any::<u8>(), 0..1024),
    len in 1usize..=32,
  ) {
    let mut h = Blake2s::with_digest_len(len).unwrap();
    feed(&data, |chunk| h.update(chunk).unwrap());
    let out = h.finalize().unwrap();
    prop_assert_eq!(out.as_bytes(), &blake2s_var_ref(&data, len)[..]);
  }

  #[test]
  fn blake2b_keyed_salted_matches_blake2(
    key in proptest::collection::vec(any::<u8>(), 1..=64),
    salt in proptest::collection::vec(any::<u8>(), 0..=16),
    personal in proptest::collection::vec(any::<u8>(), 0..=16),
    data in proptest::collection::vec(any::<u8>(), 0..1024),
  ) {
    let params = Params::new(64).key(&key).salt(&salt).personal(&personal);
    let mut h = Blake2b::new(&params).unwrap();
    feed(&data, |chunk| h.update(chunk).unwrap());
    let out = h.finalize().unwrap();
    prop_assert_eq!(out.as_bytes(), &blake2b_mac_ref(&key, &salt, &personal, &data)[..]);
  }

  #[test]
  fn blake2s_keyed_salted_matches_blake2(
    key in proptest::collection::vec(any::<u8>(), 1..=32),
    salt in proptest::collection::vec(any::<u8>(), 0..=8),
    personal in proptest::collection::vec(any::<u8>(), 0..=8),
    data in proptest::collection::vec(any::<u8>(), 0..1024),
  ) {
    let params = Params::new(32).key(&key).salt(&salt).personal(&personal);
    let mut h = Blake2s::new(&params).unwrap();
    feed(&data, |chunk| h.update(chunk).unwrap());
    let out = h.finalize().unwrap();
    prop_assert_eq!(out.as_bytes(), &blake2s_mac_ref(&key, &salt, &personal, &data)[..]);
  }
}

/// Tree-mode fields shared by both variants.
#[derive(Clone, Copy, Debug)]
struct Tree {
  fanout: u8,
  depth: u8,
  leaf_len: u32,
  node_offset: u64,
  node_depth: u8,
  inner_len: usize,
  last_node: bool,
}

impl Tree {
  fn apply<'a>(&self, params: Params<'a>) -> Params<'a> {
    params
      .fanout(self.fanout)
      .depth(self.depth)
      .leaf_len(self.leaf_len)
      .node_offset(self.node_offset)
      .node_depth(self.node_depth)
      .inner_len(self.inner_len)
      .last_node(self.last_node)
  }
}

prop_compose! {
  fn tree_fields(max_offset: u64, max_inner: usize)(
    fanout in any::<u8>(),
    depth in 1u8..=255,
    leaf_len in any::<u32>(),
    node_offset in 0..=max_offset,
    node_depth in any::<u8>(),
    inner_len in 0..=max_inner,
    last_node in any::<bool>(),
  ) -> Tree {
    Tree { fanout, depth, leaf_len, node_offset, node_depth, inner_len, last_node }
  }
}

fn blake2b_tree(len: usize, key: &[u8], salt: &[u8], personal: &[u8], tree: &Tree, data: &[u8]) -> Vec<u8> {
  let params = tree.apply(Params::new(len).key(key).salt(salt).personal(personal));
  let mut h = Blake2b::new(&params).unwrap();
  feed(data, |chunk| h.update(chunk).unwrap());
  h.finalize().unwrap().to_vec()
}

fn blake2s_tree(len: usize, key: &[u8], salt: &[u8], personal: &[u8], tree: &Tree, data: &[u8]) -> Vec<u8> {
  let params = tree.apply(Params::new(len).key(key).salt(salt).personal(personal));
  let mut h = Blake2s::new(&params).unwrap();
  feed(data, |chunk| h.update(chunk).unwrap());
  h.finalize().unwrap().to_vec()
}

fn blake2b_tree_ref(len: usize, key: &[u8], salt: &[u8], personal: &[u8], tree: &Tree, data: &[u8]) -> Vec<u8> {
  blake2b_simd::Params::new()
    .hash_length(len)
    .key(key)
    .salt(salt)
    .personal(personal)
    .fanout(tree.fanout)
    .max_depth(tree.depth)
    .max_leaf_length(tree.leaf_len)
    .node_offset(tree.node_offset)
    .node_depth(tree.node_depth)
    .inner_hash_length(tree.inner_len)
    .last_node(tree.last_node)
    .hash(data)
    .as_bytes()
    .to_vec()
}

fn blake2s_tree_ref(len: usize, key: &[u8], salt: &[u8], personal: &[u8], tree: &Tree, data: &[u8]) -> Vec<u8> {
  blake2s_simd::Params::new()
    .hash_length(len)
    .key(key)
    .salt(salt)
    .personal(personal)
    .fanout(tree.fanout)
    .max_depth(tree.depth)
    .max_leaf_length(tree.leaf_len)
    .node_offset(tree.node_offset)
    .node_depth(tree.node_depth)
    .inner_hash_length(tree.inner_len)
    .last_node(tree.last_node)
    .hash(data)
    .as_bytes()
    .to_vec()
}

proptest! {
  #[test]
  fn blake2b_tree_params_match_blake2b_simd(
    len in 1usize..=64,
    key in proptest::collection::vec(any::<u8>(), 0..=64),
    salt in proptest::collection::vec(any::<u8>(), 0..=16),
    personal in proptest::collection::vec(any::<u8>(), 0..=16),
    tree in tree_fields(u64::MAX, 64),
    data in proptest::collection::vec(any::<u8>(), 0..600),
  ) {
    prop_assert_eq!(
      blake2b_tree(len, &key, &salt, &personal, &tree, &data),
      blake2b_tree_ref(len, &key, &salt, &personal, &tree, &data)
    );
  }

  #[test]
  fn blake2s_tree_params_match_blake2s_simd(
    len in 1usize..=32,
    key in proptest::collection::vec(any::<u8>(), 0..=32),
    salt in proptest::collection::vec(any::<u8>(), 0..=8),
    personal in proptest::collection::vec(any::<u8>(), 0..=8),
    tree in tree_fields((1u64 << 48) - 1, 32),
    data in proptest::collection::vec(any::<u8>(), 0..600),
  ) {
    prop_assert_eq!(
      blake2s_tree(len, &key, &salt, &personal, &tree, &data),
      blake2s_tree_ref(len, &key, &salt, &personal, &tree, &data)
    );
  }
}

#[test]
fn tree_node_digests_match_blake2_simd_at_block_edges() {
  for last_node in [false, true] {
    let b_tree = Tree {
      fanout: 3,
      depth: 7,
      leaf_len: 0x0102_0304,
      node_offset: 0x1122_3344_5566_7788,
      node_depth: 5,
      inner_len: 33,
      last_node,
    };
    let s_tree = Tree {
      node_offset: 0x3344_5566_7788,
      inner_len: 17,
      ..b_tree
    };

    for len in [0usize, 1, 64, 128, 129, 777] {
      let data: Vec<u8> = (0..len).map(|i| (i * 7) as u8).collect();
      assert_eq!(
        blake2b_tree(64, b"tree key", b"salt", b"personal", &b_tree, &data),
        blake2b_tree_ref(64, b"tree key", b"salt", b"personal", &b_tree, &data),
        "blake2b len={len} last_node={last_node}"
      );
      assert_eq!(
        blake2s_tree(32, b"tree key", b"salt", b"persona", &s_tree, &data),
        blake2s_tree_ref(32, b"tree key", b"salt", b"persona", &s_tree, &data),
        "blake2s len={len} last_node={last_node}"
      );
    }
  }
}
