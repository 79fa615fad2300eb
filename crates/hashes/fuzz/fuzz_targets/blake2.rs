#![no_main]

use blake2::digest::{Update, VariableOutput};
use hashes::{
  StateError,
  crypto::{Blake2b, Blake2s, Params},
};
use libfuzzer_sys::fuzz_target;

/// Header layout: `[digest_len, key_len, split, ..message]`.
struct Case<'a> {
  digest_len: usize,
  key: &'a [u8],
  split: usize,
  message: &'a [u8],
}

fn parse(input: &[u8], max: usize) -> Option<Case<'_>> {
  let (&[d, k, s], rest) = input.split_first_chunk::<3>()?;
  let digest_len = (d as usize % max) + 1;
  let key_len = (k as usize % (max + 1)).min(rest.len());
  let (key, message) = rest.split_at(key_len);
  let split = s as usize % (message.len() + 1);
  Some(Case { digest_len, key, split, message })
}

macro_rules! check {
  ($state:ty, $oracle:ty, $case:expr) => {{
    let case = $case;
    let params = Params::new(case.digest_len).key(case.key);

    let mut one_shot = <$state>::new(&params).unwrap();
    one_shot.update(case.message).unwrap();
    let expected = one_shot.finalize().unwrap();

    let (a, b) = case.message.split_at(case.split);
    let mut split = <$state>::new(&params).unwrap();
    split.update(a).unwrap();
    split.update(&[]).unwrap();
    split.update(b).unwrap();
    assert_eq!(split.finalize().unwrap(), expected);
    assert_eq!(split.update(a), Err(StateError::Finalized));

    if case.key.is_empty() {
      let mut oracle = <$oracle>::new(case.digest_len).unwrap();
      oracle.update(case.message);
      let mut out = vec![0u8; case.digest_len];
      oracle.finalize_variable(&mut out).unwrap();
      assert_eq!(expected.as_bytes(), &out[..]);
    }
  }};
}

fuzz_target!(|input: &[u8]| {
  if let Some(case) = parse(input, 64) {
    check!(Blake2b, blake2::Blake2bVar, case);
  }
  if let Some(case) = parse(input, 32) {
    check!(Blake2s, blake2::Blake2sVar, case);
  }
});
