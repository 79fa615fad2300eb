use core::hint::black_box;

/// splitmix64 step; only used to keep benchmark inputs from being all-zero.
#[inline]
fn splitmix64(state: &mut u64) -> u64 {
  *state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
  let mut z = *state;
  z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
  z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
  z ^ (z >> 31)
}

pub fn input_bytes(len: usize) -> Vec<u8> {
  let mut state = 0xB1A4_E2B5_u64 ^ len as u64;
  let out: Vec<u8> = (0..len).map(|_| splitmix64(&mut state) as u8).collect();
  black_box(&out);
  out
}

/// Sizes straddling both block lengths (64 and 128) plus bulk payloads.
pub fn block_edge_inputs() -> Vec<(usize, Vec<u8>)> {
  [0usize, 1, 32, 63, 64, 65, 127, 128, 129, 1024, 16 * 1024, 1024 * 1024]
    .into_iter()
    .map(|len| (len, input_bytes(len)))
    .collect()
}

pub fn set_throughput(group: &mut criterion::BenchmarkGroup<'_, criterion::measurement::WallTime>, len: usize) {
  if len == 0 {
    group.throughput(criterion::Throughput::Elements(1));
  } else {
    group.throughput(criterion::Throughput::Bytes(len as u64));
  }
}
