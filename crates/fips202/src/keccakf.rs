//! Keccak-f[1600] permutation (FIPS 202 §3).
//!
//! One round is θ → ρ+π → χ → ι. The permutation is a pure, total function
//! over the fixed-size state: it cannot fail or terminate early, and all lane
//! arithmetic is modulo 2^64.

#![allow(clippy::indexing_slicing)] // Keccak state is fixed-size; indexing is audited

/// Number of rounds of Keccak-f[1600].
pub const KECCAKF_ROUNDS: usize = 24;

// Round constants, one consumed per ι step.
const RC: [u64; KECCAKF_ROUNDS] = [
  0x0000_0000_0000_0001,
  0x0000_0000_0000_8082,
  0x8000_0000_0000_808a,
  0x8000_0000_8000_8000,
  0x0000_0000_0000_808b,
  0x0000_0000_8000_0001,
  0x8000_0000_8000_8081,
  0x8000_0000_0000_8009,
  0x0000_0000_0000_008a,
  0x0000_0000_0000_0088,
  0x0000_0000_8000_8009,
  0x0000_0000_8000_000a,
  0x0000_0000_8000_808b,
  0x8000_0000_0000_008b,
  0x8000_0000_0000_8089,
  0x8000_0000_0000_8003,
  0x8000_0000_0000_8002,
  0x8000_0000_0000_0080,
  0x0000_0000_0000_800a,
  0x8000_0000_8000_000a,
  0x8000_0000_8000_8081,
  0x8000_0000_0000_8080,
  0x0000_0000_8000_0001,
  0x8000_0000_8000_8008,
];

// ρ rotation offsets, indexed by the lane's original coordinates as
// `ROTATION[x][y]`.
const ROTATION: [[u32; 5]; 5] = [
  [0, 36, 3, 41, 18],
  [1, 44, 10, 45, 2],
  [62, 6, 43, 15, 61],
  [28, 55, 25, 21, 56],
  [27, 20, 39, 8, 14],
];

/// One round: θ, ρ+π, χ over a snapshot, then ι with the given constant.
pub(crate) fn round(a: &mut [u64; 25], rc: u64) {
  // θ: column parities, then D[x] = C[x-1] ^ rotl(C[x+1], 1) into every lane
  // of column x.
  let mut c = [0u64; 5];
  for x in 0..5 {
    c[x] = a[x] ^ a[x + 5] ^ a[x + 10] ^ a[x + 15] ^ a[x + 20];
  }
  for x in 0..5 {
    let d = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1);
    for y in 0..5 {
      a[x + 5 * y] ^= d;
    }
  }

  // ρ+π: lane (x, y) is rotated by its original offset and lands at
  // (y, 2x + 3y). `b` doubles as the pre-χ snapshot.
  let mut b = [0u64; 25];
  for x in 0..5 {
    for y in 0..5 {
      b[y + 5 * ((2 * x + 3 * y) % 5)] = a[x + 5 * y].rotate_left(ROTATION[x][y]);
    }
  }

  // χ: each lane XORs in the AND of its two row neighbors, all read from the
  // snapshot.
  for y in 0..5 {
    for x in 0..5 {
      a[x + 5 * y] = b[x + 5 * y] ^ (!b[(x + 1) % 5 + 5 * y] & b[(x + 2) % 5 + 5 * y]);
    }
  }

  // ι
  a[0] ^= rc;
}

/// Apply the full 24-round Keccak-f[1600] permutation in place.
#[inline]
pub fn keccakf(state: &mut [u64; 25]) {
  for &rc in &RC {
    round(state, rc);
  }
}
