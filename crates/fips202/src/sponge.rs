//! Sponge driver: absorb rate-sized blocks, squeeze the digest.
//!
//! Lanes are little-endian: byte `j` of a block XORs into lane `j / 8` at bit
//! offset `8 * (j % 8)`, and the digest reads lanes back out the same way.

#![allow(clippy::indexing_slicing)] // Keccak state is fixed-size; indexing is audited

use crate::{
  keccakf::keccakf,
  pad::{RATE_BYTES, pad},
};

/// SHA3-256 digest size in bytes.
pub const DIGEST_BYTES: usize = 32;

/// XOR one rate-sized block into the outer part of the state, then permute.
#[inline(always)]
fn absorb_block(state: &mut [u64; 25], block: &[u8; RATE_BYTES]) {
  let (lanes, rem) = block.as_chunks::<8>();
  debug_assert!(rem.is_empty());
  for (lane, chunk) in state[..RATE_BYTES / 8].iter_mut().zip(lanes) {
    *lane ^= u64::from_le_bytes(*chunk);
  }
  keccakf(state);
}

/// Compute the SHA3-256 digest of `message`.
///
/// Pure and deterministic; every call owns a fresh all-zero state, so
/// concurrent callers need no synchronization. Any byte sequence, including
/// the empty one, is a valid input.
#[must_use]
pub fn sha3_256(message: &[u8]) -> [u8; DIGEST_BYTES] {
  let padded = pad(message);

  let mut state = [0u64; 25];
  let (blocks, rest) = padded.as_chunks::<RATE_BYTES>();
  debug_assert!(rest.is_empty());
  for block in blocks {
    absorb_block(&mut state, block);
  }

  // The digest fits inside one rate's worth of state, so a single read
  // suffices: lanes in ascending index order, least-significant byte first.
  let mut digest = [0u8; DIGEST_BYTES];
  let (chunks, rem) = digest.as_chunks_mut::<8>();
  debug_assert!(rem.is_empty());
  for (chunk, lane) in chunks.iter_mut().zip(state.iter()) {
    *chunk = lane.to_le_bytes();
  }
  digest
}
