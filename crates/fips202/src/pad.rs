//! Multi-rate padding (FIPS 202 §5.1).
//!
//! SHA-3 appends the domain separator `0x06`, a run of zero bits, and a final
//! `1` bit so the message length becomes an exact multiple of the rate.
//! Padding is always added: a rate-aligned message gains one full extra block.

#![allow(clippy::indexing_slicing)] // Pad bytes land at computed, in-bounds offsets

use alloc::vec::Vec;

/// Sponge rate for SHA3-256, in bits.
pub const RATE_BITS: usize = 1088;

/// Sponge rate for SHA3-256, in bytes.
pub const RATE_BYTES: usize = RATE_BITS / 8;

/// Append the pad10*1 suffix with the SHA-3 domain separator.
///
/// The returned buffer is the message followed by `ceil(remaining / 8)` pad
/// bytes: `0x06` first, `0x80` ORed into the last (both collapse into a
/// single `0x86` byte when only one pad byte is needed). Its length is always
/// a non-zero multiple of [`RATE_BYTES`].
#[must_use]
pub fn pad(message: &[u8]) -> Vec<u8> {
  let mut remaining = RATE_BITS - (message.len() * 8) % RATE_BITS;
  if remaining == 0 {
    remaining = RATE_BITS;
  }
  let pad_len = remaining.div_ceil(8);

  let mut padded = Vec::with_capacity(message.len() + pad_len);
  padded.extend_from_slice(message);
  padded.resize(message.len() + pad_len, 0);

  padded[message.len()] = 0x06;
  let last = padded.len() - 1;
  padded[last] |= 0x80;

  padded
}

#[cfg(test)]
mod tests {
  use alloc::vec;

  use super::{RATE_BYTES, pad};

  #[test]
  fn empty_message_pads_to_one_block() {
    let padded = pad(b"");
    assert_eq!(padded.len(), RATE_BYTES);
    assert_eq!(padded[0], 0x06);
    assert_eq!(padded[RATE_BYTES - 1], 0x80);
    assert!(padded[1..RATE_BYTES - 1].iter().all(|&b| b == 0));
  }

  #[test]
  fn one_byte_short_of_rate_collapses_to_0x86() {
    // 135 message bytes leave exactly one pad byte, which carries both the
    // domain separator and the final pad bit.
    let padded = pad(&[0xaa; RATE_BYTES - 1]);
    assert_eq!(padded.len(), RATE_BYTES);
    assert_eq!(padded[RATE_BYTES - 1], 0x86);
  }

  #[test]
  fn rate_aligned_message_gains_full_block() {
    let padded = pad(&[0xaa; RATE_BYTES]);
    assert_eq!(padded.len(), 2 * RATE_BYTES);
    assert_eq!(padded[RATE_BYTES], 0x06);
    assert_eq!(padded[2 * RATE_BYTES - 1], 0x80);
  }

  #[test]
  fn one_byte_past_rate_pads_to_two_blocks() {
    let padded = pad(&[0xaa; RATE_BYTES + 1]);
    assert_eq!(padded.len(), 2 * RATE_BYTES);
    assert_eq!(padded[RATE_BYTES + 1], 0x06);
    assert_eq!(padded[2 * RATE_BYTES - 1], 0x80);
  }

  #[test]
  fn padded_length_is_always_a_rate_multiple() {
    for len in 0..=(3 * RATE_BYTES) {
      let padded = pad(&vec![0x61; len]);
      assert_eq!(padded.len() % RATE_BYTES, 0, "message len {len}");
      assert!(padded.len() > len);
    }
  }

  #[test]
  fn message_bytes_are_preserved() {
    let padded = pad(b"abc");
    assert_eq!(&padded[..3], b"abc");
  }
}
