//! SHA3-256 (FIPS 202) - portable, `no_std`, pure Rust Keccak-f[1600] sponge.
//!
//! The crate is split along the layers of the construction:
//!
//! - [`keccakf`] - the 24-round Keccak-f[1600] permutation and its constant
//!   tables.
//! - [`pad`] - the pad10*1 rule with the SHA-3 domain separator.
//! - [`sha3_256`] - the one-shot entry point composing padding, absorb, and
//!   squeeze.
//!
//! The state is a flat `[u64; 25]`; lane `(x, y)` of the 5x5 matrix lives at
//! index `x + 5 * y`, with bit `z` of the lane at bit `z` of the word.
//!
//! This crate has zero library dependencies outside the workspace. Dev-only
//! dependencies are used for oracle testing and benchmarking.
//!
//! # Example
//!
//! ```
//! let digest = fips202::sha3_256(b"abc");
//! assert_eq!(digest[0], 0x3a);
//! ```
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

extern crate alloc;

mod keccakf;
mod pad;
mod sponge;

pub use keccakf::{KECCAKF_ROUNDS, keccakf};
pub use pad::{RATE_BITS, RATE_BYTES, pad};
pub use sponge::{DIGEST_BYTES, sha3_256};
