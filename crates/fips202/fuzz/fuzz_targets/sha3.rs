#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
  let ours = fips202::sha3_256(data);

  use sha3::Digest as _;
  let reference = sha3::Sha3_256::digest(data);
  let mut expected = [0u8; 32];
  expected.copy_from_slice(&reference);

  assert_eq!(ours, expected);
});
