#![deny(clippy::all)]
#![forbid(unsafe_code)]

use byteorder::{ByteOrder, NativeEndian};
use getrandom::getrandom;

/// Generate a pseudorandom seed for the board's PRNG from OS entropy.
pub fn generate_seed() -> Result<(u64, u64), getrandom::Error> {
    let mut seed = [0_u8; 16];

    getrandom(&mut seed)?;

    Ok((
        NativeEndian::read_u64(&seed[0..8]),
        NativeEndian::read_u64(&seed[8..16]),
    ))
}
