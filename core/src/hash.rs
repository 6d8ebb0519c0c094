//! 32-bit FNV-1a, used to turn a seed string into a PRNG seed.
//!
//! Input is consumed as UTF-16 code units so that a browser client hashing
//! the same seed arrives at the same value.

pub const FNV32_OFFSET_BASIS: u32 = 0x811c_9dc5;
pub const FNV32_PRIME: u32 = 0x0100_0193;

/// Hash `input` with FNV-1a (32-bit). Total over all strings.
pub fn fnv1a32(input: &str) -> u32 {
    input.encode_utf16().fold(FNV32_OFFSET_BASIS, |acc, unit| {
        (acc ^ u32::from(unit)).wrapping_mul(FNV32_PRIME)
    })
}
