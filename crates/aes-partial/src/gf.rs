//! Multiplication by the MixColumns coefficients in GF(2^8).
//!
//! Arithmetic is modulo the AES polynomial `x^8 + x^4 + x^3 + x + 1`. Addition
//! in this field is XOR, so `3 * b = 2 * b ^ b`.

/// Low byte of the reduction polynomial, folded in when `x * b` overflows.
const REDUCTION: u8 = 0x1b;

/// Multiplies by `{01}`.
#[inline]
pub const fn mul_by_01(byte: u8) -> u8 {
    byte
}

/// Multiplies by `{02}` (the FIPS-197 `xtime`).
#[inline]
pub const fn mul_by_02(byte: u8) -> u8 {
    let shifted = byte << 1;
    if byte & 0x80 != 0 {
        shifted ^ REDUCTION
    } else {
        shifted
    }
}

/// Multiplies by `{03}`.
#[inline]
pub const fn mul_by_03(byte: u8) -> u8 {
    mul_by_02(byte) ^ byte
}
