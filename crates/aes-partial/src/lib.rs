//! AES-128 encryption built from its four round transformations.
//!
//! The crate follows FIPS-197 for a 128-bit key and block and provides:
//! - The S-box and round-constant tables.
//! - Multiplication by 1, 2 and 3 in GF(2^8).
//! - SubBytes, ShiftRows, MixColumns and AddRoundKey as pure state functions.
//! - The AES-128 key schedule.
//! - Full encryption and reduced-round ("partial") encryption of one block.
//!
//! Reduced-round output exposes intermediate cipher state and exists for
//! cryptanalysis exercises and round-by-round verification. Nothing here is
//! side-channel hardened, and there is no decryption, mode of operation or
//! padding.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
pub mod gf;
mod key;
pub mod round;
mod schedule;
mod tables;

pub use crate::block::{block_from_slice, xor_in_place, Block, BLOCK_SIZE};
pub use crate::cipher::{encrypt_block, partially_encrypt_block, Aes128, ROUNDS};
pub use crate::error::{Error, Result};
pub use crate::key::{Aes128Key, RoundKeys, KEY_SIZE, ROUND_KEY_COUNT};
pub use crate::schedule::expand_key;
pub use crate::tables::{sbox, RCON, SBOX};
