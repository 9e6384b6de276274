//! AES-128 cipher driver: full and reduced-round block encryption.

use core::fmt;

use tracing::{debug, trace};

use crate::block::{block_from_slice, Block};
use crate::error::{Error, Result};
use crate::key::{Aes128Key, RoundKeys};
use crate::round::{add_round_key, final_round, main_round};
use crate::schedule::expand_key;

/// Number of rounds in AES-128.
pub const ROUNDS: usize = 10;

// Whitening followed by rounds `1..num_rounds`. Only a count of exactly
// `ROUNDS` ends with the final round; shorter runs stop after a main round.
fn run_rounds(block: &Block, round_keys: &RoundKeys, num_rounds: usize) -> Block {
    let mut state = add_round_key(*block, round_keys.get(0));

    for round in 1..num_rounds {
        state = main_round(state, round_keys.get(round));
    }

    if num_rounds == ROUNDS {
        state = final_round(state, round_keys.get(ROUNDS));
    }

    state
}

/// Encrypts a single 16-byte block with pre-expanded round keys.
pub fn encrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    run_rounds(block, round_keys, ROUNDS)
}

/// Encrypts a single block through `num_rounds` rounds (`1..=10`).
///
/// `num_rounds == 1` applies only the initial AddRoundKey; `num_rounds == n`
/// below 10 returns the state entering round `n`. Ten rounds is exactly
/// [`encrypt_block`].
pub fn partially_encrypt_block(
    block: &Block,
    round_keys: &RoundKeys,
    num_rounds: usize,
) -> Result<Block> {
    if !(1..=ROUNDS).contains(&num_rounds) {
        return Err(Error::InvalidRoundCount { rounds: num_rounds });
    }
    trace!(num_rounds, "reduced-round encryption");
    Ok(run_rounds(block, round_keys, num_rounds))
}

/// AES-128 cipher instance holding an expanded key schedule.
///
/// The schedule is computed once at construction and only read afterwards,
/// so one instance can serve concurrent callers.
#[derive(Clone)]
pub struct Aes128 {
    round_keys: RoundKeys,
}

impl Aes128 {
    /// Creates a cipher from raw key bytes, which must be exactly 16 bytes.
    pub fn new(key: &[u8]) -> Result<Self> {
        let key = Aes128Key::try_from(key)?;
        Ok(Self::from_key(&key))
    }

    /// Creates a cipher from a typed key.
    pub fn from_key(key: &Aes128Key) -> Self {
        let round_keys = expand_key(key);
        debug!(round_keys = round_keys.as_slice().len(), "expanded AES-128 key schedule");
        Self { round_keys }
    }

    /// The expanded key schedule.
    pub fn round_keys(&self) -> &RoundKeys {
        &self.round_keys
    }

    /// Encrypts one block given as a byte slice.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Block> {
        let block = block_from_slice(plaintext)?;
        Ok(self.encrypt_block(&block))
    }

    /// Encrypts one block.
    pub fn encrypt_block(&self, block: &Block) -> Block {
        encrypt_block(block, &self.round_keys)
    }

    /// Encrypts one block given as a byte slice through `num_rounds` rounds.
    pub fn partially_encrypt(&self, plaintext: &[u8], num_rounds: usize) -> Result<Block> {
        let block = block_from_slice(plaintext)?;
        self.partially_encrypt_block(&block, num_rounds)
    }

    /// Encrypts one block through `num_rounds` rounds.
    /// See [`partially_encrypt_block`](crate::partially_encrypt_block).
    pub fn partially_encrypt_block(&self, block: &Block, num_rounds: usize) -> Result<Block> {
        partially_encrypt_block(block, &self.round_keys, num_rounds)
    }
}

impl fmt::Debug for Aes128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Aes128").finish_non_exhaustive()
    }
}
