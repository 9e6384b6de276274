//! Key types for AES-128.

use core::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::block::{Block, BLOCK_SIZE};
use crate::error::{Error, Result};

/// Size of an AES-128 master key in bytes.
pub const KEY_SIZE: usize = 16;

/// Number of round keys in an AES-128 key schedule.
pub const ROUND_KEY_COUNT: usize = 11;

/// AES-128 master key. Wiped on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Aes128Key([u8; KEY_SIZE]);

impl Aes128Key {
    /// Returns the raw key bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }
}

impl From<[u8; KEY_SIZE]> for Aes128Key {
    fn from(value: [u8; KEY_SIZE]) -> Self {
        Self(value)
    }
}

impl TryFrom<&[u8]> for Aes128Key {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self> {
        let bytes = <[u8; KEY_SIZE]>::try_from(value)
            .map_err(|_| Error::InvalidKeySize { len: value.len() })?;
        Ok(Self(bytes))
    }
}

impl fmt::Debug for Aes128Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Aes128Key(..)")
    }
}

/// Expanded round keys for AES-128, indexed `0..=10`. Wiped on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct RoundKeys([Block; ROUND_KEY_COUNT]);

impl RoundKeys {
    pub(crate) fn new(keys: [Block; ROUND_KEY_COUNT]) -> Self {
        Self(keys)
    }

    /// Returns the round key at the requested index (0..=10).
    ///
    /// # Panics
    ///
    /// Panics if `round > 10`.
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.0[round]
    }

    /// All round keys in schedule order.
    pub fn as_slice(&self) -> &[Block] {
        &self.0
    }

    /// Iterates over the round keys in schedule order.
    pub fn iter(&self) -> core::slice::Iter<'_, Block> {
        self.0.iter()
    }

    /// The schedule as one flat 176-byte buffer.
    pub fn to_bytes(&self) -> [u8; ROUND_KEY_COUNT * BLOCK_SIZE] {
        let mut out = [0u8; ROUND_KEY_COUNT * BLOCK_SIZE];
        for (dst, key) in out.chunks_exact_mut(BLOCK_SIZE).zip(self.0.iter()) {
            dst.copy_from_slice(key);
        }
        out
    }
}

impl<'a> IntoIterator for &'a RoundKeys {
    type Item = &'a Block;
    type IntoIter = core::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for RoundKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RoundKeys(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_from_slice_requires_sixteen_bytes() {
        let bytes = [0x2bu8; 32];
        for len in [0usize, 1, 15, 17, 24, 32] {
            assert_eq!(
                Aes128Key::try_from(&bytes[..len]),
                Err(Error::InvalidKeySize { len })
            );
        }
        let key = Aes128Key::try_from(&bytes[..16]).expect("16-byte key");
        assert_eq!(key.as_bytes(), &[0x2bu8; 16]);
    }

    #[test]
    fn debug_output_redacts_key_material() {
        let key = Aes128Key::from([0xabu8; 16]);
        assert_eq!(format!("{key:?}"), "Aes128Key(..)");
        let round_keys = RoundKeys::new([[0xcdu8; 16]; ROUND_KEY_COUNT]);
        assert_eq!(format!("{round_keys:?}"), "RoundKeys(..)");
    }

    #[test]
    fn to_bytes_concatenates_in_order() {
        let keys: [Block; ROUND_KEY_COUNT] = core::array::from_fn(|i| [i as u8; 16]);
        let flat = RoundKeys::new(keys).to_bytes();
        assert_eq!(flat.len(), 176);
        for (i, chunk) in flat.chunks_exact(16).enumerate() {
            assert!(chunk.iter().all(|&b| b == i as u8));
        }
    }

    #[test]
    fn zeroize_clears_round_keys() {
        let mut round_keys = RoundKeys::new([[0xffu8; 16]; ROUND_KEY_COUNT]);
        round_keys.zeroize();
        assert!(round_keys.iter().all(|key| key == &[0u8; 16]));
    }
}
