//! AES-128 key expansion.

use zeroize::Zeroize;

use crate::block::{Block, BLOCK_SIZE};
use crate::key::{Aes128Key, RoundKeys, ROUND_KEY_COUNT};
use crate::tables::{sbox, RCON};

/// Four-byte column of the expanded key.
type Word = [u8; 4];

const KEY_WORDS: usize = 4;
const TOTAL_WORDS: usize = KEY_WORDS * ROUND_KEY_COUNT;

fn rot_word([b0, b1, b2, b3]: Word) -> Word {
    [b1, b2, b3, b0]
}

fn sub_word(word: Word) -> Word {
    word.map(sbox)
}

fn xor_words(lhs: Word, rhs: Word) -> Word {
    [lhs[0] ^ rhs[0], lhs[1] ^ rhs[1], lhs[2] ^ rhs[2], lhs[3] ^ rhs[3]]
}

/// Expands a 128-bit key into 11 round keys.
///
/// Round key 0 is the master key itself; round key `k` is words `4k..4k + 3`
/// of the 44-word expansion.
pub fn expand_key(key: &Aes128Key) -> RoundKeys {
    let mut w: [Word; TOTAL_WORDS] = [[0u8; 4]; TOTAL_WORDS];
    for (word, chunk) in w.iter_mut().zip(key.as_bytes().chunks_exact(4)) {
        word.copy_from_slice(chunk);
    }

    for i in KEY_WORDS..TOTAL_WORDS {
        let mut temp = w[i - 1];
        if i % KEY_WORDS == 0 {
            temp = sub_word(rot_word(temp));
            temp[0] ^= RCON[i / KEY_WORDS - 1];
        }
        w[i] = xor_words(temp, w[i - KEY_WORDS]);
    }

    let mut round_keys: [Block; ROUND_KEY_COUNT] = [[0u8; BLOCK_SIZE]; ROUND_KEY_COUNT];
    for (round_key, words) in round_keys.iter_mut().zip(w.chunks_exact(KEY_WORDS)) {
        for (dst, word) in round_key.chunks_exact_mut(4).zip(words) {
            dst.copy_from_slice(word);
        }
    }
    w.zeroize();

    RoundKeys::new(round_keys)
}
