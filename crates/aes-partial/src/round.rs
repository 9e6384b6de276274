//! AES round transformations.
//!
//! Each function takes the state by value and returns the transformed state.
//! The state is a column-major 4x4 matrix: row `r`, column `c` lives at
//! index `r + 4 * c`.

use crate::block::{xor_in_place, Block, BLOCK_SIZE};
use crate::gf::{mul_by_01, mul_by_02, mul_by_03};
use crate::tables::sbox;

#[inline]
const fn index(row: usize, col: usize) -> usize {
    row + 4 * col
}

/// SubBytes: replaces every byte with its S-box image.
#[inline]
pub fn sub_bytes(state: Block) -> Block {
    state.map(sbox)
}

/// ShiftRows: rotates row `r` left by `r` positions.
pub fn shift_rows(state: Block) -> Block {
    let mut out = [0u8; BLOCK_SIZE];
    for row in 0..4 {
        for col in 0..4 {
            out[index(row, col)] = state[index(row, (col + row) % 4)];
        }
    }
    out
}

fn mix_single_column([a0, a1, a2, a3]: [u8; 4]) -> [u8; 4] {
    [
        mul_by_02(a0) ^ mul_by_03(a1) ^ mul_by_01(a2) ^ mul_by_01(a3),
        mul_by_01(a0) ^ mul_by_02(a1) ^ mul_by_03(a2) ^ mul_by_01(a3),
        mul_by_01(a0) ^ mul_by_01(a1) ^ mul_by_02(a2) ^ mul_by_03(a3),
        mul_by_03(a0) ^ mul_by_01(a1) ^ mul_by_01(a2) ^ mul_by_02(a3),
    ]
}

/// MixColumns: multiplies each column by the fixed MDS matrix
/// `circ(02, 03, 01, 01)` over GF(2^8).
pub fn mix_columns(state: Block) -> Block {
    let mut out = [0u8; BLOCK_SIZE];
    for col in 0..4 {
        let column = [
            state[index(0, col)],
            state[index(1, col)],
            state[index(2, col)],
            state[index(3, col)],
        ];
        let base = index(0, col);
        out[base..base + 4].copy_from_slice(&mix_single_column(column));
    }
    out
}

/// AddRoundKey: XORs a round key into the state. Applying it twice with the
/// same key is the identity.
#[inline]
pub fn add_round_key(state: Block, round_key: &Block) -> Block {
    let mut out = state;
    xor_in_place(&mut out, round_key);
    out
}

/// One of rounds 1 to 9: SubBytes, ShiftRows, MixColumns, AddRoundKey.
pub fn main_round(state: Block, round_key: &Block) -> Block {
    add_round_key(mix_columns(shift_rows(sub_bytes(state))), round_key)
}

/// Round 10: SubBytes, ShiftRows, AddRoundKey. No MixColumns.
pub fn final_round(state: Block, round_key: &Block) -> Block {
    add_round_key(shift_rows(sub_bytes(state)), round_key)
}
