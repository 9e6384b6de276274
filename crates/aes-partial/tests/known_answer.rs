mod common;

use aes_partial::{Aes128, ROUNDS};
use common::{block, init_logging};

// FIPS-197 Appendix C.1.
const C1_KEY: &str = "000102030405060708090a0b0c0d0e0f";
const C1_PLAIN: &str = "00112233445566778899aabbccddeeff";
const C1_CIPHER: &str = "69c4e0d86a7b0430d8cdb78070b4c55a";

// State entering round n, for n = 1..=9, then the ciphertext.
const C1_ROUND_STATES: [&str; 10] = [
    "00102030405060708090a0b0c0d0e0f0",
    "89d810e8855ace682d1843d8cb128fe4",
    "4915598f55e5d7a0daca94fa1f0a63f7",
    "fa636a2825b339c940668a3157244d17",
    "247240236966b3fa6ed2753288425b6c",
    "c81677bc9b7ac93b25027992b0261996",
    "c62fe109f75eedc3cc79395d84f9cf5d",
    "d1876c0f79c4300ab45594add66ff41f",
    "fde3bad205e5d0d73547964ef1fe37f1",
    "69c4e0d86a7b0430d8cdb78070b4c55a",
];

#[test]
fn fips197_appendix_c1() {
    init_logging();
    let cipher = Aes128::new(&block(C1_KEY)).expect("valid key");
    assert_eq!(cipher.encrypt(&block(C1_PLAIN)), Ok(block(C1_CIPHER)));
}

#[test]
fn fips197_appendix_b() {
    init_logging();
    let cipher = Aes128::new(&block("2b7e151628aed2a6abf7158809cf4f3c")).expect("valid key");
    let ciphertext = cipher.encrypt_block(&block("3243f6a8885a308d313198a2e0370734"));
    assert_eq!(hex::encode(ciphertext), "3925841d02dc09fbdc118597196a0b32");
}

#[test]
fn all_zero_key_and_block() {
    init_logging();
    let cipher = Aes128::new(&[0u8; 16]).expect("valid key");
    let ciphertext = cipher.encrypt_block(&[0u8; 16]);
    assert_eq!(hex::encode(ciphertext), "66e94bd4ef8a2c3b884cfa59ca342b2e");
}

#[test]
fn partial_encryption_walks_fips197_round_states() {
    init_logging();
    let cipher = Aes128::new(&block(C1_KEY)).expect("valid key");
    let plaintext = block(C1_PLAIN);
    for (num_rounds, expected) in (1..=ROUNDS).zip(C1_ROUND_STATES) {
        let state = cipher
            .partially_encrypt(&plaintext, num_rounds)
            .expect("valid round count");
        assert_eq!(hex::encode(state), expected, "num_rounds = {num_rounds}");
    }
}

#[test]
fn round_key_zero_is_master_key() {
    init_logging();
    let key = block(C1_KEY);
    let cipher = Aes128::new(&key).expect("valid key");
    assert_eq!(cipher.round_keys().get(0), &key);
    assert_eq!(
        hex::encode(cipher.round_keys().get(10)),
        "13111d7fe3944a17f307a78b4d2b30c5"
    );
}
