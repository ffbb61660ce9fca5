//! SM4 key schedule and single-block transform.

use core::convert::TryInto;

use crate::sm4::block::Block;
use crate::sm4::key::{RoundKeys, Sm4Key};
use crate::sm4::sbox::sbox;

/// System parameter XORed into the key words before scheduling.
const FK: [u32; 4] = [0xa3b1bac6, 0x56aa3350, 0x677d9197, 0xb27022dc];

/// Fixed round constants for the 32 key-schedule rounds.
const CK: [u32; 32] = [
    0x00070e15, 0x1c232a31, 0x383f464d, 0x545b6269, 0x70777e85, 0x8c939aa1, 0xa8afb6bd,
    0xc4cbd2d9, 0xe0e7eef5, 0xfc030a11, 0x181f262d, 0x343b4249, 0x50575e65, 0x6c737a81,
    0x888f969d, 0xa4abb2b9, 0xc0c7ced5, 0xdce3eaf1, 0xf8ff060d, 0x141b2229, 0x30373e45,
    0x4c535a61, 0x686f767d, 0x848b9299, 0xa0a7aeb5, 0xbcc3cad1, 0xd8dfe6ed, 0xf4fb0209,
    0x10171e25, 0x2c333a41, 0x484f565d, 0x646b7279,
];

fn sub_word(word: u32) -> u32 {
    let b0 = sbox((word >> 24) as u8) as u32;
    let b1 = sbox((word >> 16) as u8) as u32;
    let b2 = sbox((word >> 8) as u8) as u32;
    let b3 = sbox(word as u8) as u32;
    (b0 << 24) | (b1 << 16) | (b2 << 8) | b3
}

/// Nonlinear-then-linear mixer used by the cipher rounds.
fn t_cipher(word: u32) -> u32 {
    let b = sub_word(word);
    b ^ b.rotate_left(2) ^ b.rotate_left(10) ^ b.rotate_left(18) ^ b.rotate_left(24)
}

/// Nonlinear-then-linear mixer used by the key schedule.
fn t_key(word: u32) -> u32 {
    let b = sub_word(word);
    b ^ b.rotate_left(13) ^ b.rotate_left(23)
}

/// Derives the 32-word round-key schedule from a 128-bit key.
pub fn expand_key(key: &Sm4Key) -> RoundKeys {
    let mut k = [0u32; 36];
    for (i, chunk) in key.0.chunks_exact(4).enumerate() {
        let bytes: [u8; 4] = chunk.try_into().expect("chunk length is four");
        k[i] = u32::from_be_bytes(bytes) ^ FK[i];
    }

    let mut round_keys = [0u32; 32];
    for i in 0..32 {
        k[i + 4] = k[i] ^ t_key(k[i + 1] ^ k[i + 2] ^ k[i + 3] ^ CK[i]);
        round_keys[i] = k[i + 4];
    }

    RoundKeys(round_keys)
}

/// Runs the 32-round transform over one 16-byte block.
///
/// The transform is direction-agnostic: a schedule in generation order
/// encrypts, the same schedule reversed (see [`RoundKeys::reversed`])
/// decrypts.
pub fn transform_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut x = [0u32; 36];
    for (i, chunk) in block.chunks_exact(4).enumerate() {
        let bytes: [u8; 4] = chunk.try_into().expect("chunk length is four");
        x[i] = u32::from_be_bytes(bytes);
    }

    for i in 0..32 {
        x[i + 4] = x[i] ^ t_cipher(x[i + 1] ^ x[i + 2] ^ x[i + 3] ^ round_keys.get(i));
    }

    // The output is the final four window words in reverse order.
    let mut out = [0u8; 16];
    for (i, word) in [x[35], x[34], x[33], x[32]].into_iter().enumerate() {
        out[i * 4..(i + 1) * 4].copy_from_slice(&word.to_be_bytes());
    }
    out
}

/// Encrypts a single 16-byte block with a pre-expanded schedule.
pub fn encrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    transform_block(block, round_keys)
}

/// Decrypts a single 16-byte block with a pre-expanded schedule.
pub fn decrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    transform_block(block, &round_keys.reversed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngCore;

    const STD_KEY: [u8; 16] = [
        0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef, 0xfe, 0xdc, 0xba, 0x98, 0x76, 0x54, 0x32,
        0x10,
    ];
    const STD_PLAIN: [u8; 16] = [
        0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef, 0xfe, 0xdc, 0xba, 0x98, 0x76, 0x54, 0x32,
        0x10,
    ];
    const STD_CIPHER: [u8; 16] = [
        0x68, 0x1e, 0xdf, 0x34, 0xd2, 0x06, 0x96, 0x5e, 0x86, 0xb3, 0xe9, 0x4f, 0x53, 0x6e, 0x42,
        0x46,
    ];

    #[test]
    fn encrypt_matches_standard_vector() {
        let key = Sm4Key::from(STD_KEY);
        let round_keys = expand_key(&key);
        let ct = encrypt_block(&STD_PLAIN, &round_keys);
        assert_eq!(ct, STD_CIPHER);
    }

    #[test]
    fn decrypt_matches_standard_vector() {
        let key = Sm4Key::from(STD_KEY);
        let round_keys = expand_key(&key);
        let pt = decrypt_block(&STD_CIPHER, &round_keys);
        assert_eq!(pt, STD_PLAIN);
    }

    #[test]
    fn million_round_vector() {
        // GB/T 32907 example 2: encrypt the plaintext 1,000,000 times.
        let expected: [u8; 16] = [
            0x59, 0x52, 0x98, 0xc7, 0xc6, 0xfd, 0x27, 0x1f, 0x04, 0x02, 0xf8, 0x04, 0xc3, 0x3d,
            0x3f, 0x66,
        ];
        let round_keys = expand_key(&Sm4Key::from(STD_KEY));
        let mut block = STD_PLAIN;
        for _ in 0..1_000_000 {
            block = encrypt_block(&block, &round_keys);
        }
        assert_eq!(block, expected);
    }

    #[test]
    fn reversed_schedule_equals_decrypt() {
        let round_keys = expand_key(&Sm4Key::from(STD_KEY));
        let via_transform = transform_block(&STD_CIPHER, &round_keys.reversed());
        assert_eq!(via_transform, decrypt_block(&STD_CIPHER, &round_keys));
    }

    #[test]
    fn encrypt_decrypt_round_trip_random() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let mut key_bytes = [0u8; 16];
            let mut block = [0u8; 16];
            rng.fill_bytes(&mut key_bytes);
            rng.fill_bytes(&mut block);
            let rks = expand_key(&Sm4Key::from(key_bytes));
            let ct = encrypt_block(&block, &rks);
            let pt = decrypt_block(&ct, &rks);
            assert_eq!(pt, block);
        }
    }
}
