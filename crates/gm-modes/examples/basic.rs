//! Demonstrates hashing a message and running a CBC round trip.

use gm_core::sm3;
use gm_core::sm4::Sm4Key;
use gm_modes::{decrypt, encrypt};

fn main() {
    // Published vector for SM3("abc").
    let expected_abc = [
        0x66, 0xc7, 0xf0, 0xf4, 0x62, 0xee, 0xed, 0xd9, 0xd1, 0xf2, 0xd4, 0x6b, 0xdc, 0x10,
        0xe4, 0xe2, 0x41, 0x67, 0xc4, 0x87, 0x5c, 0xf2, 0xf7, 0xa2, 0x29, 0x7d, 0xa0, 0x2b,
        0x8f, 0x4b, 0xa8, 0xe0,
    ];
    assert_eq!(sm3::digest(b"abc"), expected_abc);

    let key = Sm4Key::from(*b"sixteen byte key");
    let iv = [0u8; 16];
    let plaintext = b"first block here second blockhere";

    let ciphertext = encrypt(plaintext, &key, &iv);
    let recovered = decrypt(&ciphertext, &key, &iv).expect("ciphertext is well formed");
    assert_eq!(recovered, plaintext);

    println!("example succeeded; digest and CBC round trip match");
}
