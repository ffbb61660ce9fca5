//! SM4 block cipher: key schedule and the 32-round block transform.
//!
//! The transform is an unbalanced Feistel network over a sliding window of
//! four 32-bit words. It is its own inverse under round-key reversal, so
//! decryption reuses the encryption path with a reversed schedule.

mod block;
mod cipher;
mod key;
mod sbox;

pub use block::{xor_in_place, Block};
pub use cipher::{decrypt_block, encrypt_block, expand_key, transform_block};
pub use key::{RoundKeys, Sm4Key};
