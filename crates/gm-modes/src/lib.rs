//! Cipher-block-chaining mode over the SM4 block cipher.
//!
//! This crate wraps the single-block transform from `gm-core` with padding
//! and chaining so arbitrary-length plaintext and ciphertext can be
//! processed. The chaining value is threaded through as an explicit value;
//! the caller's IV buffer is never mutated, so one buffer can back any
//! number of independent chains.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod cbc;
mod error;

pub use cbc::{decrypt, encrypt, BLOCK_BYTES};
pub use error::CbcError;
