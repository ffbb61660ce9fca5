//! CBC encryption and decryption.

use core::convert::TryInto;

use gm_core::sm4::{expand_key, transform_block, xor_in_place, Block, Sm4Key};

use crate::error::CbcError;

/// Cipher block size in bytes.
pub const BLOCK_BYTES: usize = 16;

/// Encrypts `plaintext` under `key` with the given starting chain value.
///
/// Padding always adds between 1 and 16 bytes, each holding the padding
/// length, so a block-aligned plaintext still gains a full extra block and
/// the output is always strictly longer than the input. Chunks are chained
/// strictly in order: each block's input is XORed with the previous block's
/// ciphertext, the IV seeding the first.
pub fn encrypt(plaintext: &[u8], key: &Sm4Key, iv: &Block) -> Vec<u8> {
    let round_keys = expand_key(key);

    let pad_len = BLOCK_BYTES - plaintext.len() % BLOCK_BYTES;
    let mut buf = Vec::with_capacity(plaintext.len() + pad_len);
    buf.extend_from_slice(plaintext);
    buf.resize(plaintext.len() + pad_len, pad_len as u8);

    let mut chain = *iv;
    for chunk in buf.chunks_exact_mut(BLOCK_BYTES) {
        let mut block: Block = chunk.try_into().expect("chunk length is 16");
        xor_in_place(&mut block, &chain);
        chain = transform_block(&block, &round_keys);
        chunk.copy_from_slice(&chain);
    }
    buf
}

/// Decrypts `ciphertext` under `key` with the given starting chain value.
///
/// Fails with [`CbcError::InvalidLength`] unless the ciphertext is a
/// positive multiple of 16 bytes, and with [`CbcError::InvalidPadding`] if
/// the recovered padding-length byte is outside 1..=16. No partial
/// plaintext is returned on error.
pub fn decrypt(ciphertext: &[u8], key: &Sm4Key, iv: &Block) -> Result<Vec<u8>, CbcError> {
    if ciphertext.is_empty() || ciphertext.len() % BLOCK_BYTES != 0 {
        return Err(CbcError::InvalidLength);
    }
    let round_keys = expand_key(key).reversed();

    // Each block transform reads only its own ciphertext chunk, so this
    // pass is block-parallel in structure; only the chain pass below is
    // order-dependent.
    let mut buf = vec![0u8; ciphertext.len()];
    for (dst, src) in buf
        .chunks_exact_mut(BLOCK_BYTES)
        .zip(ciphertext.chunks_exact(BLOCK_BYTES))
    {
        let block: Block = src.try_into().expect("chunk length is 16");
        dst.copy_from_slice(&transform_block(&block, &round_keys));
    }

    let mut chain = *iv;
    for (dst, src) in buf
        .chunks_exact_mut(BLOCK_BYTES)
        .zip(ciphertext.chunks_exact(BLOCK_BYTES))
    {
        for (d, c) in dst.iter_mut().zip(chain.iter()) {
            *d ^= *c;
        }
        chain.copy_from_slice(src);
    }

    let pad_len = buf[buf.len() - 1] as usize;
    if !(1..=BLOCK_BYTES).contains(&pad_len) {
        return Err(CbcError::InvalidPadding);
    }
    buf.truncate(buf.len() - pad_len);
    Ok(buf)
}
