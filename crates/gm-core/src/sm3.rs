//! SM3 cryptographic hash.
//!
//! Merkle–Damgård construction over 64-byte blocks with a 64-round
//! compression function and big-endian serialization throughout.

use core::convert::TryInto;

/// Number of bytes in an SM3 digest.
pub const DIGEST_BYTES: usize = 32;

/// Number of bytes consumed per compression of the hash state.
pub const BLOCK_BYTES: usize = 64;

/// Initial state vector.
const IV: [u32; 8] = [
    0x7380166f, 0x4914b2b9, 0x172442d7, 0xda8a0600, 0xa96f30bc, 0x163138aa, 0xe38dee4d,
    0xb0fb0e4e,
];

/// Round constant for rounds 0..16.
const T0: u32 = 0x79cc4519;
/// Round constant for rounds 16..64.
const T1: u32 = 0x7a879d8a;

/// Permutation applied to the new `e` register each round.
#[inline]
fn p0(x: u32) -> u32 {
    x ^ x.rotate_left(9) ^ x.rotate_left(17)
}

/// Permutation applied during message expansion.
#[inline]
fn p1(x: u32) -> u32 {
    x ^ x.rotate_left(15) ^ x.rotate_left(23)
}

/// Compresses one 64-byte block into the running state.
fn compress(state: &mut [u32; 8], block: &[u8; 64]) {
    let mut w = [0u32; 68];
    for (i, chunk) in block.chunks_exact(4).enumerate() {
        let bytes: [u8; 4] = chunk.try_into().expect("chunk length is four");
        w[i] = u32::from_be_bytes(bytes);
    }
    for i in 16..68 {
        w[i] = p1(w[i - 16] ^ w[i - 9] ^ w[i - 3].rotate_left(15))
            ^ w[i - 13].rotate_left(7)
            ^ w[i - 6];
    }
    let mut w1 = [0u32; 64];
    for i in 0..64 {
        w1[i] = w[i] ^ w[i + 4];
    }

    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    for j in 0..64 {
        let t = if j < 16 { T0 } else { T1 };
        let ss1 = a
            .rotate_left(12)
            .wrapping_add(e)
            .wrapping_add(t.rotate_left(j as u32 % 32))
            .rotate_left(7);
        let ss2 = ss1 ^ a.rotate_left(12);
        let (ff, gg) = if j < 16 {
            (a ^ b ^ c, e ^ f ^ g)
        } else {
            ((a & b) | (a & c) | (b & c), (e & f) | (!e & g))
        };
        let tt1 = ff.wrapping_add(d).wrapping_add(ss2).wrapping_add(w1[j]);
        let tt2 = gg.wrapping_add(h).wrapping_add(ss1).wrapping_add(w[j]);
        d = c;
        c = b.rotate_left(9);
        b = a;
        a = tt1;
        h = g;
        g = f.rotate_left(19);
        f = e;
        e = p0(tt2);
    }

    // Feed-forward into the chaining state.
    for (v, r) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
        *v ^= r;
    }
}

/// Computes the 32-byte SM3 digest of `message`.
///
/// Accepts any length including zero and has no error conditions. The
/// padded length field is 64 bits of bit count, so messages of 2^61 bytes
/// or more wrap it silently; this matches the reference behavior and is an
/// accepted limitation.
pub fn digest(message: &[u8]) -> [u8; DIGEST_BYTES] {
    let mut state = IV;

    let mut blocks = message.chunks_exact(BLOCK_BYTES);
    for block in blocks.by_ref() {
        compress(&mut state, block.try_into().expect("chunk length is 64"));
    }

    // Tail: remainder + 0x80 + zero fill + 64-bit big-endian bit length,
    // landing the length field at the end of a 64-byte boundary.
    let rem = blocks.remainder();
    let mut tail = [0u8; 2 * BLOCK_BYTES];
    tail[..rem.len()].copy_from_slice(rem);
    tail[rem.len()] = 0x80;
    let tail_len = if rem.len() < 56 {
        BLOCK_BYTES
    } else {
        2 * BLOCK_BYTES
    };
    let bit_len = (message.len() as u64).wrapping_mul(8);
    tail[tail_len - 8..tail_len].copy_from_slice(&bit_len.to_be_bytes());
    for block in tail[..tail_len].chunks_exact(BLOCK_BYTES) {
        compress(&mut state, block.try_into().expect("chunk length is 64"));
    }

    let mut out = [0u8; DIGEST_BYTES];
    for (chunk, word) in out.chunks_exact_mut(4).zip(state.iter()) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }
    out
}
