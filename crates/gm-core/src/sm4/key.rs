//! Key types for SM4.

/// SM4 128-bit key wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sm4Key(pub [u8; 16]);

impl From<[u8; 16]> for Sm4Key {
    fn from(value: [u8; 16]) -> Self {
        Self(value)
    }
}

/// Expanded round-key schedule: 32 words, one consumed per round.
///
/// Encryption consumes the words in generation order; decryption consumes
/// the same words in reverse order. The schedule is immutable once derived.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundKeys(pub [u32; 32]);

impl RoundKeys {
    /// Returns the round key for the requested round (0..=31).
    #[inline]
    pub fn get(&self, round: usize) -> u32 {
        self.0[round]
    }

    /// Returns the schedule with its word order reversed, as consumed by
    /// the decryption direction.
    pub fn reversed(&self) -> RoundKeys {
        let mut words = self.0;
        words.reverse();
        RoundKeys(words)
    }
}
