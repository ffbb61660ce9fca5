//! Error types for CBC processing.

use std::fmt;

/// Errors produced when decrypting a CBC ciphertext.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CbcError {
    /// Ciphertext length is zero or not a multiple of the block size.
    InvalidLength,
    /// Decrypted padding-length byte is outside the range 1..=16.
    InvalidPadding,
}

impl fmt::Display for CbcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CbcError::InvalidLength => {
                write!(f, "Ciphertext length must be a positive multiple of 16 bytes")
            }
            CbcError::InvalidPadding => {
                write!(f, "Padding length byte must be between 1 and 16")
            }
        }
    }
}

impl std::error::Error for CbcError {}
