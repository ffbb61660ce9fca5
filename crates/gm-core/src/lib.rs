//! Reference implementations of the SM3 hash and SM4 block cipher.
//!
//! This crate mirrors the GB/T 32905 (SM3) and GB/T 32907 (SM4) documents
//! and provides:
//! - One-shot SM3 digest computation.
//! - SM4 key schedule and single-block transform for both directions.
//! - Public types shared across the workspace.
//!
//! The implementation aims for clarity and testability rather than
//! constant-time guarantees; it should not be treated as side-channel
//! hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod sm3;
pub mod sm4;
