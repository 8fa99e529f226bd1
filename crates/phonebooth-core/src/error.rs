//! Error types for PhoneBooth Core.

use thiserror::Error;

/// Core errors that can occur during signing and recovery.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Signature recovery failed, the v/r/s components are malformed, or
    /// recovery yielded the zero address.
    #[error("invalid signature")]
    InvalidSignature,

    /// The 32-byte seed is not a valid secp256k1 scalar (zero or >= the
    /// group order).
    #[error("invalid private key")]
    InvalidPrivateKey,
}
