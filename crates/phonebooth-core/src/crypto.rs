//! Recoverable secp256k1 signatures over 32-byte digests.
//!
//! The booth never learns who signed a message from the signature alone;
//! it recovers the signer's address from the digest and the `(v, r, s)`
//! components and compares it to the claimed customer. This mirrors how
//! on-chain verifiers work and is why the curve must be secp256k1 rather
//! than an EdDSA scheme: Ed25519 has no public-key recovery.

use alloy_primitives::{Address, Signature, B256, U256};
use k256::ecdsa::SigningKey;
use std::fmt;

use crate::error::CoreError;

/// A secp256k1 keypair for signing grants and logins.
///
/// Held by customers (and the testkit on their behalf); the booth itself
/// never holds private keys.
#[derive(Clone)]
pub struct Keypair {
    signing_key: SigningKey,
}

impl Keypair {
    /// Generate a new random keypair.
    pub fn generate() -> Self {
        let signing_key = SigningKey::random(&mut rand::thread_rng());
        Self { signing_key }
    }

    /// Create from a 32-byte seed, interpreted as the private scalar.
    ///
    /// Fails with [`CoreError::InvalidPrivateKey`] if the seed is zero or
    /// not below the group order.
    pub fn from_seed(seed: &[u8; 32]) -> Result<Self, CoreError> {
        let signing_key = SigningKey::from_bytes(seed.into())
            .map_err(|_| CoreError::InvalidPrivateKey)?;
        Ok(Self { signing_key })
    }

    /// The 20-byte address derived from the public key
    /// (keccak-256 of the uncompressed point, last 20 bytes).
    pub fn address(&self) -> Address {
        Address::from_public_key(self.signing_key.verifying_key())
    }

    /// Sign a 32-byte digest, producing a recoverable `(v, r, s)` signature.
    pub fn sign_digest(&self, digest: &B256) -> Result<Signature, CoreError> {
        let (sig, recovery_id) = self
            .signing_key
            .sign_prehash_recoverable(digest.as_slice())
            .map_err(|_| CoreError::InvalidPrivateKey)?;

        let r = U256::from_be_slice(&sig.r().to_bytes());
        let s = U256::from_be_slice(&sig.s().to_bytes());
        Ok(Signature::new(r, s, recovery_id.is_y_odd()))
    }
}

impl fmt::Debug for Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Keypair({})", self.address())
    }
}

/// Recover the signer's address from a digest and a recoverable signature.
///
/// Fails with [`CoreError::InvalidSignature`] when the `v/r/s` components
/// are malformed or recovery yields the zero address.
pub fn recover_signer(digest: &B256, signature: &Signature) -> Result<Address, CoreError> {
    let address = signature
        .recover_address_from_prehash(digest)
        .map_err(|_| CoreError::InvalidSignature)?;

    if address == Address::ZERO {
        return Err(CoreError::InvalidSignature);
    }

    Ok(address)
}
