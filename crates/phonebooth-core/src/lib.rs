//! # PhoneBooth Core
//!
//! Pure primitives for the PhoneBooth micropayment system: typed-data
//! hashing, recoverable signatures, and grant messages.
//!
//! This crate contains no I/O and no ledger state. It is pure computation
//! over cryptographic data structures.
//!
//! ## Key Types
//!
//! - [`GrantMessage`] - A customer's authorization snapshot
//! - [`SignedGrant`] - A grant plus the customer's recoverable signature
//! - [`ChargeRequest`] - The tuple a relayer submits to redeem a grant
//! - [`DomainSeparator`] - Binds signatures to one booth instance and chain
//! - [`Keypair`] - secp256k1 signing key for customers and operators
//!
//! ## Typed-Data Hashing
//!
//! Messages are hashed with the fixed ABI-word encoding and keccak-256
//! domain separation used by JavaScript typed-data signers, so a grant
//! signed in a browser wallet verifies here bit-for-bit. See [`typed_data`].

pub mod crypto;
pub mod error;
pub mod grant;
pub mod typed_data;

pub use crypto::{recover_signer, Keypair};
pub use error::CoreError;
pub use grant::{ChargeRequest, GrantMessage, LoginMessage, SignedGrant, SignedLogin};
pub use typed_data::{signing_digest, DomainSeparator, TypedMessage};

// Re-export the Ethereum primitive types used throughout the workspace.
pub use alloy_primitives::{address, b256, Address, Signature, B256, U256};
