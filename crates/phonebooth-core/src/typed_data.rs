//! Deterministic typed-data hashing for domain-separated messages.
//!
//! This module replicates the fixed ABI-word encoding and keccak-256
//! domain separation used by JavaScript typed-data signers (the EIP-712
//! scheme), so a message signed off-chain by a browser wallet hashes to
//! the same digest here:
//!
//! - every atomic field is encoded as one 32-byte big-endian word
//! - addresses are left-padded to 32 bytes
//! - dynamic strings are replaced by their keccak-256 hash
//! - the final digest is `keccak256(0x19 || 0x01 || domainHash || structHash)`
//!
//! The encoding is a pure function of the type declaration, the domain
//! separator, and the field values. No hidden state, no non-determinism.

use alloy_primitives::{keccak256, Address, B256, U256};
use serde::{Deserialize, Serialize};

/// Type declaration of the domain struct itself.
pub const EIP712_DOMAIN_TYPE: &str =
    "EIP712Domain(string name,string version,uint256 chainId,address verifyingContract,bytes32 salt)";

/// Binds all signatures to one booth deployment and one chain.
///
/// Immutable once the booth is constructed. Two booths with different
/// domain separators never accept each other's grants, which is what
/// prevents cross-contract and cross-chain replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainSeparator {
    /// Human-readable name of the signing domain, e.g. `"PhoneBooth.Grant"`.
    pub name: String,

    /// Domain version string, e.g. `"v1"`.
    pub version: String,

    /// Chain the booth is deployed on.
    pub chain_id: u64,

    /// Address of the booth instance verifying signatures.
    pub verifying_contract: Address,

    /// Deployment-wide salt, shared by all domains of one project.
    pub salt: B256,
}

impl DomainSeparator {
    /// Create a new domain separator.
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        chain_id: u64,
        verifying_contract: Address,
        salt: B256,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            chain_id,
            verifying_contract,
            salt,
        }
    }

    /// Hash of the domain struct, mixed into every signing digest.
    pub fn hash_struct(&self) -> B256 {
        let mut buf = Vec::with_capacity(6 * 32);
        buf.extend_from_slice(keccak256(EIP712_DOMAIN_TYPE.as_bytes()).as_slice());
        buf.extend_from_slice(keccak256(self.name.as_bytes()).as_slice());
        buf.extend_from_slice(keccak256(self.version.as_bytes()).as_slice());
        buf.extend_from_slice(&encode_uint(U256::from(self.chain_id)));
        buf.extend_from_slice(&encode_address(self.verifying_contract));
        buf.extend_from_slice(self.salt.as_slice());
        keccak256(&buf)
    }
}

/// A struct that can be hashed under a [`DomainSeparator`].
///
/// Implementors declare their schema string and encode their field values
/// as fixed 32-byte words, in declaration order. Everything else is
/// derived.
pub trait TypedMessage {
    /// The full type declaration, e.g.
    /// `Grant(address customer,uint64 txCounter,...)`.
    const TYPE_DECLARATION: &'static str;

    /// Append the field values as 32-byte ABI words, in declaration order.
    fn encode_data(&self, buf: &mut Vec<u8>);

    /// keccak-256 of the type declaration.
    fn type_hash() -> B256 {
        keccak256(Self::TYPE_DECLARATION.as_bytes())
    }

    /// `keccak256(typeHash || encodeData(message))`.
    fn struct_hash(&self) -> B256 {
        let mut buf = Vec::with_capacity(5 * 32);
        buf.extend_from_slice(Self::type_hash().as_slice());
        self.encode_data(&mut buf);
        keccak256(&buf)
    }
}

/// Compute the 32-byte digest a customer signs for `message` under `domain`.
pub fn signing_digest<M: TypedMessage>(domain: &DomainSeparator, message: &M) -> B256 {
    let mut buf = Vec::with_capacity(2 + 2 * 32);
    buf.extend_from_slice(&[0x19, 0x01]);
    buf.extend_from_slice(domain.hash_struct().as_slice());
    buf.extend_from_slice(message.struct_hash().as_slice());
    keccak256(&buf)
}

/// Encode an address as a left-padded 32-byte word.
pub fn encode_address(address: Address) -> [u8; 32] {
    B256::left_padding_from(address.as_slice()).0
}

/// Encode an unsigned integer as a big-endian 32-byte word.
///
/// Narrower integer fields (`uint64` etc.) use the same full-word
/// encoding; only the declared type string differs.
pub fn encode_uint(value: U256) -> [u8; 32] {
    value.to_be_bytes()
}
