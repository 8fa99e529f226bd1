//! Golden vectors for cross-implementation verification.
//!
//! Expected hashes were computed with an independent keccak-256 and
//! typed-data encoder; a JavaScript signer following the same domain
//! parameters produces byte-identical digests. Any change to the type
//! declarations, the word encoding, or the domain layout breaks these.

use phonebooth_core::{
    b256, signing_digest, Address, GrantMessage, Keypair, TypedMessage, B256, U256,
};

use crate::generators::test_grant_domain;

/// Expected hash of the domain type declaration itself.
pub const DOMAIN_TYPE_HASH: B256 =
    b256!("d87cd6ef79d4e2b95e15ce8abf732db51ec771f1ca2edccf22a46c729ac56472");

/// Expected type hash of the grant message declaration.
pub const GRANT_TYPE_HASH: B256 =
    b256!("6eab7dab7d130adc63a6ba967229a30b574c208a33a1002455a5c134edd690c5");

/// Expected type hash of the login message declaration.
pub const LOGIN_TYPE_HASH: B256 =
    b256!("87ff776fa2df626397f82dc27a542db4de3716c586ac2b3a344ca26db5f5b90c");

/// Expected hash of the fixture grant domain.
pub const GRANT_DOMAIN_HASH: B256 =
    b256!("6fbc38de9733a3bfc1e89f1585a750e0368b757bfcc80f39eaef7f22094b4a7e");

/// Expected hash of the fixture login domain.
pub const LOGIN_DOMAIN_HASH: B256 =
    b256!("1268e52c99bbc0125bc85fef8bc26539e895c88547b85c6a78de8378709933f2");

/// A grant message with its expected struct hash and signing digest.
#[derive(Debug, Clone, Copy)]
pub struct GoldenVector {
    pub name: &'static str,
    pub customer: Address,
    pub tx_counter: u64,
    pub credit_balance: U256,
    pub approved_amount: U256,
    pub struct_hash: B256,
    pub digest: B256,
}

impl GoldenVector {
    /// The grant message this vector describes.
    pub fn message(&self) -> GrantMessage {
        GrantMessage::new(
            self.customer,
            self.tx_counter,
            self.credit_balance,
            self.approved_amount,
        )
    }
}

/// The fixture customer's address (seed `[0x01; 32]`).
pub fn vector_customer() -> Address {
    Keypair::from_seed(&[0x01; 32])
        .expect("fixture seed is valid")
        .address()
}

/// All grant vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    let customer = vector_customer();
    vec![
        GoldenVector {
            name: "fresh-account-tenth-approved",
            customer,
            tx_counter: 0,
            credit_balance: U256::from(1_000_000_000_000_000_000u128),
            approved_amount: U256::from(100_000_000_000_000_000u128),
            struct_hash: b256!("bb27ec53b0c7b89947963c087a506787d60592986c56e50d81e605d62a61b408"),
            digest: b256!("ac8234e1693b24a6da4019ba170e87ba9a01c07144f8de2994863aa84017b1cf"),
        },
        GoldenVector {
            name: "mid-life-account-wide-approval",
            customer,
            tx_counter: 7,
            credit_balance: U256::from(950_000_000_000_000_000u128),
            approved_amount: U256::from(1u128 << 64),
            struct_hash: b256!("635a4d00940b50dba599effb7e54342481af4a270d9789934a3b5e68901a9301"),
            digest: b256!("119dc15d2c789e0c53eab065c48f0767deb8304d124d8480ce00d8edc8816418"),
        },
    ]
}

/// Check every vector against the local encoder.
///
/// Returns the first mismatch as an error string naming the vector.
pub fn verify_all_vectors() -> Result<(), String> {
    let domain = test_grant_domain();

    if domain.hash_struct() != GRANT_DOMAIN_HASH {
        return Err("grant domain hash mismatch".to_string());
    }

    for vector in all_vectors() {
        let message = vector.message();
        if message.struct_hash() != vector.struct_hash {
            return Err(format!("{}: struct hash mismatch", vector.name));
        }
        if signing_digest(&domain, &message) != vector.digest {
            return Err(format!("{}: digest mismatch", vector.name));
        }
    }
    Ok(())
}
