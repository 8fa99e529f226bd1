//! Grant and Login message payloads.
//!
//! A grant is a customer-signed authorization snapshot: "at counter N,
//! with balance B, I authorize spending up to A". It is never stored by
//! the booth; it exists only in the signed artifact handed out-of-band to
//! the business. Replay protection comes from the snapshot itself: any
//! successful charge or deposit changes the customer's live
//! `(tx_counter, balance)` and thereby invalidates every grant issued
//! against the old state.

use alloy_primitives::{Address, Signature, U256};
use serde::{Deserialize, Serialize};

use crate::crypto::{recover_signer, Keypair};
use crate::error::CoreError;
use crate::typed_data::{encode_address, encode_uint, signing_digest, DomainSeparator, TypedMessage};

/// A customer's authorization snapshot, the message under a grant signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrantMessage {
    /// The customer authorizing the charge.
    pub customer: Address,

    /// The customer's transaction counter at signing time.
    pub tx_counter: u64,

    /// The customer's credit balance at signing time.
    pub credit_balance: U256,

    /// Upper bound the business may charge against this grant.
    pub approved_amount: U256,
}

impl TypedMessage for GrantMessage {
    const TYPE_DECLARATION: &'static str =
        "Grant(address customer,uint64 txCounter,uint256 creditBalance,uint256 approvedAmount)";

    fn encode_data(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&encode_address(self.customer));
        buf.extend_from_slice(&encode_uint(U256::from(self.tx_counter)));
        buf.extend_from_slice(&encode_uint(self.credit_balance));
        buf.extend_from_slice(&encode_uint(self.approved_amount));
    }
}

impl GrantMessage {
    /// Create a new grant message.
    pub fn new(
        customer: Address,
        tx_counter: u64,
        credit_balance: U256,
        approved_amount: U256,
    ) -> Self {
        Self {
            customer,
            tx_counter,
            credit_balance,
            approved_amount,
        }
    }

    /// Sign this message under `domain`, producing the off-chain artifact.
    pub fn sign(self, keypair: &Keypair, domain: &DomainSeparator) -> Result<SignedGrant, CoreError> {
        let digest = signing_digest(domain, &self);
        let signature = keypair.sign_digest(&digest)?;
        Ok(SignedGrant {
            message: self,
            signature,
        })
    }
}

/// A grant message plus the customer's recoverable signature.
///
/// Produced once by the customer's signing key and handed to the
/// business out-of-band. A single signed grant is consumed by at most one
/// successful charge, enforced by the counter/balance match rather than
/// by marking the grant itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedGrant {
    /// The signed authorization snapshot.
    pub message: GrantMessage,

    /// Recoverable `(v, r, s)` signature over the typed-data digest.
    pub signature: Signature,
}

impl SignedGrant {
    /// Recover the address that signed this grant under `domain`.
    pub fn signer(&self, domain: &DomainSeparator) -> Result<Address, CoreError> {
        let digest = signing_digest(domain, &self.message);
        recover_signer(&digest, &self.signature)
    }

    /// Whether the signature recovers to the claimed customer.
    ///
    /// Side-effect free; usable by customer and business to self-check a
    /// grant before submission, and by the booth during validation.
    pub fn is_signed_by_customer(&self, domain: &DomainSeparator) -> bool {
        matches!(self.signer(domain), Ok(signer) if signer == self.message.customer)
    }

    /// Build the tuple a relayer submits to redeem this grant.
    pub fn to_charge_request(&self, requested_amount: U256) -> ChargeRequest {
        ChargeRequest {
            requested_amount,
            customer: self.message.customer,
            tx_counter: self.message.tx_counter,
            credit_balance: self.message.credit_balance,
            approved_amount: self.message.approved_amount,
            signature: self.signature,
        }
    }
}

/// The tuple a relayer submits on-chain to charge a customer.
///
/// Structurally equal to the message inside some [`SignedGrant`] the
/// customer actually signed, plus the amount the business is pulling now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargeRequest {
    /// Amount the business is charging; must not exceed `approved_amount`.
    pub requested_amount: U256,

    /// The customer being charged.
    pub customer: Address,

    /// Counter stamped into the signed grant.
    pub tx_counter: u64,

    /// Balance stamped into the signed grant.
    pub credit_balance: U256,

    /// Authorization ceiling stamped into the signed grant.
    pub approved_amount: U256,

    /// The customer's grant signature.
    pub signature: Signature,
}

impl ChargeRequest {
    /// Reconstruct the grant message this request claims was signed.
    pub fn message(&self) -> GrantMessage {
        GrantMessage {
            customer: self.customer,
            tx_counter: self.tx_counter,
            credit_balance: self.credit_balance,
            approved_amount: self.approved_amount,
        }
    }
}

/// Off-chain session authentication message.
///
/// Signed by a customer to prove key ownership to a business frontend;
/// never touches the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginMessage {
    /// The customer logging in.
    pub customer: Address,

    /// Client-chosen timestamp in Unix milliseconds.
    pub login_timestamp: u64,
}

impl TypedMessage for LoginMessage {
    const TYPE_DECLARATION: &'static str = "Login(address customer,uint64 loginTimestamp)";

    fn encode_data(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&encode_address(self.customer));
        buf.extend_from_slice(&encode_uint(U256::from(self.login_timestamp)));
    }
}

impl LoginMessage {
    /// Create a new login message.
    pub fn new(customer: Address, login_timestamp: u64) -> Self {
        Self {
            customer,
            login_timestamp,
        }
    }

    /// Sign this message under `domain`.
    pub fn sign(self, keypair: &Keypair, domain: &DomainSeparator) -> Result<SignedLogin, CoreError> {
        let digest = signing_digest(domain, &self);
        let signature = keypair.sign_digest(&digest)?;
        Ok(SignedLogin {
            message: self,
            signature,
        })
    }
}

/// A login message plus the customer's recoverable signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedLogin {
    /// The signed login message.
    pub message: LoginMessage,

    /// Recoverable `(v, r, s)` signature over the typed-data digest.
    pub signature: Signature,
}

impl SignedLogin {
    /// Whether the signature recovers to the claimed customer.
    pub fn is_signed_by_customer(&self, domain: &DomainSeparator) -> bool {
        let digest = signing_digest(domain, &self.message);
        matches!(recover_signer(&digest, &self.signature), Ok(signer) if signer == self.message.customer)
    }
}
