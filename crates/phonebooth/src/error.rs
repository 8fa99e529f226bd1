//! Error types for the booth.

use phonebooth_core::{Address, U256};
use phonebooth_ledger::LedgerError;
use thiserror::Error;

use crate::settlement::SettlementError;

/// Errors that can occur during booth operations.
///
/// A single charge fails atomically with one of these; batch charges
/// capture them per item instead of propagating (except for
/// `ArityMismatch`, which rejects the whole call).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoothError {
    /// Caller lacks the business/admin role.
    #[error("caller {0} is not an authorized operator")]
    Unauthorized(Address),

    /// Signature recovery failed or does not match the claimed customer.
    #[error("grant signature is invalid or does not match the customer")]
    InvalidSignature,

    /// The grant's counter/balance snapshot no longer matches live state,
    /// or the requested amount exceeds the approved ceiling.
    #[error("grant is stale or requests more than was approved")]
    StaleOrOverLimitGrant,

    /// The requested amount exceeds the customer's live balance.
    #[error("insufficient credit: requested {requested}, held {balance}")]
    InsufficientBalance { requested: U256, balance: U256 },

    /// Batch input arrays have unequal lengths; the whole call is
    /// rejected since the request itself is malformed.
    #[error("batch arity mismatch: expected {expected} items, got {got}")]
    ArityMismatch { expected: usize, got: usize },

    /// Ledger-level failure.
    #[error("ledger error: {0}")]
    Ledger(#[from] LedgerError),

    /// Value-transfer failure in the external settlement module.
    #[error("settlement error: {0}")]
    Settlement(#[from] SettlementError),
}

/// Result type for booth operations.
pub type Result<T> = std::result::Result<T, BoothError>;
