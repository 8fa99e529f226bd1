//! Error types for the credit ledger.

use phonebooth_core::U256;
use thiserror::Error;

/// Errors that can occur during ledger mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// A debit was attempted for more than the account holds.
    #[error("insufficient balance: requested {requested}, held {balance}")]
    InsufficientBalance { requested: U256, balance: U256 },

    /// A deposit of zero was attempted; deposits must move value.
    #[error("deposit amount must be greater than zero")]
    ZeroDeposit,

    /// A credit would overflow the 256-bit balance.
    #[error("balance overflow crediting {amount} onto {balance}")]
    BalanceOverflow { balance: U256, amount: U256 },

    /// A conditional debit's expected snapshot no longer matches the
    /// live account.
    #[error(
        "stale snapshot: counter {live_counter} (expected {expected_counter}), \
         balance {live_balance} (expected {expected_balance})"
    )]
    SnapshotMismatch {
        expected_counter: u64,
        live_counter: u64,
        expected_balance: U256,
        live_balance: U256,
    },
}

/// Result type for ledger operations.
pub type Result<T> = std::result::Result<T, LedgerError>;
