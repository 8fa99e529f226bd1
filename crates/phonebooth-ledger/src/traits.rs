//! Ledger trait: the abstract interface for credit accounting.
//!
//! This trait keeps the booth storage-agnostic. The reference
//! implementation is in-memory; persistent backends implement the same
//! contract.

use phonebooth_core::{Address, U256};

use crate::account::CreditAccount;
use crate::error::Result;

/// The Ledger trait: per-customer balances and charge counters.
///
/// # Design Notes
///
/// - **Zero defaults**: reads on unknown customers return zero balance
///   and zero counter; accounts materialize on first credit.
/// - **Atomic debits**: `debit` checks the balance, decrements it, and
///   increments the counter as one mutation. Two racing debits against
///   the same balance can never both succeed.
/// - **Compare-and-swap**: `debit_if` additionally verifies the caller's
///   `(counter, balance)` snapshot inside the same critical section, so
///   racing redemptions of one authorization serialize here and exactly
///   one commits.
/// - **Per-account serialization**: mutations for one customer are
///   applied in a total order. Different customers are independent.
pub trait Ledger: Send + Sync {
    /// Get a customer's account, if it has ever been credited.
    fn account(&self, customer: Address) -> Option<CreditAccount>;

    /// Current credit balance; zero for unknown customers.
    fn balance_of(&self, customer: Address) -> U256;

    /// Current transaction counter; zero for unknown customers.
    fn counter_of(&self, customer: Address) -> u64;

    /// Credit a deposit onto an account, creating it if necessary.
    ///
    /// `amount` must be greater than zero. Repeated credits accumulate.
    /// The transaction counter is untouched. Returns the updated account.
    fn credit(&self, customer: Address, amount: U256) -> Result<CreditAccount>;

    /// Debit a validated charge from an account.
    ///
    /// Fails with `InsufficientBalance` when `amount` exceeds the live
    /// balance, without mutating anything. On success the balance
    /// decreases by `amount` and the counter increases by exactly 1, in
    /// one atomic step. Returns the updated account.
    ///
    /// Only internal callers use this; it is never exposed to external
    /// callers directly.
    fn debit(&self, customer: Address, amount: U256) -> Result<CreditAccount>;

    /// Debit a charge only if the account still matches a signed snapshot.
    ///
    /// Checks `(expected_counter, expected_balance)` against the live
    /// account and that the balance covers `amount`, then applies the
    /// debit — all in one atomic step. Fails with `SnapshotMismatch`
    /// when the snapshot is stale and `InsufficientBalance` when the
    /// snapshot matches but does not cover `amount`; failures mutate
    /// nothing. This is the only mutation the charge executor performs.
    fn debit_if(
        &self,
        customer: Address,
        amount: U256,
        expected_counter: u64,
        expected_balance: U256,
    ) -> Result<CreditAccount>;
}
