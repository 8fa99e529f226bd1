//! Per-customer credit account state.

use phonebooth_core::{Address, U256};
use serde::{Deserialize, Serialize};

/// One customer's credit state.
///
/// Created lazily on first deposit. `balance` increases only via deposit
/// and decreases only via a validated charge. `tx_counter` increases by
/// exactly 1 on every successful charge, never decreases, never skips;
/// together with the balance it forms the snapshot grants are signed
/// against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditAccount {
    /// The account owner.
    pub customer: Address,

    /// Prepaid credit available for charges.
    pub balance: U256,

    /// Monotonic per-customer charge counter.
    pub tx_counter: u64,
}

impl CreditAccount {
    /// A fresh account with zero balance and counter.
    pub fn new(customer: Address) -> Self {
        Self {
            customer,
            balance: U256::ZERO,
            tx_counter: 0,
        }
    }
}
