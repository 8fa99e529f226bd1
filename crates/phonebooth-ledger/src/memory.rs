//! In-memory implementation of the Ledger trait.
//!
//! The reference implementation, also used by tests. Same semantics as a
//! persistent backend but keeps everything in a map with no durability.

use std::collections::HashMap;
use std::sync::RwLock;

use phonebooth_core::{Address, U256};

use crate::account::CreditAccount;
use crate::error::{LedgerError, Result};
use crate::traits::Ledger;

/// In-memory credit ledger.
///
/// All data is lost when the ledger is dropped. Thread-safe via RwLock;
/// the write-lock scope gives the per-account mutation ordering the
/// booth's replay protection relies on.
pub struct MemoryLedger {
    accounts: RwLock<HashMap<Address, CreditAccount>>,
}

impl MemoryLedger {
    /// Create a new empty ledger.
    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger for MemoryLedger {
    fn account(&self, customer: Address) -> Option<CreditAccount> {
        let accounts = self.accounts.read().unwrap();
        accounts.get(&customer).copied()
    }

    fn balance_of(&self, customer: Address) -> U256 {
        self.account(customer)
            .map(|a| a.balance)
            .unwrap_or(U256::ZERO)
    }

    fn counter_of(&self, customer: Address) -> u64 {
        self.account(customer).map(|a| a.tx_counter).unwrap_or(0)
    }

    fn credit(&self, customer: Address, amount: U256) -> Result<CreditAccount> {
        if amount.is_zero() {
            return Err(LedgerError::ZeroDeposit);
        }

        let mut accounts = self.accounts.write().unwrap();
        let account = accounts
            .entry(customer)
            .or_insert_with(|| CreditAccount::new(customer));

        account.balance = account
            .balance
            .checked_add(amount)
            .ok_or(LedgerError::BalanceOverflow {
                balance: account.balance,
                amount,
            })?;

        Ok(*account)
    }

    fn debit(&self, customer: Address, amount: U256) -> Result<CreditAccount> {
        let mut accounts = self.accounts.write().unwrap();
        // Unknown customers hold nothing; do not materialize an account.
        let account = accounts
            .get_mut(&customer)
            .ok_or(LedgerError::InsufficientBalance {
                requested: amount,
                balance: U256::ZERO,
            })?;

        if amount > account.balance {
            return Err(LedgerError::InsufficientBalance {
                requested: amount,
                balance: account.balance,
            });
        }

        account.balance -= amount;
        account.tx_counter += 1;

        Ok(*account)
    }

    fn debit_if(
        &self,
        customer: Address,
        amount: U256,
        expected_counter: u64,
        expected_balance: U256,
    ) -> Result<CreditAccount> {
        let mut accounts = self.accounts.write().unwrap();
        let live = accounts
            .get(&customer)
            .copied()
            .unwrap_or_else(|| CreditAccount::new(customer));

        if live.tx_counter != expected_counter || live.balance != expected_balance {
            return Err(LedgerError::SnapshotMismatch {
                expected_counter,
                live_counter: live.tx_counter,
                expected_balance,
                live_balance: live.balance,
            });
        }

        if amount > live.balance {
            return Err(LedgerError::InsufficientBalance {
                requested: amount,
                balance: live.balance,
            });
        }

        let account = accounts
            .entry(customer)
            .or_insert_with(|| CreditAccount::new(customer));
        account.balance -= amount;
        account.tx_counter += 1;

        Ok(*account)
    }
}
