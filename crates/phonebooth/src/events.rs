//! Booth events.
//!
//! Every state-changing operation appends exactly one event per committed
//! transition, in commit order. Batch charges emit one event per
//! successful item, in submission order.

use phonebooth_core::{Address, U256};
use serde::{Deserialize, Serialize};

/// A committed booth state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BoothEvent {
    /// A customer deposited prepaid credit.
    CreditDeposited {
        /// The depositing customer.
        customer: Address,
        /// Amount credited.
        amount: U256,
    },

    /// A validated charge debited a customer.
    CustomerCharged {
        /// The charged customer.
        customer: Address,
        /// Amount debited.
        amount: U256,
        /// The customer's counter after the charge.
        new_counter: u64,
    },

    /// An operator withdrew collected funds.
    CreditWithdrawn {
        /// Recipient of the withdrawal.
        to: Address,
        /// Amount paid out.
        amount: U256,
    },
}
