//! # PhoneBooth
//!
//! An off-chain-authorized, on-chain-settled micropayment booth.
//! Customers pre-fund credit; businesses redeem customer-signed grants
//! for exact charges, singly or in batches.
//!
//! ## Architecture
//!
//! - [`core`](phonebooth_core) - typed-data hashing, recoverable
//!   signatures, grant messages
//! - [`ledger`](phonebooth_ledger) - per-customer balances and counters
//!   behind the [`Ledger`] trait
//! - this crate - the [`Booth`] engine: validation, charge execution,
//!   roles, events, and the [`Settlement`] seam to real value transfer
//!
//! ## Replay Protection
//!
//! A grant binds the customer's live `(tx_counter, credit_balance)`
//! snapshot. Every successful charge bumps the counter and every deposit
//! moves the balance, so any committed transition invalidates all
//! outstanding grants. No per-grant nonce bookkeeping is needed.
//!
//! ## Example
//!
//! ```
//! use phonebooth::{Booth, BoothConfig, NoopSettlement};
//! use phonebooth::core::{GrantMessage, Keypair, B256, U256};
//! use phonebooth::ledger::MemoryLedger;
//!
//! let operator = Keypair::generate();
//! let customer = Keypair::generate();
//!
//! let booth = Booth::new(
//!     BoothConfig {
//!         chain_id: 1337,
//!         booth_address: Keypair::generate().address(),
//!         salt: B256::ZERO,
//!         owner: operator.address(),
//!     },
//!     MemoryLedger::new(),
//!     NoopSettlement,
//! );
//!
//! booth.deposit_credit(customer.address(), U256::from(100u64))?;
//!
//! let grant = GrantMessage::new(customer.address(), 0, U256::from(100u64), U256::from(10u64))
//!     .sign(&customer, booth.grant_domain())?;
//! let outcome = booth.charge(operator.address(), &grant.to_charge_request(U256::from(5u64)))?;
//!
//! assert_eq!(outcome.new_balance, U256::from(95u64));
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod booth;
pub mod error;
pub mod events;
pub mod settlement;

pub use booth::{
    BatchReport, Booth, BoothConfig, ChargeOutcome, DOMAIN_VERSION, GRANT_DOMAIN_NAME,
    LOGIN_DOMAIN_NAME,
};
pub use error::{BoothError, Result};
pub use events::BoothEvent;
pub use settlement::{NoopSettlement, Settlement, SettlementError};

// Convenience access to the lower layers.
pub use phonebooth_core as core;
pub use phonebooth_ledger as ledger;

pub use phonebooth_core::{ChargeRequest, GrantMessage, SignedGrant, SignedLogin};
pub use phonebooth_ledger::{Ledger, MemoryLedger};
