//! # PhoneBooth Ledger
//!
//! Per-customer credit accounting for the PhoneBooth.
//!
//! The ledger is an abstract key-value store keyed by customer address.
//! This crate defines the [`Ledger`] trait the booth operates against and
//! an in-memory reference implementation. Persistent backends live behind
//! the same trait and are out of scope here.
//!
//! ## Concurrency
//!
//! The booth's replay protection assumes that ledger mutations for one
//! customer are applied atomically and serially relative to each other.
//! [`MemoryLedger`] provides this with a single write lock; other
//! implementations must provide an equivalent per-account total order.

pub mod account;
pub mod error;
pub mod memory;
pub mod traits;

pub use account::CreditAccount;
pub use error::{LedgerError, Result};
pub use memory::MemoryLedger;
pub use traits::Ledger;
