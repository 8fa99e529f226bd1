//! Settlement seam: where validated value actually moves.
//!
//! The booth validates and accounts; it does not hold funds itself. This
//! trait is the boundary to whatever moves real value, a chain client in
//! production or a recording stub in tests.

use phonebooth_core::{Address, U256};
use thiserror::Error;

/// Failure in the external value-transfer layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("settlement failed: {0}")]
pub struct SettlementError(pub String);

/// Result type for settlement operations.
pub type Result<T> = std::result::Result<T, SettlementError>;

/// Moves real value in and out of the booth.
///
/// `receive_value` is called when a deposit arrives, after the ledger has
/// been credited. `pay_out` is called once per successful charge (or once
/// per batch, with the aggregate) and on withdrawals, after the ledger
/// state transition has committed. Implementations must not call back
/// into the booth.
pub trait Settlement: Send + Sync {
    /// Acknowledge inbound value from `from`.
    fn receive_value(&self, from: Address, amount: U256) -> Result<()>;

    /// Transfer `amount` out to `to`.
    fn pay_out(&self, to: Address, amount: U256) -> Result<()>;
}

/// Settlement backend that accepts everything and moves nothing.
///
/// Used when the booth is run purely as an accounting engine.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSettlement;

impl Settlement for NoopSettlement {
    fn receive_value(&self, _from: Address, _amount: U256) -> Result<()> {
        Ok(())
    }

    fn pay_out(&self, _to: Address, _amount: U256) -> Result<()> {
        Ok(())
    }
}
