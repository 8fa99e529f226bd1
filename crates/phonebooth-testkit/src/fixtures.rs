//! Test fixtures and helpers.
//!
//! Common setup code for integration tests: a deterministic booth with
//! named parties and a settlement stub that records every transfer.

use std::sync::Mutex;

use phonebooth::{Booth, BoothConfig, ChargeOutcome, Result as BoothResult, Settlement, SettlementError};
use phonebooth_core::{
    address, b256, Address, ChargeRequest, GrantMessage, Keypair, LoginMessage, SignedGrant,
    SignedLogin, B256, U256,
};
use phonebooth_ledger::MemoryLedger;

/// Chain ID used by every fixture booth.
pub const TEST_CHAIN_ID: u64 = 1337;

/// Fixture booth address, shared with the golden vectors.
pub const TEST_BOOTH_ADDRESS: Address = address!("88f9b82462f6c4bf4a0fb15e5c3971559a316e7f");

/// Fixture domain salt, shared with the golden vectors.
pub const TEST_SALT: B256 =
    b256!("b225c57bf2111d6955b97ef0f55525b5a400dc909a5506e34b102e193dd53406");

/// Settlement stub that accepts every transfer and records it.
#[derive(Debug, Default)]
pub struct RecordingBank {
    received: Mutex<Vec<(Address, U256)>>,
    paid: Mutex<Vec<(Address, U256)>>,
}

impl RecordingBank {
    /// All inbound transfers, in order.
    pub fn received(&self) -> Vec<(Address, U256)> {
        self.received.lock().unwrap().clone()
    }

    /// All outbound transfers, in order.
    pub fn payouts(&self) -> Vec<(Address, U256)> {
        self.paid.lock().unwrap().clone()
    }
}

impl Settlement for RecordingBank {
    fn receive_value(&self, from: Address, amount: U256) -> Result<(), SettlementError> {
        self.received.lock().unwrap().push((from, amount));
        Ok(())
    }

    fn pay_out(&self, to: Address, amount: U256) -> Result<(), SettlementError> {
        self.paid.lock().unwrap().push((to, amount));
        Ok(())
    }
}

/// A booth with deterministic parties, ready for scenario tests.
pub struct TestBooth {
    pub booth: Booth<MemoryLedger, RecordingBank>,
    pub operator: Keypair,
    pub customer: Keypair,
    pub second_customer: Keypair,
}

impl TestBooth {
    /// Build the standard fixture: chain 1337, fixed salt, seeded keys.
    pub fn new() -> Self {
        let operator = Keypair::from_seed(&[0x42; 32]).unwrap();
        let customer = Keypair::from_seed(&[0x01; 32]).unwrap();
        let second_customer = Keypair::from_seed(&[0x02; 32]).unwrap();

        let booth = Booth::new(
            BoothConfig {
                chain_id: TEST_CHAIN_ID,
                booth_address: TEST_BOOTH_ADDRESS,
                salt: TEST_SALT,
                owner: operator.address(),
            },
            MemoryLedger::new(),
            RecordingBank::default(),
        );

        Self {
            booth,
            operator,
            customer,
            second_customer,
        }
    }

    /// Deposit credit for one of the fixture customers.
    pub fn deposit(&self, customer: &Keypair, amount: U256) -> BoothResult<U256> {
        self.booth.deposit_credit(customer.address(), amount)
    }

    /// Sign a grant against the customer's live counter and balance.
    pub fn issue_grant(&self, customer: &Keypair, approved: U256) -> SignedGrant {
        let message = GrantMessage::new(
            customer.address(),
            self.booth.current_tx_counter(customer.address()),
            self.booth.credit_balance(customer.address()),
            approved,
        );
        message
            .sign(customer, self.booth.grant_domain())
            .expect("fixture keypair signs")
    }

    /// Sign a login message for one of the fixture customers.
    pub fn issue_login(&self, customer: &Keypair, timestamp: u64) -> SignedLogin {
        LoginMessage::new(customer.address(), timestamp)
            .sign(customer, self.booth.login_domain())
            .expect("fixture keypair signs")
    }

    /// Redeem a charge request as the owner.
    pub fn charge(&self, request: &ChargeRequest) -> BoothResult<ChargeOutcome> {
        self.booth.charge(self.operator.address(), request)
    }
}

impl Default for TestBooth {
    fn default() -> Self {
        Self::new()
    }
}
