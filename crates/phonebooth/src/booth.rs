//! The booth: grant validation and charge execution over a credit ledger.
//!
//! The booth owns the two signing domains (grants and logins), the
//! operator role set, and the event log. All money-moving paths funnel
//! through [`Booth::charge`] and [`Booth::batch_charge`]; both apply the
//! same per-item validation and differ only in failure isolation.

use std::collections::HashSet;
use std::sync::{Mutex, RwLock};

use phonebooth_core::{Address, ChargeRequest, DomainSeparator, SignedGrant, SignedLogin, B256, U256};
use phonebooth_ledger::{Ledger, LedgerError};
use tracing::{info, warn};

use crate::error::{BoothError, Result};
use crate::events::BoothEvent;
use crate::settlement::{Settlement, SettlementError};

/// Domain name under which grants are signed.
pub const GRANT_DOMAIN_NAME: &str = "PhoneBooth.Grant";

/// Domain name under which login messages are signed.
pub const LOGIN_DOMAIN_NAME: &str = "PhoneBooth.Login";

/// Typed-data domain version shared by both domains.
pub const DOMAIN_VERSION: &str = "v1";

/// Deployment parameters that pin the booth's signing domains.
///
/// Two booths with different configs produce incompatible digests, so a
/// grant signed for one can never be redeemed on the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoothConfig {
    /// Chain the booth is bound to.
    pub chain_id: u64,

    /// The booth's own address, baked into every digest.
    pub booth_address: Address,

    /// Domain salt shared by the grant and login domains.
    pub salt: B256,

    /// The operator that administers roles and may charge and withdraw.
    pub owner: Address,
}

/// Outcome of one successful charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChargeOutcome {
    /// The charged customer.
    pub customer: Address,

    /// Amount debited.
    pub amount: U256,

    /// The customer's counter after the charge.
    pub new_counter: u64,

    /// The customer's balance after the charge.
    pub new_balance: U256,
}

/// Result of a batch charge: one entry per submitted item, in submission
/// order, plus the aggregate paid out to the caller.
#[derive(Debug, Clone)]
pub struct BatchReport {
    /// Per-item outcomes, index-aligned with the submitted grants.
    pub outcomes: Vec<Result<ChargeOutcome>>,

    /// Sum of all successfully debited amounts, paid out once.
    pub total_paid: U256,

    /// Result of the aggregate payout. Item debits and events are
    /// committed either way; a payout failure is a settlement-layer
    /// problem for the caller to pursue, not a grant failure.
    pub payout: std::result::Result<(), SettlementError>,
}

impl BatchReport {
    /// Number of items that were charged.
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_ok()).count()
    }

    /// Number of items that were skipped.
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }
}

/// The micropayment booth.
///
/// Generic over the ledger backend and the settlement layer. All methods
/// take `&self`; interior locks serialize role changes and event
/// appends, while ledger atomicity is the ledger's own contract.
pub struct Booth<L: Ledger, S: Settlement> {
    grant_domain: DomainSeparator,
    login_domain: DomainSeparator,
    owner: Address,
    fund_managers: RwLock<HashSet<Address>>,
    ledger: L,
    settlement: S,
    events: Mutex<Vec<BoothEvent>>,
}

impl<L: Ledger, S: Settlement> Booth<L, S> {
    /// Create a booth with the given deployment config and backends.
    pub fn new(config: BoothConfig, ledger: L, settlement: S) -> Self {
        Self {
            grant_domain: DomainSeparator::new(
                GRANT_DOMAIN_NAME,
                DOMAIN_VERSION,
                config.chain_id,
                config.booth_address,
                config.salt,
            ),
            login_domain: DomainSeparator::new(
                LOGIN_DOMAIN_NAME,
                DOMAIN_VERSION,
                config.chain_id,
                config.booth_address,
                config.salt,
            ),
            owner: config.owner,
            fund_managers: RwLock::new(HashSet::new()),
            ledger,
            settlement,
            events: Mutex::new(Vec::new()),
        }
    }

    /// The domain grants must be signed under to redeem on this booth.
    pub fn grant_domain(&self) -> &DomainSeparator {
        &self.grant_domain
    }

    /// The domain login messages must be signed under.
    pub fn login_domain(&self) -> &DomainSeparator {
        &self.login_domain
    }

    /// The booth's owner.
    pub fn owner(&self) -> Address {
        self.owner
    }

    /// The underlying settlement backend.
    pub fn settlement(&self) -> &S {
        &self.settlement
    }

    /// Events emitted so far, in commit order.
    pub fn events(&self) -> Vec<BoothEvent> {
        self.events.lock().unwrap().clone()
    }

    // ---- role management ----

    /// Grant or revoke the fund-manager role. Owner only.
    pub fn set_fund_manager(&self, caller: Address, manager: Address, enabled: bool) -> Result<()> {
        if caller != self.owner {
            return Err(BoothError::Unauthorized(caller));
        }

        let mut managers = self.fund_managers.write().unwrap();
        if enabled {
            managers.insert(manager);
        } else {
            managers.remove(&manager);
        }
        info!(%manager, enabled, "fund manager role updated");
        Ok(())
    }

    /// Whether `caller` holds the fund-manager role.
    pub fn is_fund_manager(&self, caller: Address) -> bool {
        self.fund_managers.read().unwrap().contains(&caller)
    }

    fn authorize(&self, caller: Address) -> Result<()> {
        if caller == self.owner || self.is_fund_manager(caller) {
            Ok(())
        } else {
            Err(BoothError::Unauthorized(caller))
        }
    }

    // ---- customer-facing reads and deposits ----

    /// A customer's live credit balance.
    pub fn credit_balance(&self, customer: Address) -> U256 {
        self.ledger.balance_of(customer)
    }

    /// A customer's live transaction counter.
    pub fn current_tx_counter(&self, customer: Address) -> u64 {
        self.ledger.counter_of(customer)
    }

    /// Deposit prepaid credit onto a customer's account.
    ///
    /// Open to anyone; zero deposits are rejected. Invalidates every
    /// grant the customer has outstanding, since their signed balance
    /// snapshot no longer matches.
    pub fn deposit_credit(&self, customer: Address, amount: U256) -> Result<U256> {
        let account = self.ledger.credit(customer, amount)?;
        self.settlement.receive_value(customer, amount)?;

        info!(%customer, %amount, new_balance = %account.balance, "credit deposited");
        self.emit(BoothEvent::CreditDeposited { customer, amount });
        Ok(account.balance)
    }

    // ---- validation ----

    /// Whether the request's signature recovers to the claimed customer
    /// under this booth's grant domain.
    pub fn validate_grant_signature(&self, request: &ChargeRequest) -> bool {
        let grant = SignedGrant {
            message: request.message(),
            signature: request.signature,
        };
        grant.is_signed_by_customer(&self.grant_domain)
    }

    /// Whether the request is redeemable against live account state.
    ///
    /// Three rules: the signed counter matches the live counter, the
    /// signed balance matches the live balance, and the requested amount
    /// does not exceed the approved ceiling. Signature validity is
    /// checked separately by [`Self::validate_grant_signature`].
    pub fn validate_charge_request(&self, request: &ChargeRequest) -> bool {
        request.tx_counter == self.ledger.counter_of(request.customer)
            && request.credit_balance == self.ledger.balance_of(request.customer)
            && request.requested_amount <= request.approved_amount
    }

    /// Whether the login recovers to the claimed customer under this
    /// booth's login domain.
    pub fn validate_login_signature(&self, login: &SignedLogin) -> bool {
        login.is_signed_by_customer(&self.login_domain)
    }

    // ---- charging ----

    /// Redeem one grant: validate, debit the customer, pay the caller.
    ///
    /// Fails atomically; on any error the customer's account is
    /// untouched and nothing is paid out.
    pub fn charge(&self, caller: Address, request: &ChargeRequest) -> Result<ChargeOutcome> {
        self.authorize(caller)?;

        let outcome = self.execute_charge(request)?;
        self.settlement.pay_out(caller, outcome.amount)?;
        Ok(outcome)
    }

    /// Redeem many grants in one call with per-item failure isolation.
    ///
    /// `requested_amounts` and `grants` are index-aligned; unequal
    /// lengths reject the whole call with `ArityMismatch`. Items that
    /// fail validation are skipped and recorded; the remaining items
    /// still commit. One aggregate payout covers every success.
    pub fn batch_charge(
        &self,
        caller: Address,
        requested_amounts: &[U256],
        grants: &[SignedGrant],
    ) -> Result<BatchReport> {
        self.authorize(caller)?;

        if requested_amounts.len() != grants.len() {
            return Err(BoothError::ArityMismatch {
                expected: grants.len(),
                got: requested_amounts.len(),
            });
        }

        let mut outcomes = Vec::with_capacity(grants.len());
        let mut total_paid = U256::ZERO;

        for (index, (amount, grant)) in requested_amounts.iter().zip(grants).enumerate() {
            let request = grant.to_charge_request(*amount);
            match self.execute_charge(&request) {
                Ok(outcome) => {
                    total_paid += outcome.amount;
                    outcomes.push(Ok(outcome));
                }
                Err(err) => {
                    warn!(index, customer = %request.customer, %err, "batch item skipped");
                    outcomes.push(Err(err));
                }
            }
        }

        let payout = if total_paid.is_zero() {
            Ok(())
        } else {
            self.settlement.pay_out(caller, total_paid)
        };
        if let Err(ref err) = payout {
            warn!(%err, %total_paid, "aggregate payout failed");
        }

        Ok(BatchReport {
            outcomes,
            total_paid,
            payout,
        })
    }

    /// Validate and debit one charge, emitting its event.
    ///
    /// Shared by single and batch charges; authorization and payout
    /// happen in the callers.
    fn execute_charge(&self, request: &ChargeRequest) -> Result<ChargeOutcome> {
        if !self.validate_grant_signature(request) {
            return Err(BoothError::InvalidSignature);
        }

        if request.requested_amount > request.approved_amount {
            return Err(BoothError::StaleOrOverLimitGrant);
        }

        // Snapshot match, balance check, and debit happen in one ledger
        // critical section, so two redemptions of the same grant cannot
        // both pass validation before either commits. A customer may
        // approve more than they hold; the shortfall only surfaces here,
        // as its own variant.
        let account = self
            .ledger
            .debit_if(
                request.customer,
                request.requested_amount,
                request.tx_counter,
                request.credit_balance,
            )
            .map_err(|err| match err {
                LedgerError::SnapshotMismatch { .. } => BoothError::StaleOrOverLimitGrant,
                LedgerError::InsufficientBalance { requested, balance } => {
                    BoothError::InsufficientBalance { requested, balance }
                }
                other => BoothError::Ledger(other),
            })?;

        info!(
            customer = %request.customer,
            amount = %request.requested_amount,
            new_counter = account.tx_counter,
            "customer charged"
        );
        self.emit(BoothEvent::CustomerCharged {
            customer: request.customer,
            amount: request.requested_amount,
            new_counter: account.tx_counter,
        });

        Ok(ChargeOutcome {
            customer: request.customer,
            amount: request.requested_amount,
            new_counter: account.tx_counter,
            new_balance: account.balance,
        })
    }

    // ---- withdrawals ----

    /// Pay collected funds out to `to`. Owner or fund manager only.
    pub fn withdraw(&self, caller: Address, to: Address, amount: U256) -> Result<()> {
        self.authorize(caller)?;

        self.settlement.pay_out(to, amount)?;
        info!(%to, %amount, "funds withdrawn");
        self.emit(BoothEvent::CreditWithdrawn { to, amount });
        Ok(())
    }

    fn emit(&self, event: BoothEvent) {
        self.events.lock().unwrap().push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settlement::NoopSettlement;
    use phonebooth_core::{GrantMessage, Keypair, LoginMessage};
    use phonebooth_ledger::MemoryLedger;

    const SALT: B256 = B256::repeat_byte(0xb2);

    fn owner() -> Address {
        Address::repeat_byte(0xAA)
    }

    fn booth() -> Booth<MemoryLedger, NoopSettlement> {
        let config = BoothConfig {
            chain_id: 1337,
            booth_address: Address::repeat_byte(0xBB),
            salt: SALT,
            owner: owner(),
        };
        Booth::new(config, MemoryLedger::new(), NoopSettlement)
    }

    fn customer() -> Keypair {
        Keypair::from_seed(&[0x01; 32]).unwrap()
    }

    fn issue_grant(
        booth: &Booth<MemoryLedger, NoopSettlement>,
        keypair: &Keypair,
        approved: U256,
    ) -> SignedGrant {
        let message = GrantMessage::new(
            keypair.address(),
            booth.current_tx_counter(keypair.address()),
            booth.credit_balance(keypair.address()),
            approved,
        );
        message.sign(keypair, booth.grant_domain()).unwrap()
    }

    #[test]
    fn test_deposit_credits_and_emits() {
        let booth = booth();
        let customer = customer().address();

        let balance = booth.deposit_credit(customer, U256::from(100u64)).unwrap();
        assert_eq!(balance, U256::from(100u64));
        assert_eq!(booth.credit_balance(customer), U256::from(100u64));
        assert_eq!(
            booth.events(),
            vec![BoothEvent::CreditDeposited {
                customer,
                amount: U256::from(100u64),
            }]
        );
    }

    #[test]
    fn test_zero_deposit_rejected() {
        let booth = booth();
        let err = booth
            .deposit_credit(customer().address(), U256::ZERO)
            .unwrap_err();
        assert!(matches!(err, BoothError::Ledger(_)));
        assert!(booth.events().is_empty());
    }

    #[test]
    fn test_charge_requires_operator() {
        let booth = booth();
        let keypair = customer();
        booth
            .deposit_credit(keypair.address(), U256::from(100u64))
            .unwrap();

        let grant = issue_grant(&booth, &keypair, U256::from(10u64));
        let stranger = Address::repeat_byte(0xCC);
        let err = booth
            .charge(stranger, &grant.to_charge_request(U256::from(5u64)))
            .unwrap_err();
        assert_eq!(err, BoothError::Unauthorized(stranger));
        assert_eq!(booth.credit_balance(keypair.address()), U256::from(100u64));
    }

    #[test]
    fn test_charge_debits_and_increments_counter() {
        let booth = booth();
        let keypair = customer();
        booth
            .deposit_credit(keypair.address(), U256::from(100u64))
            .unwrap();

        let grant = issue_grant(&booth, &keypair, U256::from(10u64));
        let outcome = booth
            .charge(owner(), &grant.to_charge_request(U256::from(5u64)))
            .unwrap();

        assert_eq!(outcome.amount, U256::from(5u64));
        assert_eq!(outcome.new_counter, 1);
        assert_eq!(outcome.new_balance, U256::from(95u64));
        assert_eq!(booth.current_tx_counter(keypair.address()), 1);
    }

    #[test]
    fn test_concurrent_redemption_charges_once() {
        use std::sync::{Arc, Barrier};
        use std::thread;

        let keypair = customer();
        for _ in 0..100 {
            let booth = Arc::new(booth());
            booth
                .deposit_credit(keypair.address(), U256::from(100u64))
                .unwrap();

            let grant = issue_grant(&booth, &keypair, U256::from(10u64));
            let request = grant.to_charge_request(U256::from(10u64));

            let barrier = Arc::new(Barrier::new(2));
            let handles: Vec<_> = (0..2)
                .map(|_| {
                    let booth = Arc::clone(&booth);
                    let barrier = Arc::clone(&barrier);
                    thread::spawn(move || {
                        barrier.wait();
                        booth.charge(owner(), &request)
                    })
                })
                .collect();

            let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
            assert_eq!(
                results.iter().filter(|r| r.is_ok()).count(),
                1,
                "one signed grant must be redeemed exactly once"
            );
            assert_eq!(booth.credit_balance(keypair.address()), U256::from(90u64));
            assert_eq!(booth.current_tx_counter(keypair.address()), 1);
        }
    }

    #[test]
    fn test_grant_reuse_rejected() {
        let booth = booth();
        let keypair = customer();
        booth
            .deposit_credit(keypair.address(), U256::from(100u64))
            .unwrap();

        let grant = issue_grant(&booth, &keypair, U256::from(10u64));
        let request = grant.to_charge_request(U256::from(5u64));

        booth.charge(owner(), &request).unwrap();
        let err = booth.charge(owner(), &request).unwrap_err();
        assert_eq!(err, BoothError::StaleOrOverLimitGrant);
        assert_eq!(booth.credit_balance(keypair.address()), U256::from(95u64));
    }

    #[test]
    fn test_deposit_invalidates_outstanding_grant() {
        let booth = booth();
        let keypair = customer();
        booth
            .deposit_credit(keypair.address(), U256::from(100u64))
            .unwrap();

        let grant = issue_grant(&booth, &keypair, U256::from(10u64));
        booth
            .deposit_credit(keypair.address(), U256::from(1u64))
            .unwrap();

        let err = booth
            .charge(owner(), &grant.to_charge_request(U256::from(5u64)))
            .unwrap_err();
        assert_eq!(err, BoothError::StaleOrOverLimitGrant);
    }

    #[test]
    fn test_over_approval_rejected() {
        let booth = booth();
        let keypair = customer();
        booth
            .deposit_credit(keypair.address(), U256::from(100u64))
            .unwrap();

        let grant = issue_grant(&booth, &keypair, U256::from(10u64));
        let err = booth
            .charge(owner(), &grant.to_charge_request(U256::from(11u64)))
            .unwrap_err();
        assert_eq!(err, BoothError::StaleOrOverLimitGrant);
    }

    #[test]
    fn test_forged_signature_rejected() {
        let booth = booth();
        let keypair = customer();
        let forger = Keypair::from_seed(&[0x02; 32]).unwrap();
        booth
            .deposit_credit(keypair.address(), U256::from(100u64))
            .unwrap();

        // Forger signs a message claiming to be the customer.
        let message = GrantMessage::new(keypair.address(), 0, U256::from(100u64), U256::from(10u64));
        let grant = message.sign(&forger, booth.grant_domain()).unwrap();

        let err = booth
            .charge(owner(), &grant.to_charge_request(U256::from(5u64)))
            .unwrap_err();
        assert_eq!(err, BoothError::InvalidSignature);
    }

    #[test]
    fn test_approval_above_balance_allowed_until_redeemed() {
        let booth = booth();
        let keypair = customer();
        booth
            .deposit_credit(keypair.address(), U256::from(100u64))
            .unwrap();

        // Approving more than the balance is fine; only redeeming the
        // excess fails.
        let grant = issue_grant(&booth, &keypair, U256::from(110u64));
        let err = booth
            .charge(owner(), &grant.to_charge_request(U256::from(110u64)))
            .unwrap_err();
        assert_eq!(
            err,
            BoothError::InsufficientBalance {
                requested: U256::from(110u64),
                balance: U256::from(100u64),
            }
        );

        let outcome = booth
            .charge(owner(), &grant.to_charge_request(U256::from(100u64)))
            .unwrap();
        assert_eq!(outcome.new_balance, U256::ZERO);
    }

    #[test]
    fn test_batch_arity_mismatch_rejects_whole_call() {
        let booth = booth();
        let keypair = customer();
        booth
            .deposit_credit(keypair.address(), U256::from(100u64))
            .unwrap();

        let grant = issue_grant(&booth, &keypair, U256::from(10u64));
        let err = booth
            .batch_charge(owner(), &[U256::from(5u64), U256::from(5u64)], &[grant])
            .unwrap_err();
        assert_eq!(err, BoothError::ArityMismatch { expected: 1, got: 2 });
        assert_eq!(booth.credit_balance(keypair.address()), U256::from(100u64));
    }

    #[test]
    fn test_batch_isolates_item_failures() {
        let booth = booth();
        let alice = customer();
        let bob = Keypair::from_seed(&[0x02; 32]).unwrap();
        booth
            .deposit_credit(alice.address(), U256::from(100u64))
            .unwrap();
        booth
            .deposit_credit(bob.address(), U256::from(100u64))
            .unwrap();

        let alice_grant = issue_grant(&booth, &alice, U256::from(10u64));
        let bob_grant = issue_grant(&booth, &bob, U256::from(10u64));

        // Alice's grant goes stale before the batch lands.
        booth
            .deposit_credit(alice.address(), U256::from(1u64))
            .unwrap();

        let report = booth
            .batch_charge(
                owner(),
                &[U256::from(5u64), U256::from(7u64)],
                &[alice_grant, bob_grant],
            )
            .unwrap();

        assert_eq!(report.succeeded(), 1);
        assert_eq!(report.failed(), 1);
        assert_eq!(report.total_paid, U256::from(7u64));
        assert!(report.payout.is_ok());
        assert_eq!(
            report.outcomes[0],
            Err(BoothError::StaleOrOverLimitGrant)
        );
        assert_eq!(booth.credit_balance(alice.address()), U256::from(101u64));
        assert_eq!(booth.credit_balance(bob.address()), U256::from(93u64));
    }

    #[test]
    fn test_batch_report_survives_payout_failure() {
        struct RefusingSettlement;

        impl Settlement for RefusingSettlement {
            fn receive_value(
                &self,
                _from: Address,
                _amount: U256,
            ) -> std::result::Result<(), SettlementError> {
                Ok(())
            }

            fn pay_out(
                &self,
                _to: Address,
                _amount: U256,
            ) -> std::result::Result<(), SettlementError> {
                Err(SettlementError("bank offline".to_string()))
            }
        }

        let config = BoothConfig {
            chain_id: 1337,
            booth_address: Address::repeat_byte(0xBB),
            salt: SALT,
            owner: owner(),
        };
        let booth = Booth::new(config, MemoryLedger::new(), RefusingSettlement);

        let keypair = customer();
        booth
            .deposit_credit(keypair.address(), U256::from(100u64))
            .unwrap();

        let grant = {
            let message = GrantMessage::new(
                keypair.address(),
                booth.current_tx_counter(keypair.address()),
                booth.credit_balance(keypair.address()),
                U256::from(10u64),
            );
            message.sign(&keypair, booth.grant_domain()).unwrap()
        };

        // The debit commits; the failed payout is reported, not thrown,
        // so the per-item statuses survive.
        let report = booth
            .batch_charge(owner(), &[U256::from(5u64)], &[grant])
            .unwrap();

        assert_eq!(report.succeeded(), 1);
        assert_eq!(report.total_paid, U256::from(5u64));
        assert!(report.payout.is_err());
        assert_eq!(booth.credit_balance(keypair.address()), U256::from(95u64));
        assert_eq!(booth.current_tx_counter(keypair.address()), 1);
        assert!(matches!(
            booth.events().last(),
            Some(BoothEvent::CustomerCharged { .. })
        ));
    }

    #[test]
    fn test_fund_manager_role_grants_charge_access() {
        let booth = booth();
        let keypair = customer();
        let manager = Address::repeat_byte(0xDD);
        booth
            .deposit_credit(keypair.address(), U256::from(100u64))
            .unwrap();

        // Only the owner may assign the role.
        assert_eq!(
            booth
                .set_fund_manager(manager, manager, true)
                .unwrap_err(),
            BoothError::Unauthorized(manager)
        );

        booth.set_fund_manager(owner(), manager, true).unwrap();
        assert!(booth.is_fund_manager(manager));

        let grant = issue_grant(&booth, &keypair, U256::from(10u64));
        booth
            .charge(manager, &grant.to_charge_request(U256::from(5u64)))
            .unwrap();

        // Revocation takes effect immediately.
        booth.set_fund_manager(owner(), manager, false).unwrap();
        let grant = issue_grant(&booth, &keypair, U256::from(10u64));
        assert_eq!(
            booth
                .charge(manager, &grant.to_charge_request(U256::from(5u64)))
                .unwrap_err(),
            BoothError::Unauthorized(manager)
        );
    }

    #[test]
    fn test_withdraw_emits_event() {
        let booth = booth();
        let to = Address::repeat_byte(0xEE);

        booth.withdraw(owner(), to, U256::from(42u64)).unwrap();
        assert_eq!(
            booth.events(),
            vec![BoothEvent::CreditWithdrawn {
                to,
                amount: U256::from(42u64),
            }]
        );

        let stranger = Address::repeat_byte(0xCC);
        assert_eq!(
            booth.withdraw(stranger, to, U256::from(1u64)).unwrap_err(),
            BoothError::Unauthorized(stranger)
        );
    }

    #[test]
    fn test_login_validation() {
        let booth = booth();
        let keypair = customer();

        let message = LoginMessage::new(keypair.address(), 1_736_870_400_000);
        let login = message.sign(&keypair, booth.login_domain()).unwrap();
        assert!(booth.validate_login_signature(&login));

        // A grant-domain signature must not pass as a login.
        let cross = message.sign(&keypair, booth.grant_domain()).unwrap();
        assert!(!booth.validate_login_signature(&cross));
    }

    #[test]
    fn test_events_in_commit_order() {
        let booth = booth();
        let keypair = customer();
        booth
            .deposit_credit(keypair.address(), U256::from(100u64))
            .unwrap();

        let grant = issue_grant(&booth, &keypair, U256::from(10u64));
        booth
            .charge(owner(), &grant.to_charge_request(U256::from(5u64)))
            .unwrap();

        let events = booth.events();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], BoothEvent::CreditDeposited { .. }));
        assert!(matches!(
            events[1],
            BoothEvent::CustomerCharged { new_counter: 1, .. }
        ));
    }
}
