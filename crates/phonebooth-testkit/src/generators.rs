//! Proptest generators for property-based testing.

use proptest::prelude::*;

use phonebooth_core::{Address, DomainSeparator, GrantMessage, Keypair, SignedGrant, U256};

use crate::fixtures::{TEST_BOOTH_ADDRESS, TEST_CHAIN_ID, TEST_SALT};

/// Generate a keypair from a random seed.
///
/// Seeds of all zeros are not valid scalars, so the first byte is pinned.
pub fn keypair() -> impl Strategy<Value = Keypair> {
    any::<[u8; 32]>().prop_map(|mut seed| {
        seed[0] = 0x01;
        Keypair::from_seed(&seed).expect("nonzero seed below group order")
    })
}

/// Generate a random address (not tied to any known key).
pub fn eth_address() -> impl Strategy<Value = Address> {
    any::<[u8; 20]>().prop_map(Address::from)
}

/// Generate an amount that fits comfortably in charge arithmetic.
pub fn amount() -> impl Strategy<Value = U256> {
    any::<u128>().prop_map(U256::from)
}

/// Generate a transaction counter.
pub fn counter() -> impl Strategy<Value = u64> {
    0u64..=1_000_000u64
}

/// The grant signing domain used by the fixtures.
pub fn test_grant_domain() -> DomainSeparator {
    DomainSeparator::new(
        "PhoneBooth.Grant",
        "v1",
        TEST_CHAIN_ID,
        TEST_BOOTH_ADDRESS,
        TEST_SALT,
    )
}

/// Parameters for generating a signed grant.
#[derive(Debug, Clone)]
pub struct GrantParams {
    pub seed: [u8; 32],
    pub tx_counter: u64,
    pub credit_balance: U256,
    pub approved_amount: U256,
}

impl Arbitrary for GrantParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (any::<[u8; 32]>(), counter(), any::<u128>(), any::<u128>())
            .prop_map(|(mut seed, tx_counter, balance, approved)| {
                seed[0] = 0x01;
                GrantParams {
                    seed,
                    tx_counter,
                    credit_balance: U256::from(balance),
                    approved_amount: U256::from(approved),
                }
            })
            .boxed()
    }
}

/// Sign a grant from parameters under the fixture domain.
pub fn grant_from_params(params: &GrantParams) -> SignedGrant {
    let keypair = Keypair::from_seed(&params.seed).expect("nonzero seed below group order");
    GrantMessage::new(
        keypair.address(),
        params.tx_counter,
        params.credit_balance,
        params.approved_amount,
    )
    .sign(&keypair, &test_grant_domain())
    .expect("signing never fails for a valid key")
}
