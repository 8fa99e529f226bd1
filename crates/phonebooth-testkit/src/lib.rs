//! # PhoneBooth Testkit
//!
//! Testing utilities for the PhoneBooth workspace.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: grant messages with pinned struct hashes and
//!   signing digests for cross-implementation verification
//! - **Generators**: proptest strategies for property-based testing
//! - **Fixtures**: a deterministic booth with named parties and a
//!   recording settlement stub
//!
//! ## Golden Vectors
//!
//! ```rust
//! use phonebooth_testkit::vectors::verify_all_vectors;
//!
//! verify_all_vectors().unwrap();
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use phonebooth_testkit::generators::{grant_from_params, test_grant_domain, GrantParams};
//!
//! proptest! {
//!     #[test]
//!     fn grants_recover_to_their_customer(params: GrantParams) {
//!         let grant = grant_from_params(&params);
//!         prop_assert!(grant.is_signed_by_customer(&test_grant_domain()));
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use phonebooth::core::U256;
//! use phonebooth_testkit::fixtures::TestBooth;
//!
//! let t = TestBooth::new();
//! t.deposit(&t.customer, U256::from(100u64)).unwrap();
//! let grant = t.issue_grant(&t.customer, U256::from(10u64));
//! t.charge(&grant.to_charge_request(U256::from(5u64))).unwrap();
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{RecordingBank, TestBooth, TEST_BOOTH_ADDRESS, TEST_CHAIN_ID, TEST_SALT};
pub use generators::{grant_from_params, test_grant_domain, GrantParams};
pub use vectors::{all_vectors, verify_all_vectors, GoldenVector};
