//! Common test utilities
//!
//! Proptest strategies shared by the property suites.

#![allow(dead_code)]

use guarded_account::{Account, AccountConfig};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Any decimal with two places in `[min_cents, max_cents]`
pub fn cents(min_cents: i64, max_cents: i64) -> impl Strategy<Value = Decimal> {
    (min_cents..=max_cents).prop_map(|c| Decimal::new(c, 2))
}

/// Decimals from about 1.8e11 up to and including `Decimal::MAX`
pub fn huge_amount() -> impl Strategy<Value = Decimal> {
    prop_oneof![
        Just(Decimal::MAX),
        (any::<u32>(), any::<u32>(), 1u32..=u32::MAX, 0u32..=8)
            .prop_map(|(lo, mid, hi, scale)| Decimal::from_parts(lo, mid, hi, false, scale)),
    ]
}

/// Lowercase username of exactly `len` characters
pub fn lowercase_name(len: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(proptest::char::range('a', 'z'), len)
        .prop_map(|chars| chars.into_iter().collect())
}

/// Usernames that must be refused: missing, empty, or 1 to 6 letters
pub fn invalid_username() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        (1usize..=6).prop_flat_map(lowercase_name).prop_map(Some),
    ]
}

/// Usernames of 7 to 10 lowercase letters
pub fn valid_username() -> impl Strategy<Value = String> {
    (7usize..=10).prop_flat_map(lowercase_name)
}

/// Initial balances at or above the floor and well under the ceiling
pub fn valid_initial_balance() -> impl Strategy<Value = Decimal> {
    cents(600, 5_000_000)
}

pub fn open(balance: Decimal) -> Account {
    Account::new(AccountConfig::new("1234567", balance)).expect("valid account")
}
