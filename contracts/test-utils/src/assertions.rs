//! Assertion utilities for common test scenarios.
//!
//! The `assert_reverted*` helpers take the value returned by a generated
//! `try_*` client method.

use core::fmt::Debug;

use lock_with_reward::{Error, LockWithRewardContractClient};
use soroban_sdk::{token, Address, InvokeError};

/// Asserts that an invocation failed with the given contract error.
///
/// The panic message carries the human-readable revert reason of both the
/// expected and the actual error.
///
/// # Example
/// ```rust,no_run
/// # use lock_with_reward::Error;
/// # use test_utils::*;
/// let setup = TestSetup::new();
/// assert_reverted_with(
///     setup.contract.try_lock(&setup.tester, &ONE_THOUSAND),
///     Error::LockTimeNotStarted,
/// );
/// ```
pub fn assert_reverted_with<T: Debug, C: Debug>(
    result: Result<Result<T, C>, Result<Error, InvokeError>>,
    expected: Error,
) {
    match result {
        Err(Ok(actual)) => assert_eq!(
            actual,
            expected,
            "Expected revert '{}', but got '{}'",
            expected.reason(),
            actual.reason()
        ),
        other => panic!(
            "Expected revert '{}', but got {:?}",
            expected.reason(),
            other
        ),
    }
}

/// Asserts that an invocation failed, for any reason.
pub fn assert_reverted<T: Debug, E: Debug>(result: Result<T, E>) {
    assert!(
        result.is_err(),
        "Expected the invocation to revert, but it returned {:?}",
        result
    );
}

/// Asserts that a token balance matches the expected value.
pub fn assert_balance(token_client: &token::Client, address: &Address, expected_balance: i128) {
    let balance = token_client.balance(address);
    assert_eq!(
        balance, expected_balance,
        "Expected address {:?} to have balance {}, but got {}",
        address, expected_balance, balance
    );
}

/// Asserts a user's locked principal.
pub fn assert_total_locked(
    contract: &LockWithRewardContractClient,
    user: &Address,
    expected_amount: i128,
) {
    let locked = contract.total_locked_amount(user);
    assert_eq!(
        locked, expected_amount,
        "Expected {:?} to have {} locked, but got {}",
        user, expected_amount, locked
    );
}

/// Asserts a user's claimable bonus.
pub fn assert_claimable(
    contract: &LockWithRewardContractClient,
    user: &Address,
    expected_bonus: i128,
) {
    let bonus = contract.get_claimable(user);
    assert_eq!(
        bonus, expected_bonus,
        "Expected {:?} to have {} claimable, but got {}",
        user, expected_bonus, bonus
    );
}
