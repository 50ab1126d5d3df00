// Invariant checks for the lock-with-reward accounting.
// Called from tests after state-changing operations.
use crate::constants::BPS_DENOMINATOR;
use crate::{LockPosition, LockWithRewardContractClient};
use soroban_sdk::{token, Address};

/// Invariant I1: Principal Consistency
/// The contract-wide total equals the sum of the given users' positions, and
/// the contract holds at least that much underlying.
pub fn check_principal_consistency(
    client: &LockWithRewardContractClient,
    underlying: &token::Client,
    contract_address: &Address,
    users: &[&Address],
) {
    let summed: i128 = users
        .iter()
        .map(|user| client.total_locked_amount(user))
        .sum();
    let total_locked = client.total_locked();

    assert_eq!(
        summed, total_locked,
        "Invariant I1 violated: sum of positions ({}) != total_locked ({})",
        summed, total_locked
    );

    let held = underlying.balance(contract_address);
    assert!(
        held >= total_locked,
        "Invariant I1 violated: contract holds {} underlying but owes {}",
        held,
        total_locked
    );
}

/// Invariant I2: Liability Consistency
/// The tracked reward liability equals the sum of every open position's
/// claimable bonus.
pub fn check_liability_consistency(client: &LockWithRewardContractClient, users: &[&Address]) {
    let summed: i128 = users.iter().map(|user| client.get_claimable(user)).sum();
    let liability = client.reward_liability();

    assert_eq!(
        summed, liability,
        "Invariant I2 violated: sum of claimable ({}) != reward_liability ({})",
        summed, liability
    );
}

/// Invariant I3: Reward Solvency
/// The reward pool covers every outstanding bonus.
pub fn check_reward_solvency(
    client: &LockWithRewardContractClient,
    reward_token: &token::Client,
    contract_address: &Address,
) {
    let pool = reward_token.balance(contract_address);
    let liability = client.reward_liability();
    assert!(
        pool >= liability,
        "Invariant I3 violated: reward pool ({}) < liability ({})",
        pool,
        liability
    );
}

/// Invariant I4: Position Sanity
/// Amounts are positive and every deposit carries at least the 1.0x
/// duration multiplier.
pub fn check_position_sanity(position: &LockPosition) {
    assert!(
        position.amount > 0,
        "Invariant I4 violated: open position with amount {}",
        position.amount
    );
    assert!(
        position.weighted_amount >= position.amount * BPS_DENOMINATOR,
        "Invariant I4 violated: weighted_amount ({}) below 1.0x of amount ({})",
        position.weighted_amount,
        position.amount
    );
    assert!(
        position.first_locked_at <= position.last_locked_at,
        "Invariant I4 violated: first lock ({}) after last lock ({})",
        position.first_locked_at,
        position.last_locked_at
    );
}
