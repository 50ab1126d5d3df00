//! Contract factory functions for creating test contracts.
//!
//! These functions simplify the creation of contracts and tokens for testing.

use lock_with_reward::{LockWithRewardContract, LockWithRewardContractClient};
use soroban_sdk::{token, Address, Env};

/// Creates a Stellar asset contract administered by `admin`.
///
/// # Returns
/// A tuple containing:
/// - Token address
/// - Token client
/// - Token admin client
///
/// # Example
/// ```rust,no_run
/// # use soroban_sdk::{testutils::Address as _, Address, Env};
/// # use test_utils::factories::create_token_contract;
/// # let env = Env::default();
/// # let admin = Address::generate(&env);
/// let (token_address, token_client, token_admin) = create_token_contract(&env, &admin);
/// ```
pub fn create_token_contract<'a>(
    env: &Env,
    admin: &Address,
) -> (Address, token::Client<'a>, token::StellarAssetClient<'a>) {
    let token_id = env.register_stellar_asset_contract_v2(admin.clone());
    let token = token_id.address();
    let token_client = token::Client::new(env, &token);
    let token_admin_client = token::StellarAssetClient::new(env, &token);
    (token, token_client, token_admin_client)
}

/// Registers an uninitialized lock-with-reward contract.
///
/// # Returns
/// A tuple containing:
/// - Contract client
/// - Contract address
pub fn create_lock_with_reward_contract<'a>(
    env: &Env,
) -> (LockWithRewardContractClient<'a>, Address) {
    let contract_id = env.register(LockWithRewardContract, ());
    let client = LockWithRewardContractClient::new(env, &contract_id);
    (client, contract_id)
}
