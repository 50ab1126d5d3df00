//! Deployment fixture and the TestSetup struct.
//!
//! Mirrors a fresh deployment: two tokens, the lock contract initialized
//! with a default window that opens one day after the fixture's start time,
//! a funded reward pool and a tester holding underlying tokens.

use lock_with_reward::LockWithRewardContractClient;
use soroban_sdk::{testutils::Address as _, token, Address, Env};

use super::constants::{
    unix_time_in_second, LOCK_WINDOW_SECS, NINE_HUNDRED_THOUSAND, ONE_DAY, ONE_MILLION,
};
use super::factories::{create_lock_with_reward_contract, create_token_contract};
use super::time::{allowance_expiration, set_ledger_time};

/// Delay between deployment and the default window opening.
pub const DEFAULT_START_DELAY: u64 = ONE_DAY;

/// Length of the default window.
pub const DEFAULT_WINDOW_SECS: u64 = 30 * ONE_DAY;

/// Everything a lock-with-reward test needs.
///
/// - `contract_owner` deploys and owns the contract and both tokens.
/// - `contract_admin` configures the window and tiers.
/// - `tester` is an ordinary user holding [`ONE_MILLION`] underlying.
pub struct TestSetup<'a> {
    pub env: Env,
    pub contract: LockWithRewardContractClient<'a>,
    pub contract_address: Address,
    pub underlying: token::Client<'a>,
    pub underlying_admin: token::StellarAssetClient<'a>,
    pub reward_token: token::Client<'a>,
    pub reward_admin: token::StellarAssetClient<'a>,
    pub contract_owner: Address,
    pub contract_admin: Address,
    pub tester: Address,
}

/// Deploys the contract with freshly minted underlying and reward tokens.
///
/// The ledger starts at [`unix_time_in_second`]; the reward pool holds
/// [`NINE_HUNDRED_THOUSAND`] reward tokens.
pub fn deploy_lock_with_reward_contracts_with_default_tokens<'a>() -> TestSetup<'a> {
    let env = Env::default();
    env.mock_all_auths();
    set_ledger_time(&env, unix_time_in_second());

    let contract_owner = Address::generate(&env);
    let contract_admin = Address::generate(&env);
    let tester = Address::generate(&env);

    let (underlying_address, underlying, underlying_admin) =
        create_token_contract(&env, &contract_owner);
    let (reward_address, reward_token, reward_admin) =
        create_token_contract(&env, &contract_owner);
    let (contract, contract_address) = create_lock_with_reward_contract(&env);

    let start_time = unix_time_in_second() + DEFAULT_START_DELAY;
    contract.init(
        &contract_owner,
        &contract_admin,
        &underlying_address,
        &reward_address,
        &start_time,
        &(start_time + DEFAULT_WINDOW_SECS),
    );

    underlying_admin.mint(&tester, &ONE_MILLION);
    reward_admin.mint(&contract_owner, &ONE_MILLION);
    contract.fund_rewards(&contract_owner, &NINE_HUNDRED_THOUSAND);

    TestSetup {
        env,
        contract,
        contract_address,
        underlying,
        underlying_admin,
        reward_token,
        reward_admin,
        contract_owner,
        contract_admin,
        tester,
    }
}

impl<'a> TestSetup<'a> {
    /// Same as [`deploy_lock_with_reward_contracts_with_default_tokens`].
    pub fn new() -> Self {
        deploy_lock_with_reward_contracts_with_default_tokens()
    }

    /// Admin opens the window at the fixture's start time for
    /// [`LOCK_WINDOW_SECS`].
    pub fn open_lock_window(&self) {
        let now = unix_time_in_second();
        self.contract
            .set_time(&self.contract_admin, &now, &(now + LOCK_WINDOW_SECS));
    }

    /// Grants the contract an allowance over `user`'s underlying.
    pub fn approve(&self, user: &Address, amount: i128) {
        let expiration = allowance_expiration(&self.env);
        self.underlying
            .approve(user, &self.contract_address, &amount, &expiration);
    }

    /// Approves then locks `amount` as `user`.
    pub fn approve_and_lock(&self, user: &Address, amount: i128) {
        self.approve(user, amount);
        self.contract.lock(user, &amount);
    }

    /// Creates a user holding `amount` underlying.
    pub fn funded_user(&self, amount: i128) -> Address {
        let user = Address::generate(&self.env);
        self.underlying_admin.mint(&user, &amount);
        user
    }
}

impl Default for TestSetup<'_> {
    fn default() -> Self {
        Self::new()
    }
}
