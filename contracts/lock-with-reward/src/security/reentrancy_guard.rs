use soroban_sdk::{contracttype, symbol_short, Env, Symbol};

use crate::Error;

const REENTRANCY_KEY: Symbol = symbol_short!("RE_GUARD");

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum GuardState {
    Unlocked = 0,
    Locked = 1,
}

/// Marks a token-moving entry point as in progress while held.
///
/// Token contracts are called while the guard is held; a nested call back
/// into any guarded entry point fails with [`Error::ReentrantCall`].
pub struct ReentrancyGuard<'a> {
    env: &'a Env,
}

impl<'a> ReentrancyGuard<'a> {
    pub fn enter(env: &'a Env) -> Result<Self, Error> {
        if is_locked(env) {
            return Err(Error::ReentrantCall);
        }
        env.storage()
            .instance()
            .set(&REENTRANCY_KEY, &GuardState::Locked);
        Ok(Self { env })
    }
}

impl Drop for ReentrancyGuard<'_> {
    fn drop(&mut self) {
        self.env
            .storage()
            .instance()
            .set(&REENTRANCY_KEY, &GuardState::Unlocked);
    }
}

pub fn is_locked(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&REENTRANCY_KEY)
        .unwrap_or(GuardState::Unlocked)
        == GuardState::Locked
}
