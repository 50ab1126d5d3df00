//! Role-Based Access Control (RBAC) Module
//!
//! Two roles guard the contract:
//! - `Owner`: the deploying identity; may rotate the admin and sweep surplus rewards.
//! - `Admin`: configuration authority for the lock window and bonus tiers.

use soroban_sdk::{Address, Env};

use crate::events::{emit_admin_updated, AdminUpdated};
use crate::storage::DataKey;
use crate::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Owner,
    Admin,
}

impl Role {
    fn key(self) -> DataKey {
        match self {
            Role::Owner => DataKey::Owner,
            Role::Admin => DataKey::Admin,
        }
    }
}

/// Get the address holding a role, if the contract has been initialized
pub fn get_role_holder(env: &Env, role: Role) -> Option<Address> {
    env.storage().instance().get(&role.key())
}

/// Check if an address holds a specific role
pub fn has_role(env: &Env, address: &Address, role: Role) -> bool {
    match get_role_holder(env, role) {
        Some(holder) => holder == *address,
        None => false,
    }
}

/// Require a specific role. The address must also have signed the invocation.
pub fn require_role(env: &Env, address: &Address, role: Role) -> Result<(), Error> {
    address.require_auth();
    if get_role_holder(env, role).is_none() {
        return Err(Error::NotInitialized);
    }
    if !has_role(env, address, role) {
        return Err(Error::Unauthorized);
    }
    Ok(())
}

pub fn require_owner(env: &Env, address: &Address) -> Result<(), Error> {
    require_role(env, address, Role::Owner)
}

pub fn require_admin(env: &Env, address: &Address) -> Result<(), Error> {
    require_role(env, address, Role::Admin)
}

/// Store the initial role holders. Called once from `init`.
pub fn init_roles(env: &Env, owner: &Address, admin: &Address) {
    env.storage().instance().set(&Role::Owner.key(), owner);
    env.storage().instance().set(&Role::Admin.key(), admin);
}

/// Replace the admin. The caller is expected to have passed `require_owner`.
pub fn grant_admin(env: &Env, new_admin: &Address) {
    let previous = get_role_holder(env, Role::Admin);
    env.storage().instance().set(&Role::Admin.key(), new_admin);

    if let Some(previous_admin) = previous {
        emit_admin_updated(
            env,
            AdminUpdated {
                previous_admin,
                new_admin: new_admin.clone(),
                timestamp: env.ledger().timestamp(),
            },
        );
    }
}
