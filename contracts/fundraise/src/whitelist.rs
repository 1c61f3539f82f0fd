//! # Whitelist
//!
//! Togglable allow-list consulted by `invest`.
//!
//! ## Storage layout
//!
//! - `WhitelistKey::Enabled` → `bool` (instance, `true` after `init`).
//! - `WhitelistKey::Member(addr)` → `bool` (persistent, present only for members).
//!
//! When the list is disabled every address is allowed, members or not.
//! Adding an existing member or removing an absent one succeeds and still
//! emits its event.

use soroban_sdk::{contracttype, Address, Env};

use crate::storage::{PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD};
use crate::{events, Error};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum WhitelistKey {
    Enabled,
    Member(Address),
}

/// Turn whitelisting on. Called once from `init`.
pub fn init(env: &Env) {
    env.storage().instance().set(&WhitelistKey::Enabled, &true);
}

pub fn is_enabled(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&WhitelistKey::Enabled)
        .unwrap_or(true)
}

pub fn is_member(env: &Env, address: &Address) -> bool {
    let key = WhitelistKey::Member(address.clone());
    let member = env.storage().persistent().has(&key);
    if member {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
    }
    member
}

/// `true` if the list is disabled or `address` is a member.
pub fn is_allowed(env: &Env, address: &Address) -> bool {
    !is_enabled(env) || is_member(env, address)
}

pub fn set_enabled(env: &Env, caller: &Address, enabled: bool) -> Result<(), Error> {
    access_control::require_owner(env, caller)?;
    env.storage().instance().set(&WhitelistKey::Enabled, &enabled);
    events::emit_whitelist_toggled(env, enabled, caller.clone());
    Ok(())
}

pub fn add(env: &Env, caller: &Address, address: &Address) -> Result<(), Error> {
    access_control::require_owner(env, caller)?;
    let key = WhitelistKey::Member(address.clone());
    env.storage().persistent().set(&key, &true);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
    events::emit_membership(env, true, address.clone(), caller.clone());
    Ok(())
}

pub fn remove(env: &Env, caller: &Address, address: &Address) -> Result<(), Error> {
    access_control::require_owner(env, caller)?;
    env.storage()
        .persistent()
        .remove(&WhitelistKey::Member(address.clone()));
    events::emit_membership(env, false, address.clone(), caller.clone());
    Ok(())
}
