//! # Storage
//!
//! Typed helpers over the two Soroban storage tiers used by the ledger.
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key        | Type             | Description                          |
//! |------------|------------------|--------------------------------------|
//! | `Metadata` | `LedgerMetadata` | Name, symbol, decimals, total supply |
//! | `Locked`   | `bool`           | Lock switch, absent means unlocked   |
//! | `Owner`    | `Address`        | Owned by `access_control`            |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                         | Type   | Description                  |
//! |-----------------------------|--------|------------------------------|
//! | `Balance(holder)`           | `i128` | Units held, absent means 0   |
//! | `Allowance(owner, spender)` | `i128` | Spendable units, absent = 0  |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days remaining.

use soroban_sdk::{contracttype, Address, Env};

use crate::types::LedgerMetadata;

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Ledger metadata (Instance).
    Metadata,
    /// Lock switch (Instance).
    Locked,
    /// Units held by an address (Persistent).
    Balance(Address),
    /// Units `spender` may move out of `owner` (Persistent).
    Allowance(Address, Address),
}

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

// ─────────────────────────────────────────────────────────
// Metadata and lock switch
// ─────────────────────────────────────────────────────────

pub fn has_metadata(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Metadata)
}

pub fn save_metadata(env: &Env, metadata: &LedgerMetadata) {
    env.storage().instance().set(&DataKey::Metadata, metadata);
    bump_instance(env);
}

/// Load the metadata, `None` before `init`.
pub fn load_metadata(env: &Env) -> Option<LedgerMetadata> {
    env.storage().instance().get(&DataKey::Metadata)
}

pub fn is_locked(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Locked)
        .unwrap_or(false)
}

pub fn set_locked(env: &Env, locked: bool) {
    env.storage().instance().set(&DataKey::Locked, &locked);
    bump_instance(env);
}

// ─────────────────────────────────────────────────────────
// Balances
// ─────────────────────────────────────────────────────────

pub fn get_balance(env: &Env, holder: &Address) -> i128 {
    let key = DataKey::Balance(holder.clone());
    match env.storage().persistent().get(&key) {
        Some(balance) => {
            bump_persistent(env, &key);
            balance
        }
        None => 0,
    }
}

pub fn set_balance(env: &Env, holder: &Address, balance: i128) {
    let key = DataKey::Balance(holder.clone());
    env.storage().persistent().set(&key, &balance);
    bump_persistent(env, &key);
}

// ─────────────────────────────────────────────────────────
// Allowances
// ─────────────────────────────────────────────────────────

pub fn get_allowance(env: &Env, owner: &Address, spender: &Address) -> i128 {
    let key = DataKey::Allowance(owner.clone(), spender.clone());
    match env.storage().persistent().get(&key) {
        Some(allowance) => {
            bump_persistent(env, &key);
            allowance
        }
        None => 0,
    }
}

/// Store an allowance. A zero allowance removes the entry.
pub fn set_allowance(env: &Env, owner: &Address, spender: &Address, amount: i128) {
    let key = DataKey::Allowance(owner.clone(), spender.clone());
    if amount == 0 {
        env.storage().persistent().remove(&key);
        return;
    }
    env.storage().persistent().set(&key, &amount);
    bump_persistent(env, &key);
}
