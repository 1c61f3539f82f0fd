//! # Storage
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key        | Type              | Description                       |
//! |------------|-------------------|-----------------------------------|
//! | `Config`   | `FundraiseConfig` | Immutable campaign configuration  |
//! | `Caps`     | `Caps`            | Bounds, changed only by `tune`    |
//! | `Campaign` | `Campaign`        | State, schedule, collected total  |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                  | Type   | Description                          |
//! |----------------------|--------|--------------------------------------|
//! | `Invested(investor)` | `i128` | Cumulative amount invested, absent 0 |
//!
//! Whitelist entries are owned by [`crate::whitelist`].
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days remaining.

use soroban_sdk::{contracttype, Address, Env};

use crate::types::{Campaign, Caps, FundraiseConfig};
use crate::Error;

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

pub(crate) const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Immutable configuration (Instance).
    Config,
    /// Current bounds (Instance).
    Caps,
    /// Lifecycle progress (Instance).
    Campaign,
    /// Cumulative amount per investor (Persistent).
    Invested(Address),
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
// Config, caps, campaign
// ─────────────────────────────────────────────────────────

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn save_config(env: &Env, config: &FundraiseConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    bump_instance(env);
}

pub fn load_config(env: &Env) -> Result<FundraiseConfig, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn save_caps(env: &Env, caps: &Caps) {
    env.storage().instance().set(&DataKey::Caps, caps);
    bump_instance(env);
}

pub fn load_caps(env: &Env) -> Result<Caps, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Caps)
        .ok_or(Error::NotInitialized)
}

pub fn save_campaign(env: &Env, campaign: &Campaign) {
    env.storage().instance().set(&DataKey::Campaign, campaign);
    bump_instance(env);
}

/// Load the campaign. Read-only callers may treat `Err` as "not created".
pub fn load_campaign(env: &Env) -> Result<Campaign, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Campaign)
        .ok_or(Error::NotInitialized)
}

// ─────────────────────────────────────────────────────────
// Per-investor totals
// ─────────────────────────────────────────────────────────

pub fn get_invested(env: &Env, investor: &Address) -> i128 {
    let key = DataKey::Invested(investor.clone());
    match env.storage().persistent().get(&key) {
        Some(total) => {
            bump_persistent(env, &key);
            total
        }
        None => 0,
    }
}

pub fn set_invested(env: &Env, investor: &Address, total: i128) {
    let key = DataKey::Invested(investor.clone());
    env.storage().persistent().set(&key, &total);
    bump_persistent(env, &key);
}
