//! # Fixed Ledger Contract
//!
//! A fixed-supply unit ledger with allowances and an owner-controlled lock
//! switch. The whole supply is credited to the first owner at `init`; no
//! entry point mints or burns, so the sum of all balances always equals
//! `total_supply`.
//!
//! | Phase      | Entry Point(s)                                  |
//! |------------|-------------------------------------------------|
//! | Bootstrap  | [`FixedLedger::init`]                           |
//! | Movement   | `transfer`, `approve`, `transfer_from`          |
//! | Owner      | `lock`, `unlock`, `transfer_ownership`          |
//! | Queries    | `balance`, `allowance`, `locked`, `owner`, metadata |
//!
//! Ownership is delegated to the `access_control` crate and storage to
//! [`storage`]. A locked ledger refuses `transfer`, `transfer_from` and
//! `approve`; reads are always available.

#![no_std]

use access_control::AccessError;
use soroban_sdk::{contract, contracterror, contractimpl, log, Address, Env, String};

pub mod events;
mod storage;
mod types;

#[cfg(test)]
mod invariants;

pub use types::LedgerMetadata;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotOwner = 3,
    InvalidOwner = 4,
    Locked = 5,
    InsufficientBalance = 6,
    InsufficientAllowance = 7,
    NonZeroApprovalReset = 8,
    InvalidAmount = 9,
    InvalidSupply = 10,
    Overflow = 11,
}

impl From<AccessError> for Error {
    fn from(err: AccessError) -> Self {
        match err {
            AccessError::AlreadyInitialized => Error::AlreadyInitialized,
            AccessError::NotInitialized => Error::NotInitialized,
            AccessError::NotOwner => Error::NotOwner,
            AccessError::InvalidOwner => Error::InvalidOwner,
        }
    }
}

#[contract]
pub struct FixedLedger;

#[contractimpl]
impl FixedLedger {
    // ─────────────────────────────────────────────────────────
    // Initialisation
    // ─────────────────────────────────────────────────────────

    /// Create the ledger and credit the entire `total_supply` to `owner`.
    ///
    /// Must be called exactly once; `owner` must sign and becomes the
    /// access-control owner.
    pub fn init(
        env: Env,
        owner: Address,
        total_supply: i128,
        name: String,
        symbol: String,
        decimals: u32,
    ) -> Result<(), Error> {
        if storage::has_metadata(&env) {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();
        if total_supply <= 0 {
            return Err(Error::InvalidSupply);
        }
        access_control::init_owner(&env, &owner)?;

        storage::save_metadata(
            &env,
            &LedgerMetadata {
                name,
                symbol,
                decimals,
                total_supply,
            },
        );
        storage::set_balance(&env, &owner, total_supply);

        events::emit_supply_issued(&env, owner, total_supply);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Unit movement
    // ─────────────────────────────────────────────────────────

    /// Move `amount` units from `from` to `to`. A zero amount succeeds and
    /// still emits a `transfer` event.
    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), Error> {
        from.require_auth();
        Self::require_unlocked(&env)?;
        Self::require_non_negative(amount)?;

        Self::move_units(&env, &from, &to, amount)?;
        events::emit_transfer(&env, from, to, amount);
        Ok(())
    }

    /// Set the allowance of `spender` over `owner`'s units.
    ///
    /// An outstanding non-zero allowance can only be replaced by zero (or by
    /// the same value); the spender must be reset before a new non-zero
    /// amount is granted.
    pub fn approve(env: Env, owner: Address, spender: Address, amount: i128) -> Result<(), Error> {
        owner.require_auth();
        Self::require_unlocked(&env)?;
        Self::require_non_negative(amount)?;

        let current = storage::get_allowance(&env, &owner, &spender);
        if current != 0 && amount != 0 && amount != current {
            return Err(Error::NonZeroApprovalReset);
        }

        storage::set_allowance(&env, &owner, &spender, amount);
        events::emit_approve(&env, owner, spender, amount);
        Ok(())
    }

    /// Move `amount` of `from`'s units to `to` on behalf of `spender`,
    /// consuming the same amount of allowance.
    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), Error> {
        spender.require_auth();
        Self::require_unlocked(&env)?;
        Self::require_non_negative(amount)?;

        let allowance = storage::get_allowance(&env, &from, &spender);
        if allowance < amount {
            return Err(Error::InsufficientAllowance);
        }

        Self::move_units(&env, &from, &to, amount)?;
        storage::set_allowance(&env, &from, &spender, allowance - amount);

        events::emit_transfer(&env, from, to, amount);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Owner controls
    // ─────────────────────────────────────────────────────────

    /// Freeze all unit movement and approvals. Re-locking succeeds.
    pub fn lock(env: Env, caller: Address) -> Result<(), Error> {
        access_control::require_owner(&env, &caller)?;
        storage::set_locked(&env, true);
        log!(&env, "ledger locked", caller);
        events::emit_lock(&env, caller);
        Ok(())
    }

    /// Lift the lock. Unlocking an unlocked ledger succeeds.
    pub fn unlock(env: Env, caller: Address) -> Result<(), Error> {
        access_control::require_owner(&env, &caller)?;
        storage::set_locked(&env, false);
        log!(&env, "ledger unlocked", caller);
        events::emit_unlock(&env, caller);
        Ok(())
    }

    pub fn transfer_ownership(env: Env, caller: Address, new_owner: Address) -> Result<(), Error> {
        Ok(access_control::transfer_ownership(&env, &caller, &new_owner)?)
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    pub fn balance(env: Env, id: Address) -> i128 {
        storage::get_balance(&env, &id)
    }

    pub fn allowance(env: Env, owner: Address, spender: Address) -> i128 {
        storage::get_allowance(&env, &owner, &spender)
    }

    pub fn locked(env: Env) -> bool {
        storage::is_locked(&env)
    }

    pub fn owner(env: Env) -> Option<Address> {
        access_control::owner(&env)
    }

    /// Fixed total supply, `0` before `init`.
    pub fn total_supply(env: Env) -> i128 {
        storage::load_metadata(&env)
            .map(|m| m.total_supply)
            .unwrap_or(0)
    }

    pub fn metadata(env: Env) -> Result<LedgerMetadata, Error> {
        storage::load_metadata(&env).ok_or(Error::NotInitialized)
    }

    pub fn name(env: Env) -> Result<String, Error> {
        Ok(Self::metadata(env)?.name)
    }

    pub fn symbol(env: Env) -> Result<String, Error> {
        Ok(Self::metadata(env)?.symbol)
    }

    pub fn decimals(env: Env) -> Result<u32, Error> {
        Ok(Self::metadata(env)?.decimals)
    }

    // ─────────────────────────────────────────────────────────
    // Internal Helpers
    // ─────────────────────────────────────────────────────────

    fn require_unlocked(env: &Env) -> Result<(), Error> {
        if storage::is_locked(env) {
            return Err(Error::Locked);
        }
        Ok(())
    }

    fn require_non_negative(amount: i128) -> Result<(), Error> {
        if amount < 0 {
            return Err(Error::InvalidAmount);
        }
        Ok(())
    }

    /// Debit `from` and credit `to`. Reads `to` after writing `from` so a
    /// self-transfer nets to zero.
    fn move_units(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), Error> {
        let from_balance = storage::get_balance(env, from);
        if from_balance < amount {
            return Err(Error::InsufficientBalance);
        }
        storage::set_balance(env, from, from_balance - amount);

        let to_balance = storage::get_balance(env, to)
            .checked_add(amount)
            .ok_or(Error::Overflow)?;
        storage::set_balance(env, to, to_balance);
        Ok(())
    }
}
