//! # Access Control
//!
//! Single-owner capability check shared by the `fixed_ledger` and
//! `fundraise` contracts.
//!
//! ## Storage layout
//!
//! - `OwnerKey::Owner` → `Address` (instance tier of the hosting contract).
//!
//! Exactly one owner exists once [`init_owner`] has run, and only the current
//! owner can hand the role over with [`transfer_ownership`].
//!
//! ## Null identity
//!
//! Soroban has no zero address. The hosting contract's own address plays that
//! role: ownership handed to it could never be exercised again, so it is
//! rejected with [`AccessError::InvalidOwner`].
//!
//! Errors are returned as [`AccessError`]; each contract converts them into
//! its own `#[contracterror]` enum through `From`.

#![no_std]

use soroban_sdk::{contracttype, symbol_short, Address, Env};


/// Failures raised by the ownership guard.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum AccessError {
    /// An owner is already installed.
    AlreadyInitialized,
    /// No owner has been installed yet.
    NotInitialized,
    /// The caller is not the current owner.
    NotOwner,
    /// The proposed owner is the null identity.
    InvalidOwner,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum OwnerKey {
    /// The one and only owner address.
    Owner,
}

/// Payload of the `own_xfer` event.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipTransferred {
    pub previous_owner: Address,
    pub new_owner: Address,
}

/// Install the first owner. Fails if one is already set.
pub fn init_owner(env: &Env, owner: &Address) -> Result<(), AccessError> {
    if env.storage().instance().has(&OwnerKey::Owner) {
        return Err(AccessError::AlreadyInitialized);
    }
    if is_null_identity(env, owner) {
        return Err(AccessError::InvalidOwner);
    }
    env.storage().instance().set(&OwnerKey::Owner, owner);
    Ok(())
}

/// Read the current owner, `None` before initialisation.
pub fn owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&OwnerKey::Owner)
}

/// Require `caller` to sign the invocation and to be the current owner.
///
/// This is the only place owner-gated entry points call `require_auth`, so
/// callers must not authorise `caller` a second time.
pub fn require_owner(env: &Env, caller: &Address) -> Result<(), AccessError> {
    caller.require_auth();
    let current = owner(env).ok_or(AccessError::NotInitialized)?;
    if &current != caller {
        return Err(AccessError::NotOwner);
    }
    Ok(())
}

/// Hand ownership from `caller` to `new_owner`.
///
/// Emits `own_xfer` carrying the previous and the new owner.
pub fn transfer_ownership(
    env: &Env,
    caller: &Address,
    new_owner: &Address,
) -> Result<(), AccessError> {
    require_owner(env, caller)?;
    if is_null_identity(env, new_owner) {
        return Err(AccessError::InvalidOwner);
    }
    env.storage().instance().set(&OwnerKey::Owner, new_owner);
    env.events().publish(
        (symbol_short!("own_xfer"),),
        OwnershipTransferred {
            previous_owner: caller.clone(),
            new_owner: new_owner.clone(),
        },
    );
    Ok(())
}

fn is_null_identity(env: &Env, address: &Address) -> bool {
    *address == env.current_contract_address()
}
