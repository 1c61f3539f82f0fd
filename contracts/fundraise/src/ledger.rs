//! Cross-contract view of the `FixedLedger` contract.
//!
//! Declared as a client trait so the engine wasm does not link the ledger
//! contract itself. Only the calls the engine makes are listed.

use soroban_sdk::{contractclient, Address, Env};

#[allow(dead_code)]
#[contractclient(name = "LedgerClient")]
pub trait LedgerInterface {
    fn balance(env: Env, id: Address) -> i128;

    fn allowance(env: Env, owner: Address, spender: Address) -> i128;

    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, amount: i128);
}
