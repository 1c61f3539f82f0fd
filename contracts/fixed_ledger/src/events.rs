use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Transferred {
    pub from: Address,
    pub to: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Approved {
    pub owner: Address,
    pub spender: Address,
    pub amount: i128,
}

/// Emitted once at `init` when the whole supply is credited to the owner.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SupplyIssued {
    pub owner: Address,
    pub total_supply: i128,
}

pub fn emit_supply_issued(env: &Env, owner: Address, total_supply: i128) {
    let topics = (symbol_short!("issued"), owner.clone());
    env.events().publish(topics, SupplyIssued { owner, total_supply });
}

pub fn emit_transfer(env: &Env, from: Address, to: Address, amount: i128) {
    let topics = (symbol_short!("transfer"), from.clone(), to.clone());
    let data = Transferred { from, to, amount };
    env.events().publish(topics, data);
}

pub fn emit_approve(env: &Env, owner: Address, spender: Address, amount: i128) {
    let topics = (symbol_short!("approve"), owner.clone(), spender.clone());
    let data = Approved {
        owner,
        spender,
        amount,
    };
    env.events().publish(topics, data);
}

pub fn emit_lock(env: &Env, caller: Address) {
    env.events().publish((symbol_short!("lock"),), caller);
}

pub fn emit_unlock(env: &Env, caller: Address) {
    env.events().publish((symbol_short!("unlock"),), caller);
}
