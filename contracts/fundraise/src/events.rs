use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

use crate::types::{Caps, FundraiseState, Investment};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Started {
    pub start_at: u64,
    pub end_at: u64,
    pub personal_cap_end_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StateChanged {
    pub from: FundraiseState,
    pub to: FundraiseState,
    pub collected: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Tuned {
    pub end_at: u64,
    pub caps: Caps,
}

pub fn emit_started(env: &Env, start_at: u64, end_at: u64, personal_cap_end_at: u64) {
    let data = Started {
        start_at,
        end_at,
        personal_cap_end_at,
    };
    env.events().publish((symbol_short!("started"),), data);
}

/// Publish a lifecycle transition under the topic of its target state.
pub fn emit_state_changed(env: &Env, from: FundraiseState, to: FundraiseState, collected: i128) {
    let data = StateChanged {
        from,
        to,
        collected,
    };
    env.events().publish((state_topic(env, to),), data);
}

pub fn emit_tuned(env: &Env, end_at: u64, caps: Caps) {
    env.events()
        .publish((symbol_short!("tuned"),), Tuned { end_at, caps });
}

pub fn emit_invested(env: &Env, investment: &Investment) {
    let topics = (symbol_short!("invested"), investment.investor.clone());
    env.events().publish(topics, investment.clone());
}

/// Topic: `(wl_add | wl_del, member)`, data: the owner that made the change.
pub fn emit_membership(env: &Env, added: bool, member: Address, by: Address) {
    let event = if added {
        symbol_short!("wl_add")
    } else {
        symbol_short!("wl_del")
    };
    env.events().publish((event, member), by);
}

/// Topic: `(wl_on | wl_off,)`, data: the owner that made the change.
pub fn emit_whitelist_toggled(env: &Env, enabled: bool, by: Address) {
    let event = if enabled {
        symbol_short!("wl_on")
    } else {
        symbol_short!("wl_off")
    };
    env.events().publish((event,), by);
}

/// Topic named after the state. `terminated` exceeds the 9 characters of
/// `symbol_short!`, so it is built at runtime.
fn state_topic(env: &Env, state: FundraiseState) -> Symbol {
    match state {
        FundraiseState::Inactive => symbol_short!("inactive"),
        FundraiseState::Active => symbol_short!("active"),
        FundraiseState::Suspended => symbol_short!("suspended"),
        FundraiseState::Terminated => Symbol::new(env, "terminated"),
        FundraiseState::NotCompleted => symbol_short!("not_done"),
        FundraiseState::Completed => symbol_short!("completed"),
    }
}
