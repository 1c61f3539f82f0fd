extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events},
    vec, Address, IntoVal, Symbol, TryIntoVal, Val, Vec,
};

use crate::events::{Started, StateChanged, Tuned};
use crate::test_setup::*;
use crate::{Caps, FundraiseState, Investment, TuneOptions};

/// Last event published by the engine.
fn last_engine_event(fx: &Fixture) -> (Vec<Val>, Val) {
    let (contract, topics, data) = fx
        .env
        .events()
        .all()
        .iter()
        .filter(|e| e.0 == fx.engine.address)
        .last()
        .expect("No engine events found");
    assert_eq!(contract, fx.engine.address);
    (topics, data)
}

fn single_topic(fx: &Fixture, name: Symbol) -> Vec<Val> {
    vec![&fx.env, name.into_val(&fx.env)]
}

#[test]
fn test_started_event() {
    let fx = setup();
    let end_at = fx.start();

    let last_event = fx.env.events().all().last().expect("No events found");
    assert_eq!(last_event.0, fx.engine.address);
    assert_eq!(last_event.1, single_topic(&fx, symbol_short!("started")));
    let data: Started = last_event.2.try_into_val(&fx.env).unwrap();
    assert_eq!(
        data,
        Started {
            start_at: START_TIME,
            end_at,
            personal_cap_end_at: START_TIME + PERSONAL_CAP_WINDOW,
        }
    );
}

#[test]
fn test_invested_event() {
    let fx = setup();
    fx.start();
    let investor = fx.investor(ONE_CURRENCY);

    fx.engine.invest(&investor, &LOW_CAP_TX);

    let (topics, data) = last_engine_event(&fx);
    let expected_topics = vec![
        &fx.env,
        symbol_short!("invested").into_val(&fx.env),
        investor.into_val(&fx.env),
    ];
    assert_eq!(topics, expected_topics);
    let data: Investment = data.try_into_val(&fx.env).unwrap();
    assert_eq!(
        data,
        Investment {
            investor,
            amount: LOW_CAP_TX,
            units: units_for_currency(LOW_CAP_TX),
            bonus_pct: 0,
        }
    );
}

#[test]
fn test_lifecycle_events() {
    let fx = setup();
    fx.start();

    fx.engine.suspend(&fx.owner);
    let (topics, data) = last_engine_event(&fx);
    assert_eq!(topics, single_topic(&fx, symbol_short!("suspended")));
    let data: StateChanged = data.try_into_val(&fx.env).unwrap();
    assert_eq!(
        data,
        StateChanged {
            from: FundraiseState::Active,
            to: FundraiseState::Suspended,
            collected: 0,
        }
    );

    fx.engine.resume(&fx.owner);
    let (topics, _) = last_engine_event(&fx);
    assert_eq!(topics, single_topic(&fx, symbol_short!("active")));

    fx.engine.terminate(&fx.owner);
    let (topics, data) = last_engine_event(&fx);
    assert_eq!(topics, single_topic(&fx, Symbol::new(&fx.env, "terminated")));
    let data: StateChanged = data.try_into_val(&fx.env).unwrap();
    assert_eq!(data.to, FundraiseState::Terminated);
}

#[test]
fn test_completed_event_on_hard_cap() {
    let fx = setup_with(|p| {
        p.hard_cap = ONE_CURRENCY;
        p.hard_cap_tx = ONE_CURRENCY;
    });
    fx.start();
    let investor = fx.investor(ONE_CURRENCY);

    fx.engine.invest(&investor, &ONE_CURRENCY);

    let (topics, data) = last_engine_event(&fx);
    assert_eq!(topics, single_topic(&fx, symbol_short!("completed")));
    let data: StateChanged = data.try_into_val(&fx.env).unwrap();
    assert_eq!(
        data,
        StateChanged {
            from: FundraiseState::Active,
            to: FundraiseState::Completed,
            collected: ONE_CURRENCY,
        }
    );
}

#[test]
fn test_not_completed_event_on_touch() {
    let fx = setup_with(|p| p.low_cap = ONE_CURRENCY);
    let end_at = fx.start();

    fx.set_time(end_at + 1);
    fx.engine.touch();

    let (topics, data) = last_engine_event(&fx);
    assert_eq!(topics, single_topic(&fx, symbol_short!("not_done")));
    let data: StateChanged = data.try_into_val(&fx.env).unwrap();
    assert_eq!(data.to, FundraiseState::NotCompleted);
}

#[test]
fn test_tuned_event() {
    let fx = setup();
    let end_at = fx.start();
    fx.engine.suspend(&fx.owner);

    fx.engine.tune(
        &fx.owner,
        &TuneOptions {
            hard_cap: Some(2_000 * ONE_CURRENCY),
            ..Default::default()
        },
    );

    let (topics, data) = last_engine_event(&fx);
    assert_eq!(topics, single_topic(&fx, symbol_short!("tuned")));
    let data: Tuned = data.try_into_val(&fx.env).unwrap();
    assert_eq!(
        data,
        Tuned {
            end_at,
            caps: Caps {
                low_cap: 0,
                hard_cap: 2_000 * ONE_CURRENCY,
                low_cap_tx: LOW_CAP_TX,
                hard_cap_tx: HARD_CAP_TX,
            },
        }
    );
}

#[test]
fn test_whitelist_events() {
    let fx = setup();
    let member = Address::generate(&fx.env);

    fx.engine.whitelist(&fx.owner, &member);
    let (topics, data) = last_engine_event(&fx);
    let expected_topics = vec![
        &fx.env,
        symbol_short!("wl_add").into_val(&fx.env),
        member.into_val(&fx.env),
    ];
    assert_eq!(topics, expected_topics);
    let by: Address = data.try_into_val(&fx.env).unwrap();
    assert_eq!(by, fx.owner);

    fx.engine.blacklist(&fx.owner, &member);
    let (topics, _) = last_engine_event(&fx);
    let expected_topics = vec![
        &fx.env,
        symbol_short!("wl_del").into_val(&fx.env),
        member.into_val(&fx.env),
    ];
    assert_eq!(topics, expected_topics);

    fx.engine.disable_whitelist(&fx.owner);
    let (topics, _) = last_engine_event(&fx);
    assert_eq!(topics, single_topic(&fx, symbol_short!("wl_off")));

    fx.engine.enable_whitelist(&fx.owner);
    let (topics, _) = last_engine_event(&fx);
    assert_eq!(topics, single_topic(&fx, symbol_short!("wl_on")));
}

#[test]
fn test_ownership_event() {
    let fx = setup();
    let next = Address::generate(&fx.env);

    fx.engine.transfer_ownership(&fx.owner, &next);

    let (topics, _) = last_engine_event(&fx);
    assert_eq!(topics, single_topic(&fx, symbol_short!("own_xfer")));
}
