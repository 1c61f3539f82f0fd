#![allow(dead_code)]

extern crate std;

use fixed_ledger::{FixedLedger, FixedLedgerClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token, Address, Env, String,
};

use crate::{ExchangeRatio, FundraiseEngine, FundraiseEngineClient, FundraiseParams};

/// Ledger units carry 6 decimals.
pub const ONE_UNIT: i128 = 1_000_000;
/// The currency carries 7 decimals.
pub const ONE_CURRENCY: i128 = 10_000_000;

pub const TOTAL_SUPPLY: i128 = 1_000_000_000 * ONE_UNIT;
pub const RESERVE: i128 = 200_000_000 * ONE_UNIT;
/// 125 000 whole units per whole currency unit.
pub const UNITS_PER_CURRENCY: i128 = 125_000;

pub const HARD_CAP: i128 = 1_600 * ONE_CURRENCY;
pub const LOW_CAP_TX: i128 = ONE_CURRENCY / 10;
pub const HARD_CAP_TX: i128 = 1_600 * ONE_CURRENCY;
pub const PERSONAL_CAP: i128 = 16 * ONE_CURRENCY / 10;
pub const PERSONAL_CAP_WINDOW: u64 = 48 * 60 * 60;
pub const WEEK: u64 = 7 * 24 * 60 * 60;
pub const START_TIME: u64 = 1_700_000_000;

pub struct Fixture {
    pub env: Env,
    pub engine: FundraiseEngineClient<'static>,
    pub ledger: FixedLedgerClient<'static>,
    pub currency: token::Client<'static>,
    pub currency_admin: token::StellarAssetClient<'static>,
    pub owner: Address,
    pub beneficiary: Address,
    pub unit_source: Address,
}

impl Fixture {
    pub fn now(&self) -> u64 {
        self.env.ledger().timestamp()
    }

    pub fn set_time(&self, timestamp: u64) {
        self.env.ledger().set_timestamp(timestamp);
    }

    /// Give the unit source its reserve and approve it to the engine.
    pub fn fund_unit_source(&self) {
        self.ledger
            .transfer(&self.owner, &self.unit_source, &RESERVE);
        self.ledger
            .approve(&self.unit_source, &self.engine.address, &RESERVE);
    }

    /// Fund the unit source and start a one-week campaign.
    pub fn start(&self) -> u64 {
        self.fund_unit_source();
        let end_at = self.now() + WEEK;
        self.engine.start(&self.owner, &end_at);
        end_at
    }

    /// A whitelisted investor holding `currency` currency base units.
    pub fn investor(&self, currency: i128) -> Address {
        let investor = self.stranger(currency);
        self.engine.whitelist(&self.owner, &investor);
        investor
    }

    /// An address holding `currency` currency base units, not whitelisted.
    pub fn stranger(&self, currency: i128) -> Address {
        let address = Address::generate(&self.env);
        if currency > 0 {
            self.currency_admin.mint(&address, &currency);
        }
        address
    }

    /// Addresses that may hold ledger units in a fixture, plus `extra`.
    pub fn holders(&self, extra: &[Address]) -> std::vec::Vec<Address> {
        let mut holders = std::vec![
            self.owner.clone(),
            self.unit_source.clone(),
            self.beneficiary.clone(),
        ];
        holders.extend_from_slice(extra);
        holders
    }
}

/// Units produced by `currency` base units at the default ratio.
pub fn units_for_currency(currency: i128) -> i128 {
    currency * UNITS_PER_CURRENCY * ONE_UNIT / ONE_CURRENCY
}

/// Currency base units that buy `units` whole ledger units at the default ratio.
pub fn currency_for_units(units: i128) -> i128 {
    units * ONE_CURRENCY / UNITS_PER_CURRENCY
}

pub fn setup() -> Fixture {
    setup_with(|_| {})
}

/// Build a fixture, letting `configure` adjust the default parameters.
pub fn setup_with(configure: impl FnOnce(&mut FundraiseParams)) -> Fixture {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(START_TIME);

    let owner = Address::generate(&env);
    let beneficiary = Address::generate(&env);
    let unit_source = Address::generate(&env);

    let ledger_id = env.register(FixedLedger, ());
    let ledger = FixedLedgerClient::new(&env, &ledger_id);
    ledger.init(
        &owner,
        &TOTAL_SUPPLY,
        &String::from_str(&env, "Ledger Unit"),
        &String::from_str(&env, "LUNIT"),
        &6,
    );

    let currency_contract = env.register_stellar_asset_contract_v2(Address::generate(&env));
    let currency = token::Client::new(&env, &currency_contract.address());
    let currency_admin = token::StellarAssetClient::new(&env, &currency_contract.address());

    let mut params = FundraiseParams {
        ledger: ledger_id,
        currency: currency_contract.address(),
        beneficiary: beneficiary.clone(),
        unit_source: unit_source.clone(),
        low_cap: 0,
        hard_cap: HARD_CAP,
        low_cap_tx: LOW_CAP_TX,
        hard_cap_tx: HARD_CAP_TX,
        exchange_ratio: ExchangeRatio {
            units: UNITS_PER_CURRENCY * ONE_UNIT,
            currency: ONE_CURRENCY,
        },
        personal_cap: PERSONAL_CAP,
        personal_cap_window: PERSONAL_CAP_WINDOW,
        distributable_reserve: RESERVE,
    };
    configure(&mut params);

    let engine_id = env.register(FundraiseEngine, ());
    let engine = FundraiseEngineClient::new(&env, &engine_id);
    engine.init(&owner, &params);

    Fixture {
        env,
        engine,
        ledger,
        currency,
        currency_admin,
        owner,
        beneficiary,
        unit_source,
    }
}
