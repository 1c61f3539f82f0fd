//! # Fundraise Engine Contract
//!
//! Sells units of a `FixedLedger` for an external currency token at a fixed
//! exchange ratio, within a time window and between aggregate and
//! per-transaction caps.
//!
//! | Phase      | Entry Point(s)                                         |
//! |------------|--------------------------------------------------------|
//! | Bootstrap  | [`FundraiseEngine::init`]                              |
//! | Ownership  | `transfer_ownership`, `owner`                          |
//! | Whitelist  | `enable_whitelist`, `disable_whitelist`, `whitelist`, `blacklist`, `whitelisted` |
//! | Lifecycle  | `start`, `suspend`, `resume`, `terminate`, `tune`, `touch` |
//! | Investing  | [`FundraiseEngine::invest`], `buy_tokens`              |
//! | Queries    | `state`, `collected`, `caps`, `config`, `campaign`, `start_at`, `end_at`, `personal_cap_end_at`, `invested` |
//!
//! ## Investment flow
//!
//! An accepted investment moves units from the unit source to the investor
//! through the ledger's `transfer_from` (the engine is the approved spender),
//! then forwards the currency from the investor straight to the beneficiary.
//! Any failure returns an error, which aborts the invocation and rolls back
//! both movements together.
//!
//! Ownership is delegated to `access_control`, the allow-list to
//! [`whitelist`], conversion to [`exchange`] and storage to [`storage`].

#![no_std]

use access_control::AccessError;
use soroban_sdk::{contract, contracterror, contractimpl, log, token, Address, Env};

pub mod events;
mod exchange;
mod ledger;
mod storage;
mod types;
pub mod whitelist;

#[cfg(test)]
mod test_setup;
#[cfg(test)]
mod test_events;

use ledger::LedgerClient;
pub use types::{
    Campaign, Caps, ExchangeRatio, FundraiseConfig, FundraiseParams, FundraiseState, Investment,
    TuneOptions,
};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotOwner = 3,
    InvalidOwner = 4,
    InvalidState = 5,
    NotActive = 6,
    NotWhitelisted = 7,
    InvalidAmount = 8,
    BelowMinTx = 9,
    AboveMaxTx = 10,
    PersonalCapExceeded = 11,
    HardCapExceeded = 12,
    InvalidEndAt = 13,
    InvalidCaps = 14,
    InvalidRatio = 15,
    InsufficientReserve = 16,
    LedgerTransferFailed = 17,
    ForwardFailed = 18,
    FundraiseEnded = 19,
    Overflow = 20,
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
pub struct FundraiseEngine;

#[contractimpl]
impl FundraiseEngine {
    // ─────────────────────────────────────────────────────────
    // Initialisation
    // ─────────────────────────────────────────────────────────

    /// Create the campaign in the `Inactive` state with whitelisting enabled.
    ///
    /// Must be called exactly once; `owner` must sign and becomes the
    /// access-control owner.
    pub fn init(env: Env, owner: Address, params: FundraiseParams) -> Result<(), Error> {
        if storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();

        let ratio = &params.exchange_ratio;
        if ratio.units <= 0 || ratio.currency <= 0 {
            return Err(Error::InvalidRatio);
        }
        let caps = Caps {
            low_cap: params.low_cap,
            hard_cap: params.hard_cap,
            low_cap_tx: params.low_cap_tx,
            hard_cap_tx: params.hard_cap_tx,
        };
        if !caps.is_consistent() {
            return Err(Error::InvalidCaps);
        }
        if params.personal_cap <= 0 || params.distributable_reserve < 0 {
            return Err(Error::InvalidAmount);
        }

        access_control::init_owner(&env, &owner)?;
        storage::save_config(
            &env,
            &FundraiseConfig {
                ledger: params.ledger,
                currency: params.currency,
                beneficiary: params.beneficiary,
                unit_source: params.unit_source,
                exchange_ratio: params.exchange_ratio,
                personal_cap: params.personal_cap,
                personal_cap_window: params.personal_cap_window,
                distributable_reserve: params.distributable_reserve,
            },
        );
        storage::save_caps(&env, &caps);
        storage::save_campaign(
            &env,
            &Campaign {
                state: FundraiseState::Inactive,
                start_at: 0,
                end_at: 0,
                personal_cap_end_at: 0,
                collected: 0,
            },
        );
        whitelist::init(&env);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Ownership
    // ─────────────────────────────────────────────────────────

    pub fn transfer_ownership(env: Env, caller: Address, new_owner: Address) -> Result<(), Error> {
        Ok(access_control::transfer_ownership(&env, &caller, &new_owner)?)
    }

    pub fn owner(env: Env) -> Option<Address> {
        access_control::owner(&env)
    }

    // ─────────────────────────────────────────────────────────
    // Whitelist
    // ─────────────────────────────────────────────────────────

    pub fn enable_whitelist(env: Env, caller: Address) -> Result<(), Error> {
        whitelist::set_enabled(&env, &caller, true)
    }

    /// Disable whitelisting; every address may invest until re-enabled.
    pub fn disable_whitelist(env: Env, caller: Address) -> Result<(), Error> {
        whitelist::set_enabled(&env, &caller, false)
    }

    /// Add `address` to the allow-list.
    pub fn whitelist(env: Env, caller: Address, address: Address) -> Result<(), Error> {
        whitelist::add(&env, &caller, &address)
    }

    /// Remove `address` from the allow-list.
    pub fn blacklist(env: Env, caller: Address, address: Address) -> Result<(), Error> {
        whitelist::remove(&env, &caller, &address)
    }

    /// `true` if `address` may invest under the current whitelist setting.
    pub fn whitelisted(env: Env, address: Address) -> bool {
        whitelist::is_allowed(&env, &address)
    }

    pub fn whitelist_enabled(env: Env) -> bool {
        whitelist::is_enabled(&env)
    }

    // ─────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────

    /// Open the campaign until `end_at`.
    ///
    /// The unit source must hold, and have approved to this contract, at
    /// least the distributable reserve. The personal cap window opens now.
    pub fn start(env: Env, caller: Address, end_at: u64) -> Result<(), Error> {
        access_control::require_owner(&env, &caller)?;
        let config = storage::load_config(&env)?;
        let mut campaign = storage::load_campaign(&env)?;

        if campaign.state != FundraiseState::Inactive {
            return Err(Error::InvalidState);
        }
        let now = env.ledger().timestamp();
        if end_at <= now {
            return Err(Error::InvalidEndAt);
        }

        let ledger = LedgerClient::new(&env, &config.ledger);
        let engine = env.current_contract_address();
        let reserve = config.distributable_reserve;
        if ledger.balance(&config.unit_source) < reserve
            || ledger.allowance(&config.unit_source, &engine) < reserve
        {
            return Err(Error::InsufficientReserve);
        }

        campaign.state = FundraiseState::Active;
        campaign.start_at = now;
        campaign.end_at = end_at;
        campaign.personal_cap_end_at = now.saturating_add(config.personal_cap_window);
        storage::save_campaign(&env, &campaign);

        log!(&env, "fundraise started", now, end_at);
        events::emit_started(&env, now, end_at, campaign.personal_cap_end_at);
        Ok(())
    }

    /// Pause investments. `Active` → `Suspended`.
    pub fn suspend(env: Env, caller: Address) -> Result<(), Error> {
        Self::transition(
            &env,
            &caller,
            &[FundraiseState::Active],
            FundraiseState::Suspended,
        )
    }

    /// Reopen investments. `Suspended` → `Active`.
    pub fn resume(env: Env, caller: Address) -> Result<(), Error> {
        Self::transition(
            &env,
            &caller,
            &[FundraiseState::Suspended],
            FundraiseState::Active,
        )
    }

    /// Stop the campaign for good. `Active` | `Suspended` → `Terminated`.
    pub fn terminate(env: Env, caller: Address) -> Result<(), Error> {
        Self::transition(
            &env,
            &caller,
            &[FundraiseState::Active, FundraiseState::Suspended],
            FundraiseState::Terminated,
        )
    }

    /// Change the end date and caps of a suspended campaign.
    ///
    /// Only the fields set in `options` change. A new `end_at` must lie in
    /// the future, and the merged caps must stay consistent and no lower
    /// than what has already been collected.
    pub fn tune(env: Env, caller: Address, options: TuneOptions) -> Result<(), Error> {
        access_control::require_owner(&env, &caller)?;
        let mut campaign = storage::load_campaign(&env)?;
        let mut caps = storage::load_caps(&env)?;

        if campaign.state != FundraiseState::Suspended {
            return Err(Error::InvalidState);
        }

        if let Some(end_at) = options.end_at {
            if end_at <= env.ledger().timestamp() {
                return Err(Error::InvalidEndAt);
            }
            campaign.end_at = end_at;
        }
        if let Some(low_cap) = options.low_cap {
            caps.low_cap = low_cap;
        }
        if let Some(hard_cap) = options.hard_cap {
            caps.hard_cap = hard_cap;
        }
        if let Some(low_cap_tx) = options.low_cap_tx {
            caps.low_cap_tx = low_cap_tx;
        }
        if let Some(hard_cap_tx) = options.hard_cap_tx {
            caps.hard_cap_tx = hard_cap_tx;
        }
        if !caps.is_consistent() || caps.hard_cap < campaign.collected {
            return Err(Error::InvalidCaps);
        }

        storage::save_caps(&env, &caps);
        storage::save_campaign(&env, &campaign);
        events::emit_tuned(&env, campaign.end_at, caps);
        Ok(())
    }

    /// Re-evaluate time and cap conditions of an `Active` campaign.
    ///
    /// Anyone may call this. It settles the campaign as `Completed` once the
    /// low cap is reached and either the end date has passed or the hard cap
    /// is hit, and as `NotCompleted` when the end date passes below the low
    /// cap. In any other state it changes nothing. Returns the resulting state.
    pub fn touch(env: Env) -> Result<FundraiseState, Error> {
        let caps = storage::load_caps(&env)?;
        let mut campaign = storage::load_campaign(&env)?;
        if campaign.state != FundraiseState::Active {
            return Ok(campaign.state);
        }

        let now = env.ledger().timestamp();
        let ended = now > campaign.end_at;
        let next = if campaign.collected >= caps.low_cap
            && (ended || campaign.collected >= caps.hard_cap)
        {
            FundraiseState::Completed
        } else if ended {
            FundraiseState::NotCompleted
        } else {
            return Ok(campaign.state);
        };

        let from = campaign.state;
        campaign.state = next;
        storage::save_campaign(&env, &campaign);
        log!(&env, "fundraise settled", next as u32, campaign.collected);
        events::emit_state_changed(&env, from, next, campaign.collected);
        Ok(next)
    }

    // ─────────────────────────────────────────────────────────
    // Investing
    // ─────────────────────────────────────────────────────────

    /// Exchange `amount` of currency for ledger units.
    ///
    /// Checks, in order: state, end date, whitelist, minimum per
    /// transaction, then the investor's cumulative personal cap while its
    /// window is open or the maximum per transaction after it, and the hard
    /// cap. Reaching the hard cap exactly completes the campaign.
    pub fn invest(env: Env, investor: Address, amount: i128) -> Result<Investment, Error> {
        Self::execute_investment(&env, investor, amount)
    }

    /// Same operation as [`FundraiseEngine::invest`].
    pub fn buy_tokens(env: Env, investor: Address, amount: i128) -> Result<Investment, Error> {
        Self::execute_investment(&env, investor, amount)
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    /// Current state; `Inactive` before `init`.
    pub fn state(env: Env) -> FundraiseState {
        storage::load_campaign(&env)
            .map(|c| c.state)
            .unwrap_or(FundraiseState::Inactive)
    }

    /// Currency collected so far; `0` before `init`.
    pub fn collected(env: Env) -> i128 {
        storage::load_campaign(&env)
            .map(|c| c.collected)
            .unwrap_or(0)
    }

    /// Cumulative amount accepted from `investor`.
    pub fn invested(env: Env, investor: Address) -> i128 {
        storage::get_invested(&env, &investor)
    }

    /// `0` until `start`.
    pub fn start_at(env: Env) -> u64 {
        storage::load_campaign(&env).map(|c| c.start_at).unwrap_or(0)
    }

    pub fn end_at(env: Env) -> u64 {
        storage::load_campaign(&env).map(|c| c.end_at).unwrap_or(0)
    }

    pub fn personal_cap_end_at(env: Env) -> u64 {
        storage::load_campaign(&env)
            .map(|c| c.personal_cap_end_at)
            .unwrap_or(0)
    }

    pub fn campaign(env: Env) -> Result<Campaign, Error> {
        storage::load_campaign(&env)
    }

    pub fn caps(env: Env) -> Result<Caps, Error> {
        storage::load_caps(&env)
    }

    pub fn config(env: Env) -> Result<FundraiseConfig, Error> {
        storage::load_config(&env)
    }

    // ─────────────────────────────────────────────────────────
    // Internal Helpers
    // ─────────────────────────────────────────────────────────

    fn transition(
        env: &Env,
        caller: &Address,
        allowed_from: &[FundraiseState],
        to: FundraiseState,
    ) -> Result<(), Error> {
        access_control::require_owner(env, caller)?;
        let mut campaign = storage::load_campaign(env)?;
        let from = campaign.state;
        if !allowed_from.contains(&from) {
            return Err(Error::InvalidState);
        }

        campaign.state = to;
        storage::save_campaign(env, &campaign);
        log!(env, "fundraise state changed", from as u32, to as u32);
        events::emit_state_changed(env, from, to, campaign.collected);
        Ok(())
    }

    fn execute_investment(env: &Env, investor: Address, amount: i128) -> Result<Investment, Error> {
        investor.require_auth();
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let config = storage::load_config(env)?;
        let caps = storage::load_caps(env)?;
        let mut campaign = storage::load_campaign(env)?;

        if campaign.state != FundraiseState::Active {
            return Err(Error::NotActive);
        }
        let now = env.ledger().timestamp();
        if now > campaign.end_at {
            return Err(Error::FundraiseEnded);
        }
        if !whitelist::is_allowed(env, &investor) {
            return Err(Error::NotWhitelisted);
        }
        if amount < caps.low_cap_tx {
            return Err(Error::BelowMinTx);
        }

        // Inside the window the cumulative personal cap replaces the
        // per-transaction maximum.
        let invested_before = storage::get_invested(env, &investor);
        let invested_after = invested_before
            .checked_add(amount)
            .ok_or(Error::Overflow)?;
        if now < campaign.personal_cap_end_at {
            if invested_after > config.personal_cap {
                return Err(Error::PersonalCapExceeded);
            }
        } else if amount > caps.hard_cap_tx {
            return Err(Error::AboveMaxTx);
        }

        let collected = campaign
            .collected
            .checked_add(amount)
            .ok_or(Error::Overflow)?;
        if collected > caps.hard_cap {
            return Err(Error::HardCapExceeded);
        }

        let bonus_pct = exchange::bonus_pct(&campaign, now);
        let units =
            exchange::units_for(amount, &config.exchange_ratio, bonus_pct).ok_or(Error::Overflow)?;
        if units == 0 {
            return Err(Error::InvalidAmount);
        }

        let ledger = LedgerClient::new(env, &config.ledger);
        let engine = env.current_contract_address();
        match ledger.try_transfer_from(&engine, &config.unit_source, &investor, &units) {
            Ok(Ok(())) => {}
            _ => return Err(Error::LedgerTransferFailed),
        }

        let currency = token::Client::new(env, &config.currency);
        match currency.try_transfer(&investor, &config.beneficiary, &amount) {
            Ok(Ok(())) => {}
            _ => return Err(Error::ForwardFailed),
        }

        campaign.collected = collected;
        storage::set_invested(env, &investor, invested_after);

        let investment = Investment {
            investor,
            amount,
            units,
            bonus_pct,
        };
        events::emit_invested(env, &investment);

        if campaign.collected == caps.hard_cap {
            let from = campaign.state;
            campaign.state = FundraiseState::Completed;
            log!(env, "fundraise hard cap reached", campaign.collected);
            events::emit_state_changed(env, from, campaign.state, campaign.collected);
        }
        storage::save_campaign(env, &campaign);
        Ok(investment)
    }
}
