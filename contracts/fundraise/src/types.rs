//! # Types
//!
//! Shared data structures of the fundraising engine.
//!
//! ## Config / Caps / Campaign split
//!
//! - [`FundraiseConfig`]: written once at `init`; never mutated.
//! - [`Caps`]: aggregate and per-transaction bounds; mutated only by `tune`.
//! - [`Campaign`]: lifecycle state, schedule and the running total; written
//!   on every transition and investment.
//!
//! ## Lifecycle
//!
//! ```text
//! Inactive ──► Active ◄──► Suspended
//!                │  │          │
//!                │  └──────────┴──► Terminated
//!                ├──► Completed
//!                └──► NotCompleted
//! ```
//!
//! `Terminated`, `NotCompleted` and `Completed` are terminal.

use soroban_sdk::{contracttype, Address};

/// Current lifecycle state of the campaign.
///
/// The numeric codes are part of the public interface.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum FundraiseState {
    /// Not started yet; parameters fixed at `init`.
    Inactive = 0,
    /// Accepting investments. Parameters cannot change.
    Active = 1,
    /// Investments refused; the owner may `tune` and then `resume`.
    Suspended = 2,
    /// Stopped by the owner.
    Terminated = 3,
    /// Ended without reaching the low cap.
    NotCompleted = 4,
    /// Ended successfully.
    Completed = 5,
}

impl FundraiseState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            FundraiseState::Terminated | FundraiseState::NotCompleted | FundraiseState::Completed
        )
    }
}

/// `units` ledger base units are produced for every `currency` base units
/// invested. Both sides are strictly positive.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExchangeRatio {
    pub units: i128,
    pub currency: i128,
}

/// Everything the collaborator supplies when creating a campaign.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundraiseParams {
    /// `FixedLedger` contract whose units are sold.
    pub ledger: Address,
    /// Token contract used as the external currency.
    pub currency: Address,
    /// Receives every accepted investment.
    pub beneficiary: Address,
    /// Holder whose pre-approved ledger balance funds distributed units.
    pub unit_source: Address,
    pub low_cap: i128,
    pub hard_cap: i128,
    pub low_cap_tx: i128,
    pub hard_cap_tx: i128,
    pub exchange_ratio: ExchangeRatio,
    /// Cumulative per-investor ceiling while the personal cap window is open.
    pub personal_cap: i128,
    /// Length of the personal cap window in seconds, counted from `start`.
    pub personal_cap_window: u64,
    /// Units the source must hold and have approved before `start`.
    pub distributable_reserve: i128,
}

/// Immutable campaign configuration.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundraiseConfig {
    pub ledger: Address,
    pub currency: Address,
    pub beneficiary: Address,
    pub unit_source: Address,
    pub exchange_ratio: ExchangeRatio,
    pub personal_cap: i128,
    pub personal_cap_window: u64,
    pub distributable_reserve: i128,
}

/// Aggregate (`low_cap`, `hard_cap`) and per-transaction
/// (`low_cap_tx`, `hard_cap_tx`) currency bounds.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Caps {
    pub low_cap: i128,
    pub hard_cap: i128,
    pub low_cap_tx: i128,
    pub hard_cap_tx: i128,
}

impl Caps {
    /// Lower bounds may be zero, upper bounds must be positive, and no lower
    /// bound may exceed its upper bound.
    pub fn is_consistent(&self) -> bool {
        self.low_cap >= 0
            && self.hard_cap > 0
            && self.low_cap <= self.hard_cap
            && self.low_cap_tx >= 0
            && self.hard_cap_tx > 0
            && self.low_cap_tx <= self.hard_cap_tx
    }
}

/// Mutable campaign progress.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Campaign {
    pub state: FundraiseState,
    pub start_at: u64,
    pub end_at: u64,
    pub personal_cap_end_at: u64,
    /// Sum of every accepted investment. Only ever grows.
    pub collected: i128,
}

/// Partial update applied by `tune`. `None` leaves a field unchanged.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TuneOptions {
    pub end_at: Option<u64>,
    pub low_cap: Option<i128>,
    pub hard_cap: Option<i128>,
    pub low_cap_tx: Option<i128>,
    pub hard_cap_tx: Option<i128>,
}

/// Outcome of an accepted investment; also the `invested` event payload.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Investment {
    pub investor: Address,
    pub amount: i128,
    pub units: i128,
    pub bonus_pct: u32,
}
