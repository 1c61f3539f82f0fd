//! Currency-to-unit conversion.

use crate::types::{Campaign, ExchangeRatio};

/// Bonus percentage granted to an investment made at `now`.
///
/// Extension point for tiered bonuses keyed on `campaign.collected` or on
/// the time elapsed since `campaign.start_at`. No tiers are configured, so
/// every investment earns `0`.
pub fn bonus_pct(_campaign: &Campaign, _now: u64) -> u32 {
    0
}

/// Ledger units produced by `amount` currency units.
///
/// `floor(amount * ratio.units / ratio.currency)`, then raised by
/// `bonus_pct` percent and floored again. Never rounds up. Returns `None`
/// on overflow.
pub fn units_for(amount: i128, ratio: &ExchangeRatio, bonus_pct: u32) -> Option<i128> {
    let base = amount.checked_mul(ratio.units)?.checked_div(ratio.currency)?;
    if bonus_pct == 0 {
        return Some(base);
    }
    base.checked_mul(100 + bonus_pct as i128)?.checked_div(100)
}
