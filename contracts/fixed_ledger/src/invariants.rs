#![allow(dead_code)]

extern crate std;

use soroban_sdk::Address;

use crate::FixedLedgerClient;

/// INV-1: the balances of every holder sum to the fixed total supply.
///
/// `holders` must list every address that ever received units.
pub fn assert_supply_conserved(client: &FixedLedgerClient, holders: &[Address]) {
    let sum: i128 = holders.iter().map(|h| client.balance(h)).sum();
    assert_eq!(
        sum,
        client.total_supply(),
        "INV-1 violated: balances sum to {} but supply is {}",
        sum,
        client.total_supply()
    );
}

/// INV-2: no balance is ever negative.
pub fn assert_balances_non_negative(client: &FixedLedgerClient, holders: &[Address]) {
    for holder in holders {
        let balance = client.balance(holder);
        assert!(balance >= 0, "INV-2 violated: negative balance {}", balance);
    }
}

/// INV-3: a transfer of `amount` debits and credits exactly `amount`.
pub fn assert_transfer_invariant(
    from_before: i128,
    from_after: i128,
    to_before: i128,
    to_after: i128,
    amount: i128,
) {
    assert_eq!(
        from_after,
        from_before - amount,
        "INV-3 violated: sender debited {} instead of {}",
        from_before - from_after,
        amount
    );
    assert_eq!(
        to_after,
        to_before + amount,
        "INV-3 violated: recipient credited {} instead of {}",
        to_after - to_before,
        amount
    );
}

/// Run every ledger-wide invariant.
pub fn assert_all_ledger_invariants(client: &FixedLedgerClient, holders: &[Address]) {
    assert_supply_conserved(client, holders);
    assert_balances_non_negative(client, holders);
}
