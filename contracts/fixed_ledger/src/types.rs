use soroban_sdk::{contracttype, String};

/// Descriptive ledger metadata, written once at `init`.
///
/// `name`, `symbol` and `decimals` are opaque to the ledger; they exist for
/// wallets and indexers. `total_supply` is the fixed number of base units
/// credited to the first owner and never changes afterwards.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LedgerMetadata {
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
    pub total_supply: i128,
}
