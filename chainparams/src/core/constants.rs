//!
//! A module for constants which directly impact consensus.
//!

/// Number of satoshi units in one coin.
pub const COIN: u64 = 100_000_000;

/// Absolute upper bound on the monetary supply, in satoshis.
pub const MAX_MONEY: u64 = 21_000_000 * COIN;

/// Number of blocks between block-subsidy halvings on the public networks.
pub const SUBSIDY_HALVING_INTERVAL: u64 = 210_000;

/// Accelerated halving schedule used by regression-test networks.
pub const REGTEST_SUBSIDY_HALVING_INTERVAL: u64 = 150;

/// Compact encoding of the highest allowed proof-of-work target on mainnet
/// and testnet.
pub const POW_LIMIT_BITS: u32 = 0x1d00ffff;

/// Compact encoding of the practically unbounded regtest proof-of-work
/// target.
pub const REGTEST_POW_LIMIT_BITS: u32 = 0x207fffff;

/// Depth at which a coinbase output becomes spendable.
pub const COINBASE_MATURITY: u16 = 100;
