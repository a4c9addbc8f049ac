//!
//! Network parameter selection for the Bitcoin protocol family: per-network
//! parameter records with built-in mainnet/testnet/regtest presets, plus a
//! process-wide active-configuration slot supporting validated installation
//! of caller-defined alternative networks.
//!

pub mod core;
pub mod errors;
pub mod network;
pub mod params;
pub mod selection;

pub use errors::{SelectionError, SelectionResult};
pub use network::{Network, NetworkError};
pub use params::{
    Base58Prefix, Base58Prefixes, ChainParams, ChainParamsBuilder, MAINNET_PARAMS, REGTEST_PARAMS, TESTNET_PARAMS,
};
pub use selection::{params, select_alternative_params, select_network, select_params, ActiveParams};
