pub mod constants;
pub mod genesis;

use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{SelectionError, SelectionResult};
use crate::network::Network;
use self::constants::{
    COINBASE_MATURITY, MAX_MONEY, POW_LIMIT_BITS, REGTEST_POW_LIMIT_BITS, REGTEST_SUBSIDY_HALVING_INTERVAL,
    SUBSIDY_HALVING_INTERVAL,
};
use self::genesis::{GenesisBlock, GENESIS, REGTEST_GENESIS, TESTNET_GENESIS};

/// Consensus-level parameters of a network. Changing one of these on a
/// running node would place it on a different network than the unmodified
/// nodes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoreParams {
    /// Canonical network name.
    pub name: String,
    /// Message-start magic prefixing every p2p wire message.
    pub message_start: [u8; 4],
    /// Conventional p2p listening port.
    pub default_port: u16,
    /// Genesis block constants.
    pub genesis: GenesisBlock,
    /// Compact encoding of the highest allowed proof-of-work target.
    pub pow_limit_bits: u32,
    /// Number of blocks between block-subsidy halvings.
    pub subsidy_halving_interval: u64,
    /// Upper bound on the monetary supply, in satoshis.
    pub max_money: u64,
    /// Depth at which a coinbase output becomes spendable.
    pub coinbase_maturity: u16,
    /// Whether blocks at the minimum difficulty are accepted after a
    /// block-spacing gap.
    pub allow_min_difficulty_blocks: bool,
}

impl CoreParams {
    /// Re-opens these params as a fully-populated builder, usually to derive
    /// an alternative network from a preset.
    pub fn to_builder(&self) -> CoreParamsBuilder {
        CoreParamsBuilder {
            name: Some(self.name.clone()),
            message_start: Some(self.message_start),
            default_port: Some(self.default_port),
            genesis: Some(self.genesis),
            pow_limit_bits: Some(self.pow_limit_bits),
            subsidy_halving_interval: Some(self.subsidy_halving_interval),
            max_money: Some(self.max_money),
            coinbase_maturity: Some(self.coinbase_maturity),
            allow_min_difficulty_blocks: Some(self.allow_min_difficulty_blocks),
        }
    }
}

pub static CORE_MAINNET_PARAMS: Lazy<Arc<CoreParams>> = Lazy::new(|| {
    Arc::new(CoreParams {
        name: "mainnet".to_string(),
        message_start: [0xf9, 0xbe, 0xb4, 0xd9],
        default_port: 8333,
        genesis: GENESIS,
        pow_limit_bits: POW_LIMIT_BITS,
        subsidy_halving_interval: SUBSIDY_HALVING_INTERVAL,
        max_money: MAX_MONEY,
        coinbase_maturity: COINBASE_MATURITY,
        allow_min_difficulty_blocks: false,
    })
});

pub static CORE_TESTNET_PARAMS: Lazy<Arc<CoreParams>> = Lazy::new(|| {
    Arc::new(CoreParams {
        name: "testnet".to_string(),
        message_start: [0x0b, 0x11, 0x09, 0x07],
        default_port: 18333,
        genesis: TESTNET_GENESIS,
        pow_limit_bits: POW_LIMIT_BITS,
        subsidy_halving_interval: SUBSIDY_HALVING_INTERVAL,
        max_money: MAX_MONEY,
        coinbase_maturity: COINBASE_MATURITY,
        allow_min_difficulty_blocks: true,
    })
});

pub static CORE_REGTEST_PARAMS: Lazy<Arc<CoreParams>> = Lazy::new(|| {
    Arc::new(CoreParams {
        name: "regtest".to_string(),
        message_start: [0xfa, 0xbf, 0xb5, 0xda],
        default_port: 18444,
        genesis: REGTEST_GENESIS,
        pow_limit_bits: REGTEST_POW_LIMIT_BITS,
        subsidy_halving_interval: REGTEST_SUBSIDY_HALVING_INTERVAL,
        max_money: MAX_MONEY,
        coinbase_maturity: COINBASE_MATURITY,
        allow_min_difficulty_blocks: true,
    })
});

/// Returns the built-in core preset for `network`.
pub(crate) fn core_preset(network: Network) -> Arc<CoreParams> {
    match network {
        Network::Mainnet => CORE_MAINNET_PARAMS.clone(),
        Network::Testnet => CORE_TESTNET_PARAMS.clone(),
        Network::Regtest => CORE_REGTEST_PARAMS.clone(),
    }
}

/// Validates an alternative core definition. The substitute must redefine
/// every [`CoreParams`] field; partially-defined cores are rejected rather
/// than backfilled from a preset.
pub(crate) fn build_alternative_core(builder: CoreParamsBuilder) -> SelectionResult<Arc<CoreParams>> {
    builder.build().map(Arc::new)
}

/// The core view of the currently active network configuration.
///
/// The handle is a snapshot: it stays valid across a later selection but
/// then refers to the previously active network.
pub fn core_params() -> Arc<CoreParams> {
    crate::selection::active().core()
}

/// Partial [`CoreParams`] in which every field is optional. Used together
/// with [`ChainParamsBuilder`](crate::params::ChainParamsBuilder) to define
/// an alternative network, and deserializable so embedders can describe one
/// in configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreParamsBuilder {
    pub name: Option<String>,
    pub message_start: Option<[u8; 4]>,
    pub default_port: Option<u16>,
    pub genesis: Option<GenesisBlock>,
    pub pow_limit_bits: Option<u32>,
    pub subsidy_halving_interval: Option<u64>,
    pub max_money: Option<u64>,
    pub coinbase_maturity: Option<u16>,
    pub allow_min_difficulty_blocks: Option<bool>,
}

impl CoreParamsBuilder {
    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.is_none() {
            missing.push("name");
        }
        if self.message_start.is_none() {
            missing.push("message_start");
        }
        if self.default_port.is_none() {
            missing.push("default_port");
        }
        if self.genesis.is_none() {
            missing.push("genesis");
        }
        if self.pow_limit_bits.is_none() {
            missing.push("pow_limit_bits");
        }
        if self.subsidy_halving_interval.is_none() {
            missing.push("subsidy_halving_interval");
        }
        if self.max_money.is_none() {
            missing.push("max_money");
        }
        if self.coinbase_maturity.is_none() {
            missing.push("coinbase_maturity");
        }
        if self.allow_min_difficulty_blocks.is_none() {
            missing.push("allow_min_difficulty_blocks");
        }
        missing
    }

    fn assemble(self) -> Option<CoreParams> {
        Some(CoreParams {
            name: self.name?,
            message_start: self.message_start?,
            default_port: self.default_port?,
            genesis: self.genesis?,
            pow_limit_bits: self.pow_limit_bits?,
            subsidy_halving_interval: self.subsidy_halving_interval?,
            max_money: self.max_money?,
            coinbase_maturity: self.coinbase_maturity?,
            allow_min_difficulty_blocks: self.allow_min_difficulty_blocks?,
        })
    }

    /// Completes the builder, failing with the exact missing field names if
    /// any [`CoreParams`] field is left undefined.
    pub fn build(self) -> SelectionResult<CoreParams> {
        let missing = self.missing_fields();
        self.assemble().ok_or(SelectionError::IncompleteCoreParams { missing })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_preset_constants() {
        assert_eq!(CORE_MAINNET_PARAMS.message_start, [0xf9, 0xbe, 0xb4, 0xd9]);
        assert_eq!(CORE_MAINNET_PARAMS.default_port, 8333);
        assert_eq!(CORE_MAINNET_PARAMS.pow_limit_bits, 0x1d00ffff);
        assert_eq!(CORE_MAINNET_PARAMS.subsidy_halving_interval, 210_000);
        assert!(!CORE_MAINNET_PARAMS.allow_min_difficulty_blocks);

        assert_eq!(CORE_TESTNET_PARAMS.message_start, [0x0b, 0x11, 0x09, 0x07]);
        assert_eq!(CORE_TESTNET_PARAMS.default_port, 18333);
        assert!(CORE_TESTNET_PARAMS.allow_min_difficulty_blocks);

        assert_eq!(CORE_REGTEST_PARAMS.message_start, [0xfa, 0xbf, 0xb5, 0xda]);
        assert_eq!(CORE_REGTEST_PARAMS.default_port, 18444);
        assert_eq!(CORE_REGTEST_PARAMS.pow_limit_bits, 0x207fffff);
        assert_eq!(CORE_REGTEST_PARAMS.subsidy_halving_interval, 150);

        for network in Network::iter() {
            assert_eq!(core_preset(network).name, network.to_string());
        }
    }

    #[test]
    fn test_empty_builder_names_every_field() {
        let missing = match CoreParamsBuilder::default().build() {
            Err(SelectionError::IncompleteCoreParams { missing }) => missing,
            other => panic!("unexpected result: {:?}", other),
        };
        assert_eq!(
            missing,
            vec![
                "name",
                "message_start",
                "default_port",
                "genesis",
                "pow_limit_bits",
                "subsidy_halving_interval",
                "max_money",
                "coinbase_maturity",
                "allow_min_difficulty_blocks",
            ]
        );
    }

    #[test]
    fn test_partial_builder_names_exactly_the_missing_fields() {
        let mut builder = CORE_REGTEST_PARAMS.to_builder();
        builder.name = None;
        builder.genesis = None;
        match builder.build() {
            Err(SelectionError::IncompleteCoreParams { missing }) => {
                assert_eq!(missing, vec!["name", "genesis"]);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_builder_roundtrip() {
        let rebuilt = CORE_TESTNET_PARAMS.to_builder().build().unwrap();
        assert_eq!(rebuilt, *CORE_TESTNET_PARAMS.as_ref());
    }
}
