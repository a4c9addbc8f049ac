use std::ops::Deref;
use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::core::{CoreParams, CoreParamsBuilder, CORE_MAINNET_PARAMS, CORE_REGTEST_PARAMS, CORE_TESTNET_PARAMS};
use crate::errors::{SelectionError, SelectionResult};
use crate::network::Network;

/// Keys of the base58 version-byte table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Base58Prefix {
    /// Version byte of pay-to-pubkey-hash addresses.
    PubkeyAddress,
    /// Version byte of pay-to-script-hash addresses.
    ScriptAddress,
    /// Version byte of WIF-encoded secret keys.
    SecretKey,
}

/// The base58 version bytes of a network, keyed by [`Base58Prefix`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Base58Prefixes {
    pub pubkey_address: u8,
    pub script_address: u8,
    pub secret_key: u8,
}

impl Base58Prefixes {
    pub const fn new(pubkey_address: u8, script_address: u8, secret_key: u8) -> Self {
        Self { pubkey_address, script_address, secret_key }
    }

    /// Version byte for `prefix`.
    pub fn get(&self, prefix: Base58Prefix) -> u8 {
        match prefix {
            Base58Prefix::PubkeyAddress => self.pubkey_address,
            Base58Prefix::ScriptAddress => self.script_address,
            Base58Prefix::SecretKey => self.secret_key,
        }
    }
}

/// Chain-level parameters of a network: the consensus-level core plus the
/// non-consensus constants that still identify a network (RPC port, address
/// encoding prefixes). NOTE: this struct can be implicitly de-refed into
/// [`CoreParams`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChainParams {
    /// Consensus-level portion, shared with the core view of the active
    /// configuration.
    pub core: Arc<CoreParams>,
    /// Conventional RPC port.
    pub rpc_port: u16,
    /// Base58 address-encoding version bytes.
    pub base58_prefixes: Base58Prefixes,
    /// Bech32 human-readable prefix.
    pub bech32_hrp: String,
}

impl ChainParams {
    pub fn network_name(&self) -> &str {
        &self.core.name
    }

    /// Re-opens these params as fully-populated builders, usually to derive
    /// an alternative network from a preset.
    pub fn to_builder(&self) -> ChainParamsBuilder {
        ChainParamsBuilder {
            core: self.core.to_builder(),
            rpc_port: Some(self.rpc_port),
            base58_prefixes: Some(self.base58_prefixes),
            bech32_hrp: Some(self.bech32_hrp.clone()),
        }
    }
}

impl AsRef<CoreParams> for ChainParams {
    fn as_ref(&self) -> &CoreParams {
        &self.core
    }
}

impl Deref for ChainParams {
    type Target = CoreParams;

    fn deref(&self) -> &Self::Target {
        &self.core
    }
}

impl From<Network> for ChainParams {
    fn from(network: Network) -> Self {
        preset(network).as_ref().clone()
    }
}

pub static MAINNET_PARAMS: Lazy<Arc<ChainParams>> = Lazy::new(|| {
    Arc::new(ChainParams {
        core: CORE_MAINNET_PARAMS.clone(),
        rpc_port: 8332,
        base58_prefixes: Base58Prefixes::new(0, 5, 128),
        bech32_hrp: "bc".to_string(),
    })
});

pub static TESTNET_PARAMS: Lazy<Arc<ChainParams>> = Lazy::new(|| {
    Arc::new(ChainParams {
        core: CORE_TESTNET_PARAMS.clone(),
        rpc_port: 18332,
        base58_prefixes: Base58Prefixes::new(111, 196, 239),
        bech32_hrp: "tb".to_string(),
    })
});

pub static REGTEST_PARAMS: Lazy<Arc<ChainParams>> = Lazy::new(|| {
    Arc::new(ChainParams {
        core: CORE_REGTEST_PARAMS.clone(),
        rpc_port: 18443,
        base58_prefixes: Base58Prefixes::new(111, 196, 239),
        bech32_hrp: "bcrt".to_string(),
    })
});

/// Returns the built-in preset for `network`.
pub(crate) fn preset(network: Network) -> Arc<ChainParams> {
    match network {
        Network::Mainnet => MAINNET_PARAMS.clone(),
        Network::Testnet => TESTNET_PARAMS.clone(),
        Network::Regtest => REGTEST_PARAMS.clone(),
    }
}

/// Partial [`ChainParams`] built over a core definition. Used with
/// [`select_alternative_params`](crate::selection::select_alternative_params)
/// to define an alternative network.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainParamsBuilder {
    core: CoreParamsBuilder,
    pub rpc_port: Option<u16>,
    pub base58_prefixes: Option<Base58Prefixes>,
    pub bech32_hrp: Option<String>,
}

impl ChainParamsBuilder {
    /// Opens a chain-level builder over an alternative core definition.
    pub fn new(core: CoreParamsBuilder) -> Self {
        Self { core, rpc_port: None, base58_prefixes: None, bech32_hrp: None }
    }

    /// The core definition this builder extends.
    pub fn core(&self) -> &CoreParamsBuilder {
        &self.core
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.rpc_port.is_none() {
            missing.push("rpc_port");
        }
        if self.base58_prefixes.is_none() {
            missing.push("base58_prefixes");
        }
        if self.bech32_hrp.is_none() {
            missing.push("bech32_hrp");
        }
        missing
    }

    /// Completes the chain-level fields over an already-validated core,
    /// failing with the exact missing field names if any is left undefined.
    pub(crate) fn build_with_core(self, core: Arc<CoreParams>) -> SelectionResult<ChainParams> {
        let missing = self.missing_fields();
        match (self.rpc_port, self.base58_prefixes, self.bech32_hrp) {
            (Some(rpc_port), Some(base58_prefixes), Some(bech32_hrp)) => {
                Ok(ChainParams { core, rpc_port, base58_prefixes, bech32_hrp })
            }
            _ => Err(SelectionError::IncompleteChainParams { missing }),
        }
    }

    /// Completes the whole definition, validating the embedded core first.
    pub fn build(self) -> SelectionResult<ChainParams> {
        let core = crate::core::build_alternative_core(self.core.clone())?;
        self.build_with_core(core)
    }
}
