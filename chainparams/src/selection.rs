use std::str::FromStr;
use std::sync::Arc;

use log::debug;
use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::core::{self, CoreParams, CoreParamsBuilder};
use crate::errors::{SelectionError, SelectionResult};
use crate::network::Network;
use crate::params::{preset, ChainParams, ChainParamsBuilder, MAINNET_PARAMS};

/// Thread-synchronized holder of the active network configuration.
///
/// One lock guards a single record from which both the chain view and the
/// core view derive, so the two views switch together and can never be
/// observed disagreeing. A process-global instance backs [`select_params`]
/// and friends; embedders that prefer an injected handle over the process
/// global can own their own instance.
#[derive(Debug)]
pub struct ActiveParams {
    inner: RwLock<Arc<ChainParams>>,
}

impl ActiveParams {
    /// A holder starting on the mainnet preset.
    pub fn new() -> Self {
        Self { inner: RwLock::new(MAINNET_PARAMS.clone()) }
    }

    /// Snapshot of the active chain params. The handle stays valid across a
    /// later selection but then refers to the previously active record.
    pub fn get(&self) -> Arc<ChainParams> {
        self.inner.read().clone()
    }

    /// Snapshot of the core view of the active params.
    pub fn core(&self) -> Arc<CoreParams> {
        self.inner.read().core.clone()
    }

    fn set(&self, chain: Arc<ChainParams>) {
        *self.inner.write() = chain;
    }

    /// Selects a built-in preset by its name token (`"mainnet"`,
    /// `"testnet"` or `"regtest"`). The active record is left untouched on
    /// failure.
    pub fn select(&self, name: &str) -> SelectionResult<()> {
        let network = Network::from_str(name)?;
        self.select_network(network);
        Ok(())
    }

    /// Selects a built-in preset.
    pub fn select_network(&self, network: Network) {
        debug!("selecting {} chain params", network);
        self.set(preset(network));
    }

    /// Installs an alternative network definition.
    ///
    /// `alt_core` must redefine every [`CoreParams`] field and `alt_chain`
    /// must be built over `alt_core` and define every chain-level field.
    /// All validation happens before the active record is replaced, so a
    /// rejected call leaves the previous selection fully in place.
    pub fn select_alternative(&self, alt_core: CoreParamsBuilder, alt_chain: ChainParamsBuilder) -> SelectionResult<()> {
        let core = core::build_alternative_core(alt_core.clone())?;
        if *alt_chain.core() != alt_core {
            return Err(SelectionError::DetachedCoreParams);
        }
        let chain = Arc::new(alt_chain.build_with_core(core)?);
        debug!("selecting alternative chain params for network '{}'", chain.network_name());
        self.set(chain);
        Ok(())
    }
}

impl Default for ActiveParams {
    fn default() -> Self {
        Self::new()
    }
}

static ACTIVE: Lazy<ActiveParams> = Lazy::new(ActiveParams::new);

pub(crate) fn active() -> &'static ActiveParams {
    &ACTIVE
}

/// The currently active chain params. See [`ActiveParams::get`] for the
/// staleness semantics of the returned handle.
pub fn params() -> Arc<ChainParams> {
    ACTIVE.get()
}

/// Switches the process-global configuration to the preset named by `name`.
pub fn select_params(name: &str) -> SelectionResult<()> {
    ACTIVE.select(name)
}

/// Typed variant of [`select_params`].
pub fn select_network(network: Network) {
    ACTIVE.select_network(network)
}

/// Switches the process-global configuration to an alternative network.
/// See [`ActiveParams::select_alternative`] for the validation contract.
pub fn select_alternative_params(alt_core: CoreParamsBuilder, alt_chain: ChainParamsBuilder) -> SelectionResult<()> {
    ACTIVE.select_alternative(alt_core, alt_chain)
}
