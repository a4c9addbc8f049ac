//! End-to-end coverage of the public selection surface, driving the
//! process-global slot the way an embedding application would.

use std::sync::Arc;

use btc_chainparams::core::{core_params, CoreParamsBuilder, CORE_MAINNET_PARAMS};
use btc_chainparams::{
    params, select_alternative_params, select_network, select_params, Base58Prefix, Base58Prefixes, ChainParamsBuilder,
    Network, SelectionError, MAINNET_PARAMS,
};

fn devnet_core() -> CoreParamsBuilder {
    let mut core = CORE_MAINNET_PARAMS.to_builder();
    core.name = Some("devnet".to_string());
    core.message_start = Some([0xde, 0xad, 0xbe, 0xef]);
    core.default_port = Some(38333);
    core.allow_min_difficulty_blocks = Some(true);
    core
}

#[test]
fn select_params_drives_the_global_slot() {
    // The process starts on mainnet.
    assert_eq!(params().network_name(), "mainnet");
    assert_eq!(params().rpc_port, 8332);
    assert_eq!(params().base58_prefixes.get(Base58Prefix::SecretKey), 128);
    assert_eq!(params().bech32_hrp, "bc");

    select_params("testnet").unwrap();
    assert_eq!(params().rpc_port, 18332);
    assert_eq!(params().base58_prefixes.get(Base58Prefix::PubkeyAddress), 111);
    assert_eq!(params().bech32_hrp, "tb");
    assert_eq!(core_params().default_port, 18333);

    // A rejected selection leaves the active record fully in place.
    let before = params();
    let err = select_params("signet").unwrap_err();
    assert!(matches!(err, SelectionError::UnknownNetwork(_)));
    assert!(Arc::ptr_eq(&before, &params()));

    select_network(Network::Regtest);
    assert_eq!(params().rpc_port, 18443);
    assert_eq!(params().bech32_hrp, "bcrt");
    assert_eq!(params().subsidy_halving_interval, 150);

    // An alternative network switches both layer views together.
    let alt_core = devnet_core();
    let mut alt_chain = ChainParamsBuilder::new(alt_core.clone());
    alt_chain.rpc_port = Some(38332);
    alt_chain.base58_prefixes = Some(Base58Prefixes::new(30, 50, 158));
    alt_chain.bech32_hrp = Some("dev".to_string());
    select_alternative_params(alt_core, alt_chain).unwrap();

    let chain = params();
    let core = core_params();
    assert_eq!(chain.network_name(), "devnet");
    assert_eq!(chain.rpc_port, 38332);
    assert_eq!(core.message_start, [0xde, 0xad, 0xbe, 0xef]);
    assert!(Arc::ptr_eq(&chain.core, &core));

    // An incomplete substitute is rejected wholesale.
    let mut bad_core = devnet_core();
    bad_core.pow_limit_bits = None;
    let bad_chain = ChainParamsBuilder::new(bad_core.clone());
    let err = select_alternative_params(bad_core, bad_chain).unwrap_err();
    assert_eq!(err, SelectionError::IncompleteCoreParams { missing: vec!["pow_limit_bits"] });
    assert_eq!(params().network_name(), "devnet");

    // Presets stay reachable after a custom network was active.
    select_params("mainnet").unwrap();
    assert!(Arc::ptr_eq(&params(), &*MAINNET_PARAMS));
}
