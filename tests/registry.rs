//! The registry is process-global, so the whole lifecycle runs in one test.

use levcoin_node_rust::chainparams::try_params;
use levcoin_node_rust::consensus::{DeploymentPos, NEVER_ACTIVE_HEIGHT};
use levcoin_node_rust::{params, select_params, ChainParamsError, NetworkId, NodeArgs};
use std::panic;

#[test]
fn select_once_then_read() {
    assert!(try_params().is_none());
    assert!(panic::catch_unwind(params).is_err());

    let args = NodeArgs::parse(["-segwitheight=-1", "-vbparams=testdummy:100:200"]).unwrap();

    // Rejected selections publish nothing.
    assert!(matches!(select_params("mainnet", &args), Err(ChainParamsError::UnknownChain(_))));
    let bad_args = NodeArgs::parse(["-vbparams=a:b"]).unwrap();
    assert!(matches!(select_params("regtest", &bad_args), Err(ChainParamsError::MalformedOverride(_))));
    assert!(try_params().is_none());

    let selected = select_params("regtest", &args).unwrap();
    assert_eq!(selected.network_id_string(), "regtest");
    assert_eq!(selected.network_id, NetworkId::Regtest);
    assert_eq!(selected.consensus.segwit_height, NEVER_ACTIVE_HEIGHT);
    let d = selected.consensus.deployment(DeploymentPos::TestDummy);
    assert_eq!((d.start_time, d.timeout), (100, 200));

    assert!(std::ptr::eq(params(), selected));
    assert!(matches!(
        select_params("main", &NodeArgs::default()),
        Err(ChainParamsError::ParamsAlreadySelected(NetworkId::Regtest))
    ));
    assert_eq!(params().network_id, NetworkId::Regtest);

    let readers: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| params().consensus.hash_genesis_block))
        .collect();
    for reader in readers {
        assert_eq!(reader.join().unwrap(), selected.consensus.hash_genesis_block);
    }
}
