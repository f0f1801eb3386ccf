use levcoin_node_rust::chainparams::{create_chain_params, NetworkId};
use levcoin_node_rust::primitives::Hash256;
use levcoin_node_rust::NodeArgs;

const EXPECTED: [(NetworkId, &str, &str); 3] = [
    (
        NetworkId::Main,
        "ad18ebc22205421c8f16a186977212fcbc7a379f978fe827b761f90d7bdde532",
        "3cf71a237d87ced23af024ea13c20ffc8a5b5e3e4379ca05e7f59102751b2fd0",
    ),
    (
        NetworkId::Test,
        "79e4683a94fb0374ac9d52638b594dcf0318975acb8b275e280f93c082c0964c",
        "97ddfbbae6be97fd6cdf3e7ca13232a3afff2353e29badfab7f73011edd4ced9",
    ),
    (
        NetworkId::Regtest,
        "c797e583cd93b97b1370a687519606abebd2b84fc4294b0e7584f59187e23ebb",
        "97ddfbbae6be97fd6cdf3e7ca13232a3afff2353e29badfab7f73011edd4ced9",
    ),
];

#[test]
fn every_network_builds_its_hardcoded_genesis() {
    for (network, hash, merkle_root) in EXPECTED {
        let params = create_chain_params(network, &NodeArgs::default()).unwrap();
        assert_eq!(params.genesis.block_hash(), Hash256::from_display_hex(hash), "{}", network);
        assert_eq!(params.genesis.header.merkle_root.to_string(), merkle_root, "{}", network);
        assert_eq!(params.genesis.header.prev_block_hash, Hash256::ZERO);
        assert_eq!(params.genesis.transactions.len(), 1);
    }
}

#[test]
fn main_checkpoints_start_at_genesis() {
    let main = create_chain_params(NetworkId::Main, &NodeArgs::default()).unwrap();
    let first = main.checkpoint_data.checkpoints.iter().next().map(|(h, hash)| (*h, *hash));
    assert_eq!(first, Some((0, Hash256::from_display_hex(EXPECTED[0].1))));
}

#[test]
fn main_construction_is_deterministic() {
    let a = create_chain_params(NetworkId::Main, &NodeArgs::default()).unwrap();
    let b = create_chain_params(NetworkId::Main, &NodeArgs::default()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn overrides_only_touch_regtest() {
    let args = NodeArgs::parse(["-segwitheight=7", "-vbparams=testdummy:1:2"]).unwrap();
    let main = create_chain_params(NetworkId::Main, &args).unwrap();
    assert_eq!(main, create_chain_params(NetworkId::Main, &NodeArgs::default()).unwrap());
    let regtest = create_chain_params(NetworkId::Regtest, &args).unwrap();
    assert_eq!(regtest.consensus.segwit_height, 7);
}

#[test]
fn published_rule_set_serializes_for_display() {
    let regtest = create_chain_params(NetworkId::Regtest, &NodeArgs::default()).unwrap();
    let json = serde_json::to_value(&regtest).unwrap();
    assert_eq!(json["network_id"], "regtest");
    assert_eq!(json["bech32_hrp"], "fcrt");
    assert_eq!(
        json["consensus"]["hash_genesis_block"],
        "c797e583cd93b97b1370a687519606abebd2b84fc4294b0e7584f59187e23ebb"
    );
}
