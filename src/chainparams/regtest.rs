use super::genesis::{create_legacy_genesis_block, enforce_genesis};
use super::overrides::apply_activation_overrides;
use super::{Base58Prefixes, ChainParams, ChainTxData, CheckpointData, NetworkId};
use crate::args::NodeArgs;
use crate::consensus::{
    Bip9Deployment, ConsensusParams, DeploymentPos, ForkMarkers, MAX_VERSION_BITS_DEPLOYMENTS, NEVER_ACTIVE_HEIGHT,
};
use crate::error::ChainParamsError;
use crate::primitives::{Hash256, COIN};

pub const REGTEST_GENESIS_HASH: Hash256 =
    Hash256::from_display_hex("c797e583cd93b97b1370a687519606abebd2b84fc4294b0e7584f59187e23ebb");
pub const REGTEST_GENESIS_MERKLE_ROOT: Hash256 =
    Hash256::from_display_hex("97ddfbbae6be97fd6cdf3e7ca13232a3afff2353e29badfab7f73011edd4ced9");

const REGTEST_POW_LIMIT: Hash256 =
    Hash256::from_display_hex("7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff");

/// Regression test network: minimal difficulty, no retargeting, and
/// activation parameters adjustable from `args`.
pub(super) fn regtest_params(args: &NodeArgs) -> Result<ChainParams, ChainParamsError> {
    let mut deployments = [Bip9Deployment { bit: 0, start_time: 0, timeout: 0 }; MAX_VERSION_BITS_DEPLOYMENTS];
    deployments[DeploymentPos::TestDummy.index()] =
        Bip9Deployment { bit: 28, start_time: 0, timeout: Bip9Deployment::NO_TIMEOUT };

    let genesis = create_legacy_genesis_block(1_515_840_634, 0, 0x207f_ffff, 1, 50 * COIN);
    enforce_genesis(NetworkId::Regtest, &genesis, &REGTEST_GENESIS_HASH, &REGTEST_GENESIS_MERKLE_ROOT);

    let mut consensus = ConsensusParams {
        hash_genesis_block: genesis.block_hash(),
        subsidy_halving_interval: 150,
        bip34_height: 500, // used in functional tests
        bip34_hash: Hash256::ZERO,
        bip65_height: 1351,
        bip66_height: 1251,
        csv_height: 432,
        segwit_height: 0, // always active unless overridden
        min_bip9_warning_height: 0,
        rule_change_activation_threshold: 108, // 75% for testchains
        miner_confirmation_window: 144,
        deployments,
        pow_limit: REGTEST_POW_LIMIT,
        pow_neoscrypt_limit: REGTEST_POW_LIMIT,
        pow_allow_min_difficulty_blocks: true,
        pow_no_retargeting: true,
        pow_target_spacing: 600,
        pow_target_timespan: 302_400,
        checkpoint_pub_key: "04f7908c00071227442382eeeb699be0cf4837ce63c6dfb8efd63e240ba27906f30b708934ad1831f26713437c945eae05e42d2f2400baf3310b60caf0d7e39cab",
        minimum_chain_work: Hash256::ZERO,
        default_assume_valid: Hash256::ZERO,
        forks: ForkMarkers {
            fork_two: 0,
            fork_three: 0,
            fork_four: 0,
            time_limit: NEVER_ACTIVE_HEIGHT,
            neoscrypt_fork: 1_515_840_635,
            ..ForkMarkers::default()
        },
    };

    apply_activation_overrides(&mut consensus, args)?;

    Ok(ChainParams {
        network_id: NetworkId::Regtest,
        consensus,
        message_start: [0xd1, 0xa5, 0xaa, 0xb1],
        message_start_old: Some([0xda, 0xaf, 0xa5, 0xba]),
        default_port: 18446,
        prune_after_height: 1000,
        assumed_blockchain_size: 0,
        assumed_chain_state_size: 0,
        dns_seeds: Vec::new(),
        fixed_seeds: Vec::new(),
        base58_prefixes: Base58Prefixes {
            pubkey_address: vec![111],
            script_address: vec![196],
            secret_key: vec![239],
            ext_public_key: vec![0x04, 0x35, 0x87, 0xCF],
            ext_secret_key: vec![0x04, 0x35, 0x83, 0x94],
        },
        bech32_hrp: "fcrt",
        checkpoint_data: CheckpointData::from_entries(&[(0, REGTEST_GENESIS_HASH)]),
        chain_tx_data: ChainTxData::default(),
        genesis,
        default_consistency_checks: true,
        require_standard: true,
        is_test_chain: true,
    })
}
