use super::genesis::{create_legacy_genesis_block, enforce_genesis};
use super::seeds::SEED6_TEST;
use super::{Base58Prefixes, ChainParams, ChainTxData, CheckpointData, NetworkId};
use crate::consensus::{Bip9Deployment, ConsensusParams, DeploymentPos, ForkMarkers, MAX_VERSION_BITS_DEPLOYMENTS};
use crate::primitives::{Hash256, COIN};

pub const TESTNET_GENESIS_HASH: Hash256 =
    Hash256::from_display_hex("79e4683a94fb0374ac9d52638b594dcf0318975acb8b275e280f93c082c0964c");
pub const TESTNET_GENESIS_MERKLE_ROOT: Hash256 =
    Hash256::from_display_hex("97ddfbbae6be97fd6cdf3e7ca13232a3afff2353e29badfab7f73011edd4ced9");

pub(super) fn testnet_params() -> ChainParams {
    let mut deployments = [Bip9Deployment { bit: 0, start_time: 0, timeout: 0 }; MAX_VERSION_BITS_DEPLOYMENTS];
    deployments[DeploymentPos::TestDummy.index()] = Bip9Deployment {
        bit: 28,
        start_time: 1_199_145_601, // January 1, 2008
        timeout: 1_230_767_999,    // December 31, 2008
    };

    let genesis = create_legacy_genesis_block(1_581_517_800, 80_014, 0x1f00_ffff, 1, 50 * COIN);
    enforce_genesis(NetworkId::Test, &genesis, &TESTNET_GENESIS_HASH, &TESTNET_GENESIS_MERKLE_ROOT);

    let consensus = ConsensusParams {
        hash_genesis_block: genesis.block_hash(),
        subsidy_halving_interval: 2_100_000,
        bip34_height: 16,
        bip34_hash: Hash256::ZERO,
        bip65_height: 0,
        bip66_height: 0,
        csv_height: 1,
        segwit_height: 1,
        min_bip9_warning_height: 501, // segwit activation height + miner confirmation window
        rule_change_activation_threshold: 375, // 75% for testchains
        miner_confirmation_window: 500,
        deployments,
        pow_limit: Hash256::from_display_hex("0000ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"),
        pow_neoscrypt_limit: Hash256::ZERO,
        pow_allow_min_difficulty_blocks: true,
        pow_no_retargeting: false,
        pow_target_spacing: 60,
        pow_target_timespan: 60,
        checkpoint_pub_key: "0421c27bb6580b05dcda1f47e59274489f094a3e85d96bbc38d5befd10eee97397ec8a93b6d8d79e8370239a8f39adf66322b41dafe83066bbcee6144e4c41a699",
        minimum_chain_work: Hash256::ZERO,
        default_assume_valid: Hash256::ZERO,
        forks: ForkMarkers {
            fork_two: 0,
            fork_three: 0,
            fork_four: 0,
            time_limit: 100,
            neoscrypt_fork: 1_581_518_000,
            ..ForkMarkers::default()
        },
    };

    ChainParams {
        network_id: NetworkId::Test,
        consensus,
        message_start: [0x91, 0x65, 0x6a, 0x71],
        message_start_old: Some([0xda, 0xaf, 0xa5, 0xba]),
        default_port: 19336,
        prune_after_height: 1000,
        assumed_blockchain_size: 1,
        assumed_chain_state_size: 1,
        // nodes with support for servicebits filtering should be at the top
        dns_seeds: vec!["testnet-explorer2.feathercoin.com", "testnet-dnsseed.feathercoin.com"],
        fixed_seeds: SEED6_TEST.to_vec(),
        base58_prefixes: Base58Prefixes {
            pubkey_address: vec![111],
            script_address: vec![196],
            secret_key: vec![239],
            ext_public_key: vec![0x04, 0x35, 0x87, 0xCF],
            ext_secret_key: vec![0x04, 0x35, 0x83, 0x94],
        },
        bech32_hrp: "tf",
        checkpoint_data: CheckpointData::from_entries(&[
            (0, genesis.block_hash()),
            (546, Hash256::from_display_hex("c889c0fb27bf7c669cff1cf9407f768cde2a084e1dc527baa6dadbed9b22bf29")),
        ]),
        // getchaintxstats 545 c889c0fb27bf7c669cff1cf9407f768cde2a084e1dc527baa6dadbed9b22bf29
        chain_tx_data: ChainTxData { time: 1_581_570_241, tx_count: 547, tx_rate: 0.01200996055444148 },
        genesis,
        default_consistency_checks: false,
        require_standard: false,
        is_test_chain: true,
    }
}
