use super::genesis::{create_levcoin_genesis_block, enforce_genesis};
use super::seeds::SEED6_MAIN;
use super::{Base58Prefixes, ChainParams, ChainTxData, CheckpointData, NetworkId};
use crate::consensus::{Bip9Deployment, ConsensusParams, DeploymentPos, ForkMarkers, MAX_VERSION_BITS_DEPLOYMENTS};
use crate::primitives::{Hash256, COIN};

pub const MAIN_GENESIS_HASH: Hash256 =
    Hash256::from_display_hex("ad18ebc22205421c8f16a186977212fcbc7a379f978fe827b761f90d7bdde532");
pub const MAIN_GENESIS_MERKLE_ROOT: Hash256 =
    Hash256::from_display_hex("3cf71a237d87ced23af024ea13c20ffc8a5b5e3e4379ca05e7f59102751b2fd0");

const SEGWIT_HEIGHT: i32 = 2_157_120; // 118ebe35057df2a42cfbbea8eb330e6f39da9e4b087202ce509b7a6bf7666f1e
const MINER_CONFIRMATION_WINDOW: u32 = 20_160;

pub(super) fn main_params() -> ChainParams {
    let mut deployments = [Bip9Deployment { bit: 0, start_time: 0, timeout: 0 }; MAX_VERSION_BITS_DEPLOYMENTS];
    deployments[DeploymentPos::TestDummy.index()] = Bip9Deployment {
        bit: 28,
        start_time: 1_199_145_601, // January 1, 2008
        timeout: 1_230_767_999,    // December 31, 2008
    };

    let genesis = create_levcoin_genesis_block(1_721_260_800, 3_944_752, 0x1e0f_fff0, 1, 50 * COIN);
    enforce_genesis(NetworkId::Main, &genesis, &MAIN_GENESIS_HASH, &MAIN_GENESIS_MERKLE_ROOT);

    let consensus = ConsensusParams {
        hash_genesis_block: genesis.block_hash(),
        subsidy_halving_interval: 2_100_000,
        bip34_height: 344_407,
        bip34_hash: Hash256::from_display_hex("9ca8e68e34ccdeeb35a52176155a7d524c8216a82450d696abcfda340129e271"),
        bip65_height: 2_120_750,
        bip66_height: 2_120_750,
        csv_height: SEGWIT_HEIGHT,
        segwit_height: SEGWIT_HEIGHT,
        min_bip9_warning_height: SEGWIT_HEIGHT + MINER_CONFIRMATION_WINDOW as i32,
        rule_change_activation_threshold: 15_120, // 75% of 20160
        miner_confirmation_window: MINER_CONFIRMATION_WINDOW,
        deployments,
        pow_limit: Hash256::from_display_hex("00000fffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"),
        pow_neoscrypt_limit: Hash256::from_display_hex(
            "0000003fffff0000000000000000000000000000000000000000000000000000",
        ),
        pow_allow_min_difficulty_blocks: false,
        pow_no_retargeting: false,
        pow_target_spacing: 150,         // 2.5 minutes
        pow_target_timespan: 302_400,    // 3.5 days
        checkpoint_pub_key: "0425165000270c45a2df329bb6cc179782e1ddcdd9afc6240b5f465d49b8f480635c43e6b194e98f69e9827fa7a62d4791ee96c9fa90ec11e45af5d6b2dbb76774",
        minimum_chain_work: Hash256::from_display_hex(
            "0000000000000000000000000000000000000000000000000a90c3cad43e87a7",
        ),
        default_assume_valid: Hash256::from_display_hex(
            "e29c854a0a54ac2c3f6b97e0416a0a7f17df6f80ecf4fa6eb3faa7ec1fceffb6", // 3275900
        ),
        forks: ForkMarkers::default(),
    };

    ChainParams {
        network_id: NetworkId::Main,
        consensus,
        // Rarely used upper ASCII, not valid as UTF-8, and a large 32-bit
        // integer with any alignment.
        message_start: [0x4c, 0x56, 0x43, 0x10],
        message_start_old: None,
        default_port: 11111,
        prune_after_height: 100_000,
        assumed_blockchain_size: 3,
        assumed_chain_state_size: 1,
        dns_seeds: vec![
            "coin.levcoin.net",
            "coin.komentari.com",
            "coin.dobribozhilov.com",
            "coin.ailaboratory.eu",
            "coin.semebo.com",
        ],
        fixed_seeds: SEED6_MAIN.to_vec(),
        base58_prefixes: Base58Prefixes {
            pubkey_address: vec![55], // 'L'
            script_address: vec![58], // 'Q'
            secret_key: vec![183],
            ext_public_key: vec![0x04, 0x35, 0x87, 0xCF],
            ext_secret_key: vec![0x04, 0x35, 0x83, 0x94],
        },
        bech32_hrp: "lvc",
        checkpoint_data: CheckpointData::from_entries(&[(0, genesis.block_hash())]),
        // getchaintxstats 4096 e29c854a0a54ac2c3f6b97e0416a0a7f17df6f80ecf4fa6eb3faa7ec1fceffb6
        chain_tx_data: ChainTxData { time: 1_596_492_036, tx_count: 5_601_248, tx_rate: 0.01661463197339783 },
        genesis,
        default_consistency_checks: false,
        require_standard: true,
        is_test_chain: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consensus::NEVER_ACTIVE_HEIGHT;

    #[test]
    fn genesis_matches_hardcoded_identifiers() {
        let params = main_params();
        assert_eq!(params.genesis.block_hash(), MAIN_GENESIS_HASH);
        assert_eq!(params.genesis.header.merkle_root, MAIN_GENESIS_MERKLE_ROOT);
        assert_eq!(
            params.genesis.block_hash().to_string(),
            "ad18ebc22205421c8f16a186977212fcbc7a379f978fe827b761f90d7bdde532"
        );
    }

    #[test]
    fn only_checkpoint_is_genesis() {
        let params = main_params();
        assert_eq!(params.checkpoint_data.checkpoints.len(), 1);
        assert_eq!(params.checkpoint_data.get(0), Some(&MAIN_GENESIS_HASH));
    }

    #[test]
    fn construction_is_pure() {
        assert_eq!(main_params(), main_params());
    }

    #[test]
    fn production_rules() {
        let params = main_params();
        let c = &params.consensus;
        assert!(!c.pow_allow_min_difficulty_blocks);
        assert!(!c.pow_no_retargeting);
        assert!(params.require_standard);
        assert!(!params.is_test_chain);
        assert!(!params.mine_blocks_on_demand());
        assert!(!params.dns_seeds.is_empty());
        assert!(!params.fixed_seeds.is_empty());
        assert_eq!(c.difficulty_adjustment_interval(), 2016);
        assert_eq!(c.min_bip9_warning_height, 2_177_280);
        assert_eq!(c.forks, ForkMarkers::default());
        assert_eq!(c.forks.fork_one, NEVER_ACTIVE_HEIGHT);
        assert_eq!(c.forks.neoscrypt_fork, u32::MAX);
    }
}
