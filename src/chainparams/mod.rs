//! Per-network chain parameters.
//!
//! Each network is described by one pure constructor returning a fully
//! populated [`ChainParams`]; the constructor rebuilds the genesis block and
//! aborts if it does not match the network's hardcoded identifiers.

pub mod genesis;
mod mainnet;
pub mod overrides;
mod regtest;
pub mod registry;
pub mod seeds;
mod testnet;

use crate::args::NodeArgs;
use crate::consensus::ConsensusParams;
use crate::error::ChainParamsError;
use crate::primitives::{Block, Hash256};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

pub use registry::{params, select_params, try_params};
pub use seeds::SeedSpec6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NetworkId {
    Main,
    Test,
    Regtest,
}

impl NetworkId {
    pub const ALL: [NetworkId; 3] = [NetworkId::Main, NetworkId::Test, NetworkId::Regtest];

    pub fn as_str(self) -> &'static str {
        match self {
            NetworkId::Main => "main",
            NetworkId::Test => "test",
            NetworkId::Regtest => "regtest",
        }
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NetworkId {
    type Err = ChainParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "main" => Ok(NetworkId::Main),
            "test" => Ok(NetworkId::Test),
            "regtest" => Ok(NetworkId::Regtest),
            other => Err(ChainParamsError::UnknownChain(other.to_string())),
        }
    }
}

impl Serialize for NetworkId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Base58Type {
    PubkeyAddress,
    ScriptAddress,
    SecretKey,
    ExtPublicKey,
    ExtSecretKey,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Base58Prefixes {
    pub pubkey_address: Vec<u8>,
    pub script_address: Vec<u8>,
    pub secret_key: Vec<u8>,
    pub ext_public_key: Vec<u8>,
    pub ext_secret_key: Vec<u8>,
}

/// Known-good blocks. Keys are heights, so iteration is strictly increasing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CheckpointData {
    pub checkpoints: BTreeMap<u32, Hash256>,
}

impl CheckpointData {
    pub fn from_entries(entries: &[(u32, Hash256)]) -> Self {
        CheckpointData { checkpoints: entries.iter().copied().collect() }
    }

    pub fn get(&self, height: u32) -> Option<&Hash256> {
        self.checkpoints.get(&height)
    }

    pub fn last_height(&self) -> Option<u32> {
        self.checkpoints.keys().next_back().copied()
    }
}

/// Snapshot of chain activity used to estimate sync progress. Informational.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ChainTxData {
    /// UNIX timestamp of the last known transaction count.
    pub time: i64,
    /// Transactions between genesis and that timestamp.
    pub tx_count: i64,
    /// Estimated transactions per second after that timestamp.
    pub tx_rate: f64,
}

/// Everything that distinguishes one network from another.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChainParams {
    pub network_id: NetworkId,
    pub consensus: ConsensusParams,
    pub message_start: [u8; 4],
    /// Magic accepted from peers still running the pre-rebrand protocol.
    pub message_start_old: Option<[u8; 4]>,
    pub default_port: u16,
    pub prune_after_height: u64,
    /// Rough on-disk size of the block files, in GB.
    pub assumed_blockchain_size: u64,
    /// Rough on-disk size of the chainstate, in GB.
    pub assumed_chain_state_size: u64,
    pub dns_seeds: Vec<&'static str>,
    pub fixed_seeds: Vec<SeedSpec6>,
    pub base58_prefixes: Base58Prefixes,
    pub bech32_hrp: &'static str,
    pub genesis: Block,
    pub checkpoint_data: CheckpointData,
    pub chain_tx_data: ChainTxData,
    pub default_consistency_checks: bool,
    pub require_standard: bool,
    pub is_test_chain: bool,
}

impl ChainParams {
    pub fn consensus(&self) -> &ConsensusParams {
        &self.consensus
    }

    pub fn network_id_string(&self) -> &'static str {
        self.network_id.as_str()
    }

    /// Blocks are only produced when requested (no difficulty retargeting).
    pub fn mine_blocks_on_demand(&self) -> bool {
        self.consensus.pow_no_retargeting
    }

    pub fn base58_prefix(&self, kind: Base58Type) -> &[u8] {
        let p = &self.base58_prefixes;
        match kind {
            Base58Type::PubkeyAddress => &p.pubkey_address,
            Base58Type::ScriptAddress => &p.script_address,
            Base58Type::SecretKey => &p.secret_key,
            Base58Type::ExtPublicKey => &p.ext_public_key,
            Base58Type::ExtSecretKey => &p.ext_secret_key,
        }
    }
}

/// Builds the parameters for `network`. Only regtest reads `args`.
pub fn create_chain_params(network: NetworkId, args: &NodeArgs) -> Result<ChainParams, ChainParamsError> {
    match network {
        NetworkId::Main => Ok(mainnet::main_params()),
        NetworkId::Test => Ok(testnet::testnet_params()),
        NetworkId::Regtest => regtest::regtest_params(args),
    }
}
