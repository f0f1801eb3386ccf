use crate::primitives::Hash256;
use serde::Serialize;

/// Height used for a rule that is never scheduled to activate.
pub const NEVER_ACTIVE_HEIGHT: i32 = i32::MAX;

/// Index into `ConsensusParams::deployments`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DeploymentPos {
    TestDummy = 0,
}

impl DeploymentPos {
    pub const ALL: [DeploymentPos; MAX_VERSION_BITS_DEPLOYMENTS] = [DeploymentPos::TestDummy];

    pub fn index(self) -> usize {
        self as usize
    }
}

pub const MAX_VERSION_BITS_DEPLOYMENTS: usize = 1;

/// A BIP9 version-bits soft fork: which bit miners signal with, and the
/// median-time-past window in which signaling counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bip9Deployment {
    pub bit: u8,
    pub start_time: i64,
    pub timeout: i64,
}

impl Bip9Deployment {
    /// Open-ended signaling window.
    pub const NO_TIMEOUT: i64 = i64::MAX;
    /// Start time marking a deployment as active from genesis.
    pub const ALWAYS_ACTIVE: i64 = -1;

    pub fn has_valid_window(&self) -> bool {
        self.timeout == Self::NO_TIMEOUT || self.start_time <= self.timeout
    }
}

/// Markers for planned protocol upgrades. Each one defaults to "never" and is
/// set independently per network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ForkMarkers {
    pub fork_one: i32,
    pub fork_two: i32,
    pub fork_three: i32,
    pub fork_four: i32,
    pub time_limit: i32,
    /// Block time (not height) from which the NeoScrypt proof of work applies.
    pub neoscrypt_fork: u32,
}

impl Default for ForkMarkers {
    fn default() -> Self {
        ForkMarkers {
            fork_one: NEVER_ACTIVE_HEIGHT,
            fork_two: NEVER_ACTIVE_HEIGHT,
            fork_three: NEVER_ACTIVE_HEIGHT,
            fork_four: NEVER_ACTIVE_HEIGHT,
            time_limit: NEVER_ACTIVE_HEIGHT,
            neoscrypt_fork: u32::MAX,
        }
    }
}

/// Consensus rules for one network.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsensusParams {
    pub hash_genesis_block: Hash256,
    pub subsidy_halving_interval: i32,
    /// Block height and hash at which BIP34 becomes active.
    pub bip34_height: i32,
    pub bip34_hash: Hash256,
    pub bip65_height: i32,
    pub bip66_height: i32,
    pub csv_height: i32,
    /// Height of the first block enforcing segwit rules.
    pub segwit_height: i32,
    /// Don't warn about unknown BIP9 activations below this height.
    pub min_bip9_warning_height: i32,
    /// Blocks needed within `miner_confirmation_window` to lock in a
    /// version-bits deployment.
    pub rule_change_activation_threshold: u32,
    pub miner_confirmation_window: u32,
    pub deployments: [Bip9Deployment; MAX_VERSION_BITS_DEPLOYMENTS],
    pub pow_limit: Hash256,
    pub pow_neoscrypt_limit: Hash256,
    pub pow_allow_min_difficulty_blocks: bool,
    pub pow_no_retargeting: bool,
    pub pow_target_spacing: i64,
    pub pow_target_timespan: i64,
    /// Uncompressed public key (hex) signing checkpoint broadcasts.
    pub checkpoint_pub_key: &'static str,
    pub minimum_chain_work: Hash256,
    pub default_assume_valid: Hash256,
    pub forks: ForkMarkers,
}

impl ConsensusParams {
    pub fn difficulty_adjustment_interval(&self) -> i64 {
        self.pow_target_timespan / self.pow_target_spacing
    }

    pub fn deployment(&self, pos: DeploymentPos) -> &Bip9Deployment {
        &self.deployments[pos.index()]
    }

    pub fn deployment_mut(&mut self, pos: DeploymentPos) -> &mut Bip9Deployment {
        &mut self.deployments[pos.index()]
    }
}
