use crate::chainparams::NetworkId;
use thiserror::Error;

/// Everything that can stop chain parameters from being selected at startup.
#[derive(Debug, Error)]
pub enum ChainParamsError {
    #[error("Unknown chain {0}.")]
    UnknownChain(String),

    #[error("Invalid combination of -regtest, -testnet and -chain. Can use at most one.")]
    ConflictingChainSelection,

    #[error("Chain parameters already selected for {0}")]
    ParamsAlreadySelected(NetworkId),

    #[error("Error reading configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error("{network} genesis {field} mismatch: expected {expected}, computed {actual}")]
    GenesisMismatch {
        network: NetworkId,
        field: &'static str,
        expected: String,
        actual: String,
    },

    #[error("Version bits parameters malformed, expecting deployment:start:end (got {0:?})")]
    MalformedOverride(String),

    #[error("Invalid deployment ({0})")]
    UnknownDeployment(String),

    #[error("Invalid {field} ({value}): {reason}")]
    InvalidIntegerOverride {
        field: &'static str,
        value: String,
        reason: &'static str,
    },
}
