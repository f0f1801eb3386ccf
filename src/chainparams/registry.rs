//! Process-wide selected chain parameters.
//!
//! Components should receive `&ChainParams` explicitly. This accessor exists
//! for code that cannot: it is written exactly once during startup by
//! [`select_params`] and is read-only afterwards.

use super::{create_chain_params, ChainParams, NetworkId};
use crate::args::NodeArgs;
use crate::error::ChainParamsError;
use once_cell::sync::OnceCell;

static GLOBAL_CHAIN_PARAMS: OnceCell<ChainParams> = OnceCell::new();

/// Builds the parameters for `network` and publishes them. Must run once,
/// before any consumer calls [`params`]. On error nothing is published.
pub fn select_params(network: &str, args: &NodeArgs) -> Result<&'static ChainParams, ChainParamsError> {
    let network_id: NetworkId = network.parse()?;
    if let Some(existing) = GLOBAL_CHAIN_PARAMS.get() {
        return Err(ChainParamsError::ParamsAlreadySelected(existing.network_id));
    }

    let chain_params = create_chain_params(network_id, args)?;
    GLOBAL_CHAIN_PARAMS
        .set(chain_params)
        .map_err(|_| ChainParamsError::ParamsAlreadySelected(params().network_id))?;

    let selected = params();
    log::info!(
        "Using {} chain parameters (genesis {}, port {})",
        selected.network_id,
        selected.consensus.hash_genesis_block,
        selected.default_port
    );
    Ok(selected)
}

/// The selected parameters.
///
/// # Panics
///
/// If [`select_params`] has not completed successfully.
pub fn params() -> &'static ChainParams {
    match GLOBAL_CHAIN_PARAMS.get() {
        Some(p) => p,
        None => panic!("chain parameters queried before select_params()"),
    }
}

pub fn try_params() -> Option<&'static ChainParams> {
    GLOBAL_CHAIN_PARAMS.get()
}
