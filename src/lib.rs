pub mod args;
pub mod chainparams;
pub mod consensus;
pub mod error;
pub mod primitives;

pub use args::NodeArgs;
pub use chainparams::{create_chain_params, params, select_params, ChainParams, NetworkId};
pub use error::ChainParamsError;
