use std::process::ExitCode;

use levcoin_node_rust::chainparams::SeedSpec6;
use levcoin_node_rust::{select_params, ChainParams, ChainParamsError, NodeArgs};

fn run() -> Result<&'static ChainParams, ChainParamsError> {
    let args = NodeArgs::from_env()?;
    let chain = args.chain_name()?;
    let params = select_params(&chain, &args)?;

    if args.get_bool_arg("printparams", false) {
        match serde_json::to_string_pretty(params) {
            Ok(json) => println!("{}", json),
            Err(e) => log::warn!("Could not render chain parameters: {}", e),
        }
    }
    Ok(params)
}

fn main() -> ExitCode {
    // Initialize logger
    env_logger::init();

    log::info!("Levcoin Rust Node starting up...");

    match run() {
        Ok(params) => {
            log::info!(
                "Network {}: magic {}, {} DNS seeds, {} fixed seeds, bech32 prefix '{}'",
                params.network_id,
                hex::encode(params.message_start),
                params.dns_seeds.len(),
                params.fixed_seeds.len(),
                params.bech32_hrp
            );
            let fixed_seeds: Vec<_> = params.fixed_seeds.iter().map(SeedSpec6::socket_addr).collect();
            log::debug!("Fixed seeds: {:?}", fixed_seeds);
            if params.is_test_chain {
                log::warn!("Running on a test chain; coins have no value.");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Startup failed: {}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
