//! Regtest-only activation overrides (`-segwitheight`, `-vbparams`).

use crate::args::NodeArgs;
use crate::consensus::{deployment_info, find_deployment, ConsensusParams, NEVER_ACTIVE_HEIGHT};
use crate::error::ChainParamsError;

pub const SEGWIT_HEIGHT_ARG: &str = "segwitheight";
pub const VBPARAMS_ARG: &str = "vbparams";

/// Applies every override present in `args` to `consensus`. Nothing is
/// applied past the first invalid value; the caller discards the partially
/// updated rules along with the error.
pub fn apply_activation_overrides(consensus: &mut ConsensusParams, args: &NodeArgs) -> Result<(), ChainParamsError> {
    if let Some(height) = args.get_int_arg(SEGWIT_HEIGHT_ARG)? {
        consensus.segwit_height = parse_segwit_height(height)?;
    }

    for override_str in args.get_args(VBPARAMS_ARG)? {
        apply_vbparams(consensus, &override_str)?;
    }
    Ok(())
}

/// Maps a `-segwitheight` value to an activation height. `-1` disables
/// segwit; anything else must lie in `[0, i32::MAX)`.
pub fn parse_segwit_height(height: i64) -> Result<i32, ChainParamsError> {
    if height < -1 || height >= NEVER_ACTIVE_HEIGHT as i64 {
        return Err(ChainParamsError::InvalidIntegerOverride {
            field: SEGWIT_HEIGHT_ARG,
            value: height.to_string(),
            reason: "activation height for segwit is out of valid range, use -1 to disable segwit",
        });
    }
    if height == -1 {
        log::info!("Segwit disabled for testing");
        return Ok(NEVER_ACTIVE_HEIGHT);
    }
    Ok(height as i32)
}

/// Applies one `deployment:start:end` override. A later override for the same
/// deployment replaces an earlier one.
pub fn apply_vbparams(consensus: &mut ConsensusParams, override_str: &str) -> Result<(), ChainParamsError> {
    let fields: Vec<&str> = override_str.split(':').collect();
    let [name, start, end] = fields.as_slice() else {
        return Err(ChainParamsError::MalformedOverride(override_str.to_string()));
    };

    let start_time = parse_i64(start, "nStartTime")?;
    let timeout = parse_i64(end, "nTimeout")?;

    let pos = find_deployment(name).ok_or_else(|| ChainParamsError::UnknownDeployment(name.to_string()))?;
    let deployment = consensus.deployment_mut(pos);
    deployment.start_time = start_time;
    deployment.timeout = timeout;
    log::info!(
        "Setting version bits activation parameters for {} to start={}, timeout={}",
        deployment_info(pos).name,
        start_time,
        timeout
    );
    Ok(())
}

fn parse_i64(value: &str, field: &'static str) -> Result<i64, ChainParamsError> {
    value.parse::<i64>().map_err(|_| ChainParamsError::InvalidIntegerOverride {
        field,
        value: value.to_string(),
        reason: "not a 64-bit integer",
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chainparams::{create_chain_params, NetworkId};
    use crate::consensus::{Bip9Deployment, DeploymentPos};

    fn regtest_consensus() -> ConsensusParams {
        create_chain_params(NetworkId::Regtest, &NodeArgs::default()).unwrap().consensus
    }

    #[test]
    fn vbparams_overwrites_window() {
        let mut c = regtest_consensus();
        apply_vbparams(&mut c, "testdummy:100:200").unwrap();
        let d = c.deployment(DeploymentPos::TestDummy);
        assert_eq!((d.start_time, d.timeout), (100, 200));
        assert_eq!(d.bit, 28);
    }

    #[test]
    fn vbparams_last_write_wins() {
        let mut c = regtest_consensus();
        apply_vbparams(&mut c, "testdummy:100:200").unwrap();
        apply_vbparams(&mut c, "testdummy:-1:9223372036854775807").unwrap();
        let d = c.deployment(DeploymentPos::TestDummy);
        assert_eq!(d.start_time, Bip9Deployment::ALWAYS_ACTIVE);
        assert_eq!(d.timeout, Bip9Deployment::NO_TIMEOUT);
    }

    #[test]
    fn vbparams_field_count() {
        let mut c = regtest_consensus();
        for bad in ["a:b", "testdummy", "testdummy:1:2:3", ""] {
            assert!(
                matches!(apply_vbparams(&mut c, bad), Err(ChainParamsError::MalformedOverride(s)) if s == bad),
                "{:?} should be malformed",
                bad
            );
        }
    }

    #[test]
    fn vbparams_unknown_deployment() {
        let mut c = regtest_consensus();
        assert!(matches!(
            apply_vbparams(&mut c, "bogus:0:1"),
            Err(ChainParamsError::UnknownDeployment(name)) if name == "bogus"
        ));
        assert!(matches!(apply_vbparams(&mut c, ":0:1"), Err(ChainParamsError::UnknownDeployment(_))));
    }

    #[test]
    fn vbparams_invalid_integers() {
        let mut c = regtest_consensus();
        assert!(matches!(
            apply_vbparams(&mut c, "testdummy:x:1"),
            Err(ChainParamsError::InvalidIntegerOverride { field: "nStartTime", .. })
        ));
        assert!(matches!(
            apply_vbparams(&mut c, "testdummy:1: 2"),
            Err(ChainParamsError::InvalidIntegerOverride { field: "nTimeout", .. })
        ));
        assert!(matches!(
            apply_vbparams(&mut c, "testdummy:1:9223372036854775808"),
            Err(ChainParamsError::InvalidIntegerOverride { field: "nTimeout", .. })
        ));
        // Failed overrides leave the window untouched.
        assert_eq!(*c.deployment(DeploymentPos::TestDummy), *regtest_consensus().deployment(DeploymentPos::TestDummy));
    }

    #[test]
    fn segwit_height_domain() {
        assert_eq!(parse_segwit_height(-1).unwrap(), NEVER_ACTIVE_HEIGHT);
        assert_eq!(parse_segwit_height(0).unwrap(), 0);
        assert_eq!(parse_segwit_height(2_147_483_646).unwrap(), 2_147_483_646);
        for bad in [-2, 2_147_483_647, i64::MAX, i64::MIN] {
            assert!(matches!(
                parse_segwit_height(bad),
                Err(ChainParamsError::InvalidIntegerOverride { field: SEGWIT_HEIGHT_ARG, .. })
            ));
        }
    }
}
