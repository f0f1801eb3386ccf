use super::params::{DeploymentPos, MAX_VERSION_BITS_DEPLOYMENTS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeploymentInfo {
    /// Name used in `-vbparams` and getblocktemplate rules.
    pub name: &'static str,
    /// Whether getblocktemplate clients may ignore this rule.
    pub gbt_force: bool,
}

/// Closed registry of known version-bits deployments, indexed by `DeploymentPos`.
pub const VERSION_BITS_DEPLOYMENT_INFO: [DeploymentInfo; MAX_VERSION_BITS_DEPLOYMENTS] = [
    DeploymentInfo { name: "testdummy", gbt_force: true },
];

pub fn deployment_info(pos: DeploymentPos) -> &'static DeploymentInfo {
    &VERSION_BITS_DEPLOYMENT_INFO[pos.index()]
}

/// Exact, case-sensitive lookup by name.
pub fn find_deployment(name: &str) -> Option<DeploymentPos> {
    DeploymentPos::ALL
        .into_iter()
        .find(|pos| deployment_info(*pos).name == name)
}
