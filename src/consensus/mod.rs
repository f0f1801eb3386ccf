pub mod deployments;
pub mod params;

pub use deployments::{deployment_info, find_deployment, DeploymentInfo, VERSION_BITS_DEPLOYMENT_INFO};
pub use params::{
    Bip9Deployment, ConsensusParams, DeploymentPos, ForkMarkers, MAX_VERSION_BITS_DEPLOYMENTS,
    NEVER_ACTIVE_HEIGHT,
};
