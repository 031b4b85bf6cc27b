//! Environment wiring: which zone, which domain, which records may move.

use std::fmt;

use clap::ValueEnum;
use thiserror::Error;

/// Service names whose records this tool is allowed to touch.
pub const ALLOWED_SERVICES: [&str; 5] = ["app", "api", "www", "admin", "static"];

/// Host label of the maintenance endpoint within each environment domain.
pub const MAINTENANCE_HOST: &str = "maintenance";

/// Alias targets minted by the Kubernetes load-balancer controller,
/// optionally behind the `dualstack.` prefix.
pub const LOAD_BALANCER_PATTERN: &str = r"^(dualstack\.)?k8s-";

/// Routing mode the operator is switching the environment to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Send traffic to the maintenance target.
    On,
    /// Route traffic back to the load balancers.
    Off,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::On => write!(f, "on"),
            Self::Off => write!(f, "off"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown profile '{0}', expected dev, staging or production")]
pub struct InvalidProfile(pub String);

/// One deployment environment: domain suffix plus hosted zone. The profile
/// name doubles as the AWS credentials profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvContext {
    pub profile: String,
    pub domain: String,
    pub zone_id: String,
}

impl EnvContext {
    /// Fixed (domain, zone) pair for a profile name.
    pub fn resolve(profile: &str) -> Result<Self, InvalidProfile> {
        let (domain, zone_id) = match profile {
            "dev" => (".dev.nimbusops.io.", "Z0412013MV7E9PJ2K1Q8"),
            "staging" => (".stg.nimbusops.io.", "Z0892147TQD5HOPB2NW3"),
            "production" => (".nimbusops.io.", "Z0253498YFKJ6RLA4C7M"),
            other => return Err(InvalidProfile(other.to_string())),
        };
        Ok(Self {
            profile: profile.to_string(),
            domain: domain.to_string(),
            zone_id: zone_id.to_string(),
        })
    }

    /// Fully-qualified names of the allow-listed service records in this
    /// environment, e.g. `app` + `.stg.nimbusops.io.`.
    pub fn allowed_record_names(&self) -> Vec<String> {
        ALLOWED_SERVICES
            .iter()
            .map(|service| format!("{service}{}", self.domain))
            .collect()
    }

    /// Canonical alias target for maintenance mode.
    pub fn maintenance_target(&self) -> String {
        format!("{MAINTENANCE_HOST}{}", self.domain)
    }
}
