//! Domain value objects: BackendPlatform, RepoType, TriggerType, DeploymentKind.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! They define the wire spelling used in descriptors and templates and their
//! `FromStr` parsers. Which platforms actually have a deployment routine is
//! decided in `profiles.rs`, not here.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` arm and the `FromStr` arm here
//! 3. If it gets a deployment routine, add a `PlatformProfile` variant
//! 4. Done

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── BackendPlatform ──────────────────────────────────────────────────────────

/// A backend platform a descriptor may request.
///
/// This is the full vocabulary shared by the generator family. Only a subset
/// has a deployment routine; see [`crate::domain::PlatformProfile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BackendPlatform {
    Node,
    Swift,
    Java,
    Spring,
    Django,
    Python,
    Android,
}

impl BackendPlatform {
    /// Every requestable platform, in display order.
    pub const ALL: [BackendPlatform; 7] = [
        Self::Node,
        Self::Swift,
        Self::Java,
        Self::Spring,
        Self::Django,
        Self::Python,
        Self::Android,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Node => "NODE",
            Self::Swift => "SWIFT",
            Self::Java => "JAVA",
            Self::Spring => "SPRING",
            Self::Django => "DJANGO",
            Self::Python => "PYTHON",
            Self::Android => "ANDROID",
        }
    }
}

impl fmt::Display for BackendPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackendPlatform {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NODE" => Ok(Self::Node),
            "SWIFT" => Ok(Self::Swift),
            "JAVA" => Ok(Self::Java),
            "SPRING" => Ok(Self::Spring),
            "DJANGO" => Ok(Self::Django),
            "PYTHON" => Ok(Self::Python),
            "ANDROID" => Ok(Self::Android),
            _ => Err(DomainError::unsupported_platform(s)),
        }
    }
}

// ── RepoType ─────────────────────────────────────────────────────────────────

/// How the toolchain provisions the application repository.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepoType {
    #[default]
    Clone,
    Fork,
    Link,
    New,
}

impl RepoType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Clone => "clone",
            Self::Fork => "fork",
            Self::Link => "link",
            Self::New => "new",
        }
    }
}

impl fmt::Display for RepoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RepoType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "clone" => Ok(Self::Clone),
            "fork" => Ok(Self::Fork),
            "link" | "existing" => Ok(Self::Link),
            "new" => Ok(Self::New),
            other => Err(DomainError::InvalidDescriptor(format!(
                "unknown repository type: {other}"
            ))),
        }
    }
}

// ── TriggerType ──────────────────────────────────────────────────────────────

/// What starts the build stage of the pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerType {
    #[default]
    Commit,
    Manual,
}

impl fmt::Display for TriggerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Commit => f.write_str("commit"),
            Self::Manual => f.write_str("manual"),
        }
    }
}

// ── DeploymentKind ───────────────────────────────────────────────────────────

/// Deployment target kind written into the deploy and toolchain descriptors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeploymentKind {
    /// Cloud Foundry.
    #[default]
    #[serde(rename = "CF")]
    CloudFoundry,
    /// Kubernetes.
    #[serde(rename = "Kube")]
    Kubernetes,
}

impl fmt::Display for DeploymentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CloudFoundry => f.write_str("CF"),
            Self::Kubernetes => f.write_str("Kube"),
        }
    }
}
