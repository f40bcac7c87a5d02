//! Configuration objects produced by the builder and fed to templates.
//!
//! Every type here serialises with the camelCase keys the templates bind to.
//! They carry no behaviour beyond small constructors; all decisions live in
//! `profiles.rs` and `builder.rs`.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::entities::script::ShellScript;
use crate::domain::value_objects::{DeploymentKind, RepoType, TriggerType};

// ── Manifest ──────────────────────────────────────────────────────────────────

/// Deployment manifest consumed by the runtime platform.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub buildpack: Option<String>,

    /// Start command override; `None` means the platform default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<String>,

    /// `Some(empty)` until cleanup prunes it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env: Option<BTreeMap<String, String>>,

    /// Merged into the ignore file; never rendered into the manifest.
    #[serde(skip)]
    pub ignore_paths: Vec<String>,
}

// ── Pipeline ──────────────────────────────────────────────────────────────────

/// How the pipeline's build stage produces its output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "build_type", rename_all = "lowercase")]
pub enum BuildJob {
    /// Declarative: publish the given directory as the build artifact.
    Artifact { artifact_dir: String },
    /// A custom shell script runs the build.
    Shell { script: ShellScript },
}

impl Default for BuildJob {
    fn default() -> Self {
        Self::Artifact {
            artifact_dir: "''".into(),
        }
    }
}

impl BuildJob {
    pub fn script(&self) -> Option<&ShellScript> {
        match self {
            Self::Shell { script } => Some(script),
            Self::Artifact { .. } => None,
        }
    }
}

/// Data behind the CI pipeline definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineConfig {
    pub build_job_props: BuildJob,
    pub triggers_type: TriggerType,
    /// Gates Swift-specific template branches.
    pub swift: bool,
}

/// A test or publish job. Only carries a script when the platform needs a
/// custom one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct JobConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script: Option<ShellScript>,
}

impl JobConfig {
    pub fn scripted(script: ShellScript) -> Self {
        Self {
            script: Some(script),
        }
    }
}

// ── Deployment / toolchain ────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeploymentDescriptor {
    #[serde(rename = "type")]
    pub kind: DeploymentKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolchainConfig {
    pub repo_type: RepoType,
}

// ── Ignore file ───────────────────────────────────────────────────────────────

/// Ordered glob patterns for the platform ignore file.
///
/// `into_content` consumes the list, so the newline-joined form can only be
/// produced once, after every contributor has appended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnorePatterns {
    patterns: Vec<String>,
}

impl IgnorePatterns {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.patterns.extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Newline-joined file content, or `None` when nothing was added.
    pub fn into_content(self) -> Option<String> {
        if self.patterns.is_empty() {
            None
        } else {
            Some(self.patterns.join("\n"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_build_job_is_artifact_dir() {
        let value = serde_json::to_value(BuildJob::default()).unwrap();
        assert_eq!(value, json!({"build_type": "artifact", "artifact_dir": "''"}));
    }

    #[test]
    fn shell_build_job_serializes_script_string() {
        let job = BuildJob::Shell {
            script: ShellScript::new().line("a").line("b"),
        };
        let value = serde_json::to_value(job).unwrap();
        assert_eq!(value["build_type"], "shell");
        assert_eq!(value["script"], "a\nb");
    }

    #[test]
    fn manifest_omits_unset_fields_and_ignore_paths() {
        let manifest = ManifestConfig {
            name: Some("app".into()),
            ignore_paths: vec!["tmp/*".into()],
            ..ManifestConfig::default()
        };
        assert_eq!(serde_json::to_value(manifest).unwrap(), json!({"name": "app"}));
    }

    #[test]
    fn deployment_serializes_type_key() {
        let d = DeploymentDescriptor {
            kind: DeploymentKind::CloudFoundry,
            name: Some("app".into()),
        };
        assert_eq!(
            serde_json::to_value(d).unwrap(),
            json!({"type": "CF", "name": "app"})
        );
    }

    #[test]
    fn pipeline_uses_camel_case_keys() {
        let value = serde_json::to_value(PipelineConfig::default()).unwrap();
        assert_eq!(value["triggersType"], "commit");
        assert_eq!(value["swift"], false);
        assert!(value.get("buildJobProps").is_some());
    }

    #[test]
    fn empty_ignore_patterns_have_no_content() {
        assert_eq!(IgnorePatterns::new().into_content(), None);
    }

    #[test]
    fn ignore_patterns_join_in_append_order() {
        let content = IgnorePatterns::new()
            .with(["b/*", "a/*"])
            .with(["c"])
            .into_content();
        assert_eq!(content.as_deref(), Some("b/*\na/*\nc"));
    }
}
