//! The application descriptor: the caller's description of what to deploy.
//!
//! The descriptor is input only. The configuration builder borrows it and
//! never mutates it. `backend_platform` is kept as the raw string so an
//! invalid value can be echoed back verbatim in the error.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Description of the target application.
///
/// Field names follow the camelCase JSON payload produced by project
/// scaffolders. Keys this generator does not use (services, frameworks, ...)
/// are accepted and ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDescriptor {
    /// Application identifier.
    #[serde(default)]
    pub name: Option<String>,

    /// Requested backend platform, e.g. `SWIFT`.
    #[serde(default)]
    pub backend_platform: String,

    /// Application repository URL.
    #[serde(default)]
    pub apprepo: Option<String>,

    /// Test repository URL.
    #[serde(default)]
    pub testrepo: Option<String>,

    /// Android package name.
    #[serde(default)]
    pub packagename: Option<String>,

    /// Runtime settings for the deployed server.
    #[serde(default)]
    pub server: Option<ServerSettings>,
}

/// Runtime settings carried by the descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Memory limit with unit suffix, e.g. `256M`.
    #[serde(default)]
    pub memory: Option<String>,

    /// Environment variables for the deployed application.
    #[serde(default)]
    pub env: BTreeMap<String, String>,
}

impl ApplicationDescriptor {
    /// Start a descriptor for the given platform.
    pub fn new(backend_platform: impl Into<String>) -> Self {
        Self {
            backend_platform: backend_platform.into(),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_repos(mut self, apprepo: impl Into<String>, testrepo: impl Into<String>) -> Self {
        self.apprepo = Some(apprepo.into());
        self.testrepo = Some(testrepo.into());
        self
    }

    pub fn with_package_name(mut self, packagename: impl Into<String>) -> Self {
        self.packagename = Some(packagename.into());
        self
    }

    pub fn with_server(mut self, server: ServerSettings) -> Self {
        self.server = Some(server);
        self
    }

    /// Parse a JSON descriptor.
    pub fn from_json(content: &str) -> Result<Self, DomainError> {
        serde_json::from_str(content)
            .map_err(|e| DomainError::InvalidDescriptor(format!("invalid JSON: {e}")))
    }

    /// Parse a YAML descriptor.
    pub fn from_yaml(content: &str) -> Result<Self, DomainError> {
        serde_yaml::from_str(content)
            .map_err(|e| DomainError::InvalidDescriptor(format!("invalid YAML: {e}")))
    }

    /// Parse as JSON first, falling back to YAML.
    pub fn from_str_auto(content: &str) -> Result<Self, DomainError> {
        match Self::from_json(content) {
            Ok(descriptor) => Ok(descriptor),
            Err(_) => Self::from_yaml(content),
        }
    }

    /// Declared memory limit, if any.
    pub fn memory(&self) -> Option<&str> {
        self.server.as_ref().and_then(|s| s.memory.as_deref())
    }

    /// Declared environment variables (empty when no server block).
    pub fn env(&self) -> BTreeMap<String, String> {
        self.server
            .as_ref()
            .map(|s| s.env.clone())
            .unwrap_or_default()
    }
}

impl ServerSettings {
    pub fn with_memory(mut self, memory: impl Into<String>) -> Self {
        self.memory = Some(memory.into());
        self
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_camel_case_json() {
        let d = ApplicationDescriptor::from_json(
            r#"{
                "name": "AcmeProject",
                "backendPlatform": "SWIFT",
                "apprepo": "https://example.com/app.git",
                "server": { "memory": "256M", "env": { "A": "1" } },
                "services": { "cloudant": [] }
            }"#,
        )
        .unwrap();

        assert_eq!(d.name.as_deref(), Some("AcmeProject"));
        assert_eq!(d.backend_platform, "SWIFT");
        assert_eq!(d.memory(), Some("256M"));
        assert_eq!(d.env().get("A").map(String::as_str), Some("1"));
        assert!(d.testrepo.is_none());
    }

    #[test]
    fn auto_falls_back_to_yaml() {
        let d = ApplicationDescriptor::from_str_auto(
            "name: AcmeProject\nbackendPlatform: ANDROID\npackagename: com.acme.app\n",
        )
        .unwrap();

        assert_eq!(d.backend_platform, "ANDROID");
        assert_eq!(d.packagename.as_deref(), Some("com.acme.app"));
    }

    #[test]
    fn garbage_is_invalid_descriptor() {
        let err = ApplicationDescriptor::from_str_auto("[1, 2").unwrap_err();
        assert!(matches!(err, DomainError::InvalidDescriptor(_)));
    }

    #[test]
    fn missing_server_means_no_memory_and_empty_env() {
        let d = ApplicationDescriptor::new("SWIFT");
        assert_eq!(d.memory(), None);
        assert!(d.env().is_empty());
    }
}
