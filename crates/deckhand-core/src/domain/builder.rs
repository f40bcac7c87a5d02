//! Turns a descriptor and options into a deployment plan.

use tracing::{debug, instrument};

use crate::domain::entities::{
    descriptor::ApplicationDescriptor, options::GenerateOptions, plan::DeploymentPlan,
};
use crate::domain::error::DomainError;
use crate::domain::profiles::PlatformProfile;
use crate::domain::validation::DomainValidator;

/// Deterministic configuration builder.
///
/// Stateless: the same descriptor and options always yield the same plan.
pub struct ConfigurationBuilder;

impl ConfigurationBuilder {
    /// Build the plan for one run.
    ///
    /// The platform is resolved first, so an unsupported value fails before
    /// any configuration exists.
    #[instrument(skip_all, fields(platform = %descriptor.backend_platform))]
    pub fn build(
        descriptor: &ApplicationDescriptor,
        options: &GenerateOptions,
    ) -> Result<DeploymentPlan, DomainError> {
        DomainValidator::validate_descriptor(descriptor)?;
        let profile = PlatformProfile::resolve(descriptor, options)?;
        debug!(platform = %profile.platform(), "resolved platform profile");

        let plan = DeploymentPlan::seed(descriptor, options);
        Ok(profile.apply(plan).merge_manifest_ignores())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::deployment::BuildJob;
    use crate::domain::entities::descriptor::ServerSettings;
    use crate::domain::value_objects::{DeploymentKind, RepoType};

    fn swift(name: &str) -> ApplicationDescriptor {
        ApplicationDescriptor::new("SWIFT").with_name(name)
    }

    #[test]
    fn swift_defaults() {
        let plan = ConfigurationBuilder::build(&swift("AcmeProject"), &GenerateOptions::default())
            .unwrap();
        let manifest = plan.manifest();

        assert_eq!(manifest.name.as_deref(), Some("AcmeProject"));
        assert_eq!(manifest.buildpack.as_deref(), Some("swift_buildpack"));
        assert_eq!(manifest.command.as_deref(), Some("\"'AcmeProject'\""));
        assert_eq!(manifest.memory.as_deref(), Some("128M"));
        assert!(plan.pipeline().swift);
        assert_eq!(plan.deployment().kind, DeploymentKind::CloudFoundry);
    }

    #[test]
    fn swift_keeps_declared_memory() {
        let d = swift("AcmeProject").with_server(ServerSettings::default().with_memory("512M"));
        let plan = ConfigurationBuilder::build(&d, &GenerateOptions::default()).unwrap();
        assert_eq!(plan.manifest().memory.as_deref(), Some("512M"));
    }

    #[test]
    fn swift_without_name_has_no_command() {
        let plan = ConfigurationBuilder::build(
            &ApplicationDescriptor::new("SWIFT"),
            &GenerateOptions::default(),
        )
        .unwrap();
        assert!(plan.manifest().command.is_none());
    }

    #[test]
    fn swift_with_empty_name_has_no_command() {
        let plan = ConfigurationBuilder::build(&swift(""), &GenerateOptions::default()).unwrap();
        assert!(plan.manifest().command.is_none());
        assert_eq!(plan.manifest().buildpack.as_deref(), Some("swift_buildpack"));
    }

    #[test]
    fn empty_name_does_not_mask_unsupported_platform() {
        let d = ApplicationDescriptor::new("COBOL").with_name("");
        let err = ConfigurationBuilder::build(&d, &GenerateOptions::default()).unwrap_err();
        assert!(matches!(err, DomainError::UnsupportedPlatform { .. }));
        assert!(err.to_string().contains("COBOL"));
    }

    #[test]
    fn swift_ignore_file_content() {
        let plan = ConfigurationBuilder::build(&swift("a"), &GenerateOptions::default())
            .unwrap()
            .cleanup();
        assert_eq!(
            plan.ignore_content(),
            Some(".build/*\n.build-ubuntu/*\nPackages/*")
        );
    }

    #[test]
    fn android_has_no_ignore_file_and_no_swift_gate() {
        let d = ApplicationDescriptor::new("ANDROID").with_name("droid");
        let plan = ConfigurationBuilder::build(&d, &GenerateOptions::default())
            .unwrap()
            .cleanup();

        assert_eq!(plan.ignore_content(), None);
        assert!(!plan.pipeline().swift);
        assert!(matches!(plan.pipeline().build_job_props, BuildJob::Shell { .. }));
        assert!(plan.test_job().script.is_some());
        assert!(plan.publish_job().script.is_some());
    }

    #[test]
    fn android_app_name_overrides_descriptor_name() {
        let d = ApplicationDescriptor::new("ANDROID").with_name("from-descriptor");
        let opts = GenerateOptions::new().with_app_name("from-options");
        let plan = ConfigurationBuilder::build(&d, &opts).unwrap();

        assert_eq!(plan.manifest().name.as_deref(), Some("from-options"));
        assert_eq!(plan.name(), Some("from-options"));
    }

    #[test]
    fn app_name_is_ignored_for_swift() {
        let opts = GenerateOptions::new().with_app_name("other");
        let plan = ConfigurationBuilder::build(&swift("AcmeProject"), &opts).unwrap();
        assert_eq!(plan.manifest().name.as_deref(), Some("AcmeProject"));
    }

    #[test]
    fn repo_type_comes_from_options() {
        let opts = GenerateOptions::new().with_repo_type(RepoType::Fork);
        let plan = ConfigurationBuilder::build(&swift("a"), &opts)
            .unwrap()
            .cleanup();
        assert_eq!(plan.toolchain().repo_type, RepoType::Fork);
    }

    #[test]
    fn unsupported_platform_fails() {
        let err = ConfigurationBuilder::build(
            &ApplicationDescriptor::new("JAVA"),
            &GenerateOptions::default(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("JAVA"));
    }
}
