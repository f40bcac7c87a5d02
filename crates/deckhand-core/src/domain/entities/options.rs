//! Per-run generation options and the Android pipeline settings.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::RepoType;

/// Options bag accompanying a descriptor on every generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Platform categories to generate for. `None` means all of them.
    pub platforms: Option<Vec<String>>,
    /// How the toolchain provisions the app repository.
    pub repo_type: RepoType,
    /// Application name override (honoured by the Android routine).
    pub app_name: Option<String>,
    /// Values embedded in the Android build, test and publish scripts.
    pub android: AndroidPipelineSettings,
}

impl GenerateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_platforms<I, S>(mut self, platforms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.platforms = Some(platforms.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_repo_type(mut self, repo_type: RepoType) -> Self {
        self.repo_type = repo_type;
        self
    }

    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    pub fn with_android(mut self, android: AndroidPipelineSettings) -> Self {
        self.android = android;
        self
    }

    /// Whether generators of `category` should run. Names match exactly.
    pub fn includes_category(&self, category: &str) -> bool {
        match &self.platforms {
            None => true,
            Some(platforms) => platforms.iter().any(|p| p == category),
        }
    }
}

/// Operational values for the Android CI scripts.
///
/// Defaults reproduce the stock IBM DevOps pipeline image layout. Every
/// field can be overridden from the `[android]` table of the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AndroidPipelineSettings {
    pub java_home: String,
    /// Working directory of the pipeline worker.
    pub workdir: String,
    pub sdk_tools_url: String,
    pub sdk_packages: Vec<String>,
    pub gpg_keyserver: String,
    pub rvm_gpg_keys: Vec<String>,
    pub rvm_installer_url: String,
    pub fastlane_lane: String,
    /// APK path relative to the checked-out project.
    pub apk_path: String,
    /// Repository the built APK is pushed to.
    pub upload_repo: String,
    /// Test project directory relative to the build checkout.
    pub test_project_dir: String,
}

impl Default for AndroidPipelineSettings {
    fn default() -> Self {
        Self {
            java_home: "/opt/IBM/java8".into(),
            workdir: "/home/pipeline".into(),
            sdk_tools_url: "https://dl.google.com/android/repository/sdk-tools-linux-3859397.zip"
                .into(),
            sdk_packages: vec!["platform-tools".into(), "platforms;android-26".into()],
            gpg_keyserver: "hkp://keys.gnupg.net".into(),
            rvm_gpg_keys: vec![
                "409B6B1796C275462A1703113804BB82D39DC0E3".into(),
                "7D2BAF1CF37B13E2069D6956105BD0E739499BDB".into(),
            ],
            rvm_installer_url: "https://get.rvm.io".into(),
            fastlane_lane: "beta".into(),
            apk_path: "./app/build/outputs/apk/app-release.apk".into(),
            upload_repo: "https://github.com/sam-almighty/appuploadrepo.git".into(),
            test_project_dir: "appium/sample-scripts/java".into(),
        }
    }
}

impl AndroidPipelineSettings {
    /// File name of the downloaded SDK archive.
    pub fn sdk_archive_name(&self) -> &str {
        last_segment(&self.sdk_tools_url)
    }

    /// File name of the built APK.
    pub fn apk_name(&self) -> &str {
        last_segment(&self.apk_path)
    }
}

fn last_segment(s: &str) -> &str {
    s.rsplit('/').next().unwrap_or(s)
}
