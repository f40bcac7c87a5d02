//! End-to-end generation through the real adapters.

use std::path::Path;

use deckhand_adapters::{
    BuiltinTemplateStore, DirectoryTemplateStore, LocalFilesystem, MemoryFilesystem,
    MiniJinjaRenderer,
};
use deckhand_core::prelude::*;
use tempfile::TempDir;

fn service(fs: MemoryFilesystem) -> GenerationService {
    GenerationService::new(
        Box::new(BuiltinTemplateStore::new()),
        Box::new(MiniJinjaRenderer::new()),
        Box::new(fs),
    )
}

fn read(fs: &MemoryFilesystem, path: &str) -> String {
    fs.read_file(&Path::new("/out").join(path))
        .unwrap_or_else(|| panic!("{path} was not written"))
}

fn swift() -> ApplicationDescriptor {
    ApplicationDescriptor::from_json(
        r#"{"name": "AcmeProject", "backendPlatform": "SWIFT",
            "apprepo": "https://git.example.com/acme/app.git",
            "server": {"env": {}}}"#,
    )
    .unwrap()
}

#[test]
fn swift_manifest_is_valid_yaml_with_defaults() {
    let fs = MemoryFilesystem::new();
    service(fs.clone())
        .generate(&swift(), &GenerateOptions::default(), "/out")
        .unwrap();

    let manifest: serde_yaml::Value = serde_yaml::from_str(&read(&fs, "manifest.yml")).unwrap();
    let app = &manifest["applications"][0];
    assert_eq!(app["name"].as_str(), Some("AcmeProject"));
    assert_eq!(app["buildpack"].as_str(), Some("swift_buildpack"));
    assert_eq!(app["command"].as_str(), Some("'AcmeProject'"));
    assert_eq!(app["memory"].as_str(), Some("128M"));
    assert!(app.get("env").is_none());
}

#[test]
fn swift_writes_cfignore_and_bluemix_set() {
    let fs = MemoryFilesystem::new();
    let report = service(fs.clone())
        .generate(&swift(), &GenerateOptions::default(), "/out")
        .unwrap();

    assert_eq!(
        read(&fs, ".cfignore"),
        ".build/*\n.build-ubuntu/*\nPackages/*"
    );
    for path in [
        ".bluemix/nls/messages.json",
        ".bluemix/fastlane/README.md",
        ".bluemix/toolchain.png",
        ".bluemix/toolchain.svg",
        ".bluemix/icon.svg",
        ".bluemix/toolchain_dark.png",
        ".bluemix/locales.yml",
        ".bluemix/toolchain.yml",
        ".bluemix/deploy.json",
        ".bluemix/pipeline.yml",
    ] {
        assert!(report.contains(path), "missing {path}");
    }
    assert_eq!(
        report.kind_of(".bluemix/deploy.json"),
        Some(WriteKind::Rendered)
    );
}

#[test]
fn toolchain_keeps_service_placeholders() {
    let fs = MemoryFilesystem::new();
    service(fs.clone())
        .generate(&swift(), &GenerateOptions::default(), "/out")
        .unwrap();

    let toolchain: serde_yaml::Value =
        serde_yaml::from_str(&read(&fs, ".bluemix/toolchain.yml")).unwrap();
    let repo = &toolchain["services"]["repo"]["parameters"];
    assert_eq!(repo["repo_name"].as_str(), Some("AcmeProject-{{timestamp}}"));
    assert_eq!(repo["type"].as_str(), Some("clone"));
    assert_eq!(
        repo["repo_url"].as_str(),
        Some("https://git.example.com/acme/app.git")
    );
    assert_eq!(
        toolchain["services"]["build"]["parameters"]["configuration"]["env"]["PROD_SPACE_NAME"]
            .as_str(),
        Some("{{form.pipeline.parameters.prod-space}}")
    );
}

#[test]
fn manifest_env_with_yaml_metacharacters_survives() {
    let fs = MemoryFilesystem::new();
    let descriptor = ApplicationDescriptor::from_json(
        r#"{"name": "acme: api", "backendPlatform": "SWIFT",
            "server": {"memory": "256M", "env": {
                "DB_URL": "postgres://u:p@h/db # prod",
                "FLAG": "yes: no",
                "QUOTE": "it's \"quoted\""}}}"#,
    )
    .unwrap();
    service(fs.clone())
        .generate(&descriptor, &GenerateOptions::default(), "/out")
        .unwrap();

    let manifest: serde_yaml::Value = serde_yaml::from_str(&read(&fs, "manifest.yml")).unwrap();
    let app = &manifest["applications"][0];
    assert_eq!(app["name"].as_str(), Some("acme: api"));
    assert_eq!(app["memory"].as_str(), Some("256M"));
    assert_eq!(app["env"]["DB_URL"].as_str(), Some("postgres://u:p@h/db # prod"));
    assert_eq!(app["env"]["FLAG"].as_str(), Some("yes: no"));
    assert_eq!(app["env"]["QUOTE"].as_str(), Some("it's \"quoted\""));

    let toolchain: serde_yaml::Value =
        serde_yaml::from_str(&read(&fs, ".bluemix/toolchain.yml")).unwrap();
    assert_eq!(
        toolchain["form"]["pipeline"]["parameters"]["prod-app-name"].as_str(),
        Some("acme: api")
    );
    let pipeline: serde_yaml::Value =
        serde_yaml::from_str(&read(&fs, ".bluemix/pipeline.yml")).unwrap();
    assert!(pipeline["stages"].is_sequence());
}

#[test]
fn empty_name_generates_without_command() {
    let fs = MemoryFilesystem::new();
    let descriptor = ApplicationDescriptor::new("SWIFT").with_name("");
    service(fs.clone())
        .generate(&descriptor, &GenerateOptions::default(), "/out")
        .unwrap();

    let manifest: serde_yaml::Value = serde_yaml::from_str(&read(&fs, "manifest.yml")).unwrap();
    let app = &manifest["applications"][0];
    assert!(app.get("name").is_none());
    assert!(app.get("command").is_none());
    assert_eq!(app["buildpack"].as_str(), Some("swift_buildpack"));
}

#[test]
fn rendered_deploy_json_replaces_the_copy() {
    let fs = MemoryFilesystem::new();
    service(fs.clone())
        .generate(&swift(), &GenerateOptions::default(), "/out")
        .unwrap();

    let deploy: serde_json::Value =
        serde_json::from_str(&read(&fs, ".bluemix/deploy.json")).unwrap();
    assert!(deploy["properties"]["prod-app-name"].is_object());
}

#[test]
fn android_pipeline_carries_scripts_and_fastlane_files() {
    let fs = MemoryFilesystem::new();
    let descriptor = ApplicationDescriptor::new("ANDROID")
        .with_name("droid")
        .with_package_name("com.acme.droid");
    let options = GenerateOptions::default().with_app_name("DroidApp");
    service(fs.clone())
        .generate(&descriptor, &options, "/out")
        .unwrap();

    let pipeline: serde_yaml::Value =
        serde_yaml::from_str(&read(&fs, ".bluemix/pipeline.yml")).unwrap();
    let stages = pipeline["stages"].as_sequence().unwrap();
    let names: Vec<_> = stages.iter().filter_map(|s| s["name"].as_str()).collect();
    assert_eq!(
        names,
        vec!["Build Stage", "Test Stage", "Deploy Stage", "Publish Stage"]
    );

    let build = stages[0]["jobs"][0]["script"].as_str().unwrap();
    let install = build.find("gem install fastlane").unwrap();
    let lane = build.find("fastlane beta").unwrap();
    let push = build.find("git push $apkGitPushUrl").unwrap();
    assert!(build.starts_with("#!/bin/bash\n"));
    assert!(install < lane && lane < push);

    let manifest: serde_yaml::Value = serde_yaml::from_str(&read(&fs, "manifest.yml")).unwrap();
    assert_eq!(manifest["applications"][0]["name"].as_str(), Some("DroidApp"));

    assert!(read(&fs, "fastlane/Appfile").contains("package_name(\"com.acme.droid\")"));
    assert!(read(&fs, "fastlane/Fastfile").contains("lane :beta do"));
    assert!(!fs.exists(Path::new("/out/.cfignore")));
}

#[test]
fn excluded_category_writes_nothing() {
    let fs = MemoryFilesystem::new();
    let report = service(fs.clone())
        .generate(
            &swift(),
            &GenerateOptions::new().with_platforms(["cli"]),
            "/out",
        )
        .unwrap();

    assert!(report.is_empty());
    assert!(fs.list_files().is_empty());
}

#[test]
fn local_filesystem_receives_identical_binary_assets() {
    let out = TempDir::new().unwrap();
    let service = GenerationService::new(
        Box::new(BuiltinTemplateStore::new()),
        Box::new(MiniJinjaRenderer::new()),
        Box::new(LocalFilesystem::new()),
    );
    service
        .generate(&swift(), &GenerateOptions::default(), out.path())
        .unwrap();

    let png = std::fs::read(out.path().join(".bluemix/toolchain.png")).unwrap();
    let shipped = BuiltinTemplateStore::new().assets("toolchain.png").unwrap();
    assert_eq!(png, shipped[0].contents);
    assert!(out.path().join("manifest.yml").is_file());
}

#[test]
fn custom_template_directory_missing_asset_fails() {
    let templates = TempDir::new().unwrap();
    std::fs::write(templates.path().join("manifest_master.yml"), "x").unwrap();

    let service = GenerationService::new(
        Box::new(DirectoryTemplateStore::new(templates.path())),
        Box::new(MiniJinjaRenderer::new()),
        Box::new(MemoryFilesystem::new()),
    );
    let err = service
        .generate(&swift(), &GenerateOptions::default(), "/out")
        .unwrap_err();

    assert!(err.to_string().contains("Template not found: nls"));
}
