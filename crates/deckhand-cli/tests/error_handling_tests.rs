//! Exit codes and error messages.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

fn deckhand(home: &Path) -> Command {
    let mut cmd = cargo::cargo_bin_cmd!("deckhand");
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("NO_COLOR", "1")
        .current_dir(home);
    cmd
}

#[test]
fn unsupported_platform_names_the_value() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("out");

    deckhand(tmp.path())
        .args(["generate", "--bluemix", r#"{"name":"svc","backendPlatform":"NODE"}"#, "-o"])
        .arg(&out)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("NODE"))
        .stderr(predicate::str::contains("SWIFT"))
        .stderr(predicate::str::contains("Suggestions:"));

    assert!(!out.join("manifest.yml").exists());
}

#[test]
fn missing_backend_platform_is_a_user_error() {
    let tmp = TempDir::new().unwrap();
    deckhand(tmp.path())
        .args(["generate", "--dry-run", "--bluemix", r#"{"name":"svc"}"#])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("backendPlatform"));
}

#[test]
fn missing_descriptor_file() {
    let tmp = TempDir::new().unwrap();
    deckhand(tmp.path())
        .args(["generate", "--descriptor", "nope.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("nope.json"));
}

#[test]
fn malformed_inline_descriptor() {
    let tmp = TempDir::new().unwrap();
    deckhand(tmp.path())
        .args(["generate", "--bluemix", "{broken"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--bluemix"));
}

#[test]
fn conflicting_descriptor_sources() {
    let tmp = TempDir::new().unwrap();
    deckhand(tmp.path())
        .args(["generate", "--descriptor", "a.json", "--bluemix", "{}"])
        .assert()
        .code(2);
}

#[test]
fn unknown_repo_type_is_rejected_by_the_parser() {
    let tmp = TempDir::new().unwrap();
    deckhand(tmp.path())
        .args(["generate", "--bluemix", "{}", "--repo-type", "mirror"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("mirror"));
}

#[test]
fn template_directory_that_does_not_exist() {
    let tmp = TempDir::new().unwrap();
    deckhand(tmp.path())
        .args(["generate", "--bluemix", r#"{"backendPlatform":"SWIFT"}"#])
        .args(["--templates", "no-such-dir"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no-such-dir"));
}

#[test]
fn missing_explicit_config_file() {
    let tmp = TempDir::new().unwrap();
    deckhand(tmp.path())
        .args(["-c", "absent.toml", "platforms"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn malformed_config_file() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("bad.toml");
    fs::write(&config, "[generate\n").unwrap();

    deckhand(tmp.path())
        .arg("-c")
        .arg(&config)
        .arg("platforms")
        .assert()
        .code(4);
}

#[test]
fn unknown_config_key() {
    let tmp = TempDir::new().unwrap();
    deckhand(tmp.path())
        .args(["config", "get", "generate.colour"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("generate.colour"));
}

#[test]
fn verbose_shows_no_hint() {
    let tmp = TempDir::new().unwrap();
    deckhand(tmp.path())
        .args(["-v", "generate", "--bluemix", r#"{"backendPlatform":"JAVA"}"#, "--dry-run"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("JAVA"))
        .stderr(predicate::str::contains("Use -v / --verbose").not());
}
