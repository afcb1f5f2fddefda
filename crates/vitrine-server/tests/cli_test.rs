//! Smoke tests for the `vitrine` binary.
//!
//! These only exercise argument parsing and startup validation; no
//! listener is bound and no CMS is contacted.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

/// Build a command for the `vitrine` binary with env isolation.
fn vitrine_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("vitrine");
    cmd.env_remove("VITRINE_CONFIG")
        .env_remove("VITRINE_SPACE_ID")
        .env_remove("VITRINE_ENVIRONMENT")
        .env_remove("VITRINE_DELIVERY_TOKEN")
        .env_remove("VITRINE_PREVIEW_TOKEN")
        .env_remove("VITRINE_PREVIEW_DEFAULT")
        .env_remove("VITRINE_HEADER_ID")
        .env_remove("VITRINE_FOOTER_ID")
        .env_remove("VITRINE_SITE_URL")
        .env_remove("VITRINE_ANALYTICS_ID")
        .env_remove("VITRINE_TIMEOUT_SECS")
        .env_remove("VITRINE_LISTEN_ADDR")
        .env_remove("CONTENTFUL_SPACE_ID")
        .env_remove("CONTENTFUL_ENVIRONMENT")
        .env_remove("CONTENTFUL_ACCESS_TOKEN")
        .env_remove("CONTENTFUL_PREVIEW_ACCESS_TOKEN");
    cmd
}

#[test]
fn test_help_flag() {
    vitrine_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("Content gateway")
            .and(predicate::str::contains("--config"))
            .and(predicate::str::contains("--listen")),
    );
}

#[test]
fn test_version_flag() {
    vitrine_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("vitrine"));
}

#[test]
fn test_unknown_flag_is_rejected() {
    vitrine_cmd()
        .arg("--frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected").or(predicate::str::contains("error")));
}

#[test]
fn test_missing_config_fails_before_binding() {
    // With no env vars and no config file the server must refuse to
    // start and name the missing field.
    let dir = tempfile::tempdir().unwrap();
    vitrine_cmd()
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("Configuration failed to load")
                .and(predicate::str::contains("space_id")),
        );
}

#[test]
fn test_invalid_listen_override_is_rejected() {
    vitrine_cmd()
        .args(["--listen", "not-an-addr"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value").or(predicate::str::contains("listen")));
}
