use std::io::Write;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn temp_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn help_lists_options() {
    cargo_bin_cmd!("tripseek")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--mode"))
        .stdout(predicate::str::contains("--catalog"))
        .stdout(predicate::str::contains("--config"));
}

#[test]
fn help_lists_modes() {
    cargo_bin_cmd!("tripseek")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("flights"))
        .stdout(predicate::str::contains("hotels"))
        .stdout(predicate::str::contains("cars"));
}

#[test]
fn version_prints_package_version() {
    cargo_bin_cmd!("tripseek")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_mode_is_rejected() {
    cargo_bin_cmd!("tripseek")
        .args(["--mode", "trains"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn missing_catalog_file_fails_before_ui() {
    cargo_bin_cmd!("tripseek")
        .args(["--catalog", "/nonexistent/tripseek/places.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn malformed_catalog_fails_before_ui() {
    let catalog = temp_file("{ not json");

    cargo_bin_cmd!("tripseek")
        .arg("--catalog")
        .arg(catalog.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid place catalog"));
}

#[test]
fn empty_catalog_is_rejected() {
    let catalog = temp_file("[]");

    cargo_bin_cmd!("tripseek")
        .arg("--catalog")
        .arg(catalog.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid place catalog"));
}

#[test]
fn malformed_config_fails_before_ui() {
    let config = temp_file("[typeahead\nblur_grace_ms = 1");

    cargo_bin_cmd!("tripseek")
        .arg("--config")
        .arg(config.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config file"));
}

#[test]
fn missing_config_file_is_an_error() {
    cargo_bin_cmd!("tripseek")
        .args(["--config", "/nonexistent/tripseek/config.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn config_catalog_path_is_used() {
    let config = temp_file("[lookup]\ncatalog = \"/nonexistent/tripseek/from-config.json\"\n");

    cargo_bin_cmd!("tripseek")
        .arg("--config")
        .arg(config.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}
