//! Integration tests for the `dnac-pnp` binary.
//!
//! Argument parsing, help, completions, config errors and exit codes, plus
//! two end-to-end runs against a wiremock controller.
#![allow(clippy::unwrap_used)]

use std::io::Write;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `dnac-pnp` binary with env isolation.
///
/// Points config directories at a nonexistent path and clears every
/// variable the binary reads, so tests never touch the real configuration
/// or keyring.
fn dnac_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("dnac-pnp");
    cmd.env("HOME", "/tmp/dnac-pnp-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/dnac-pnp-cli-test-nonexistent")
        .env("DNAC_PASSWORD", "secret")
        .env_remove("DNAC_PNP_CONFIG")
        .env_remove("DNAC_PNP_DNAC__HOST")
        .env_remove("DNAC_PNP_DNAC__USERNAME")
        .env_remove("DNAC_PNP_DNAC__PASSWORD")
        .env_remove("DNAC_PNP_DNAC__TIMEOUT")
        .env_remove("DNAC_PNP_COMMON__BASE_DIRECTORY")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn write_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn config_for(host: &str) -> tempfile::NamedTempFile {
    write_file(&format!(
        "[dnac]\nhost = \"{host}\"\nusername = \"admin\"\npassword = \"plain\"\n\n\
         [common]\nbase_directory = \"/srv/pnp\"\n"
    ))
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

/// Run the binary off the async runtime so the mock server keeps serving.
async fn run(mut cmd: assert_cmd::Command) -> std::process::Output {
    tokio::task::spawn_blocking(move || cmd.output().unwrap())
        .await
        .unwrap()
}

async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/dna/system/api/v1/auth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Token": "abc123"})))
        .expect(1)
        .mount(server)
        .await;
}

const SITES: &str = r"
sites:
  - emea:
      type: area
      name: EMEA
      parent: Global
  - hq:
      type: building
      name: HQ
      area_name: EMEA
      area_parent: Global
      latitude: 52.52
      longitude: 13.405
      address: Alexanderplatz 1, Berlin
";

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = dnac_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    dnac_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("PnP")
            .and(predicate::str::contains("import"))
            .and(predicate::str::contains("sites"))
            .and(predicate::str::contains("completions")),
    );
}

#[test]
fn test_version_flag() {
    dnac_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("dnac-pnp"));
}

#[test]
fn test_completions_bash() {
    dnac_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dnac-pnp"));
}

// ── Config ──────────────────────────────────────────────────────────

#[test]
fn test_config_path_honours_flag() {
    dnac_cmd()
        .args(["--config", "/etc/dnac-pnp/custom.toml", "config", "path"])
        .assert()
        .success()
        .stdout("/etc/dnac-pnp/custom.toml\n");
}

#[test]
fn test_config_show_masks_password() {
    let config = config_for("10.0.0.1");
    dnac_cmd()
        .arg("--config")
        .arg(config.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("host = \"10.0.0.1\"")
                .and(predicate::str::contains("password = \"****\""))
                .and(predicate::str::contains("plain").not()),
        );
}

#[test]
fn test_missing_config_fails_with_config_exit_code() {
    let sites = write_file(SITES);
    dnac_cmd()
        .args(["--config", "/tmp/dnac-pnp-cli-test-nonexistent/config.toml"])
        .args(["sites", "add"])
        .arg(sites.path())
        .assert()
        .code(9)
        .stderr(predicate::str::contains("dnac.host"));
}

// ── Usage errors ────────────────────────────────────────────────────

#[test]
fn test_unknown_import_mode_is_usage_error() {
    dnac_cmd()
        .args(["import", "batch"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown import mode 'batch'"));
}

#[test]
fn test_single_import_requires_device_flags() {
    dnac_cmd()
        .args(["import", "single", "--serial", "FOC1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--pid").and(predicate::str::contains("required")));
}

#[test]
fn test_bulk_import_requires_devices_file() {
    dnac_cmd()
        .args(["import", "bulk"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--devices-file"));
}

#[test]
fn test_bulk_import_rejects_single_device_flags() {
    let devices = write_file("devices:\n  - serial_number: FOC1\n    pid: C9300-24P\n    name: a1\n");
    dnac_cmd()
        .args(["import", "bulk", "--serial", "FOC1", "--devices-file"])
        .arg(devices.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_single_import_rejects_devices_file() {
    dnac_cmd()
        .args(["import", "single", "--serial", "FOC1", "--pid", "C9300-24P"])
        .args(["--name", "access-01", "--devices-file", "devices.yaml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot be used with"));
}

// ── Site definitions ────────────────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_invalid_site_type_stops_after_earlier_sites() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    Mock::given(method("POST"))
        .and(path("/dna/intent/api/v1/site"))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({"status": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for(&server.uri());
    let sites = write_file(
        "sites:\n  - emea:\n      type: area\n      name: EMEA\n      parent: Global\n  \
         - c:\n      type: campus\n      name: C\n      parent: Global\n",
    );

    let mut cmd = dnac_cmd();
    cmd.arg("--config")
        .arg(config.path())
        .args(["sites", "add"])
        .arg(sites.path());
    let output = run(cmd).await;

    assert_eq!(output.status.code(), Some(6), "{}", combined_output(&output));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[emea]"), "{stdout}");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("campus"), "{stderr}");
}

// ── End-to-end against a mock controller ────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_sites_add_reports_every_site() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    Mock::given(method("POST"))
        .and(path("/dna/intent/api/v1/site"))
        .and(header("x-auth-token", "abc123"))
        .and(header("__runsync", "true"))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({"status": "ok"})))
        .expect(2)
        .mount(&server)
        .await;

    let config = config_for(&server.uri());
    let sites = write_file(SITES);

    let mut cmd = dnac_cmd();
    cmd.arg("--config")
        .arg(config.path())
        .args(["sites", "add"])
        .arg(sites.path());
    let output = run(cmd).await;

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "{}", combined_output(&output));
    assert!(stdout.contains("Token received!"), "{stdout}");
    let emea = stdout.find("[emea]").unwrap();
    let hq = stdout.find("[hq]").unwrap();
    assert!(emea < hq, "sites reported out of order:\n{stdout}");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_single_import_points_at_catalog() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    Mock::given(method("POST"))
        .and(path("/dna/intent/api/v1/onboarding/pnp-device"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "pnp-1"})))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for(&server.uri());

    let mut cmd = dnac_cmd();
    cmd.arg("--config")
        .arg(config.path())
        .args(["import", "single"])
        .args(["--serial", "FOC1", "--pid", "C9300-24P", "--name", "access-01"]);
    let output = run(cmd).await;

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "{}", combined_output(&output));
    assert!(
        stdout.contains("Looking for device catalog in [/srv/pnp/catalog/DeviceImport.csv]"),
        "{stdout}"
    );
}
