//! Integration tests for the `rokuctl` CLI binary.
//!
//! Argument parsing, help output, completions, and error handling run
//! without a device; device-bound commands run against a wiremock ECP stub.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `rokuctl` binary with env isolation.
///
/// Clears `ROKU` and `ROKUCTL_*` and points config directories at a
/// nonexistent path so tests never touch the user's configuration.
fn rokuctl_cmd() -> assert_cmd::Command {
    rokuctl_cmd_in("/tmp/rokuctl-cli-test-nonexistent")
}

fn rokuctl_cmd_in(config_home: &str) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("rokuctl");
    cmd.env("HOME", config_home)
        .env("XDG_CONFIG_HOME", config_home)
        .env("NO_COLOR", "1")
        .env_remove("ROKU")
        .env_remove("ROKUCTL_DEVICE")
        .env_remove("ROKUCTL_TIMEOUT")
        .env_remove("ROKUCTL_OUTPUT")
        .env_remove("ROKUCTL_DEFAULT_DEVICE")
        .env_remove("RUST_LOG");
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

/// Device stub accepting every POST.
async fn device() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    server
}

async fn posted_paths(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter(|r| r.method.as_str() == "POST")
        .map(|r| r.url.path().to_owned())
        .collect()
}

const APPS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" ?>
<apps>
  <app id="12" type="appl" subtype="ndka" version="5.1.0">Netflix</app>
  <app id="2285" type="appl" subtype="rsga" version="7.2.1">Hulu</app>
</apps>"#;

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = rokuctl_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    rokuctl_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("Roku")
            .and(predicate::str::contains("key"))
            .and(predicate::str::contains("apps"))
            .and(predicate::str::contains("discover")),
    );
}

#[test]
fn test_version_flag() {
    rokuctl_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("rokuctl"));
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    rokuctl_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_completions_zsh() {
    rokuctl_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

// ── Key table ───────────────────────────────────────────────────────

#[test]
fn test_keys_plain_lists_names() {
    let output = rokuctl_cmd().args(["-o", "plain", "keys"]).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let names: Vec<&str> = stdout.lines().collect();
    assert_eq!(names.first(), Some(&"home"));
    assert!(names.contains(&"volume_mute"));
    assert!(names.contains(&"input_hdmi4"));
    assert!(!names.contains(&"literal"));
}

#[test]
fn test_keys_json_has_tokens() {
    rokuctl_cmd()
        .args(["keys", "--output", "json-compact"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"name":"replay","token":"InstantReplay"}"#));
}

// ── Error cases ─────────────────────────────────────────────────────

#[test]
fn test_invalid_subcommand() {
    let output = rokuctl_cmd().arg("foobar").output().unwrap();
    assert!(!output.status.success());
    let text = combined_output(&output);
    assert!(
        text.contains("unrecognized") || text.contains("foobar"),
        "Expected error mentioning invalid subcommand:\n{text}"
    );
}

#[test]
fn test_unknown_key_fails_without_device() {
    let output = rokuctl_cmd().args(["key", "home", "jump"]).output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    let text = combined_output(&output);
    assert!(text.contains("jump"), "Expected key name in error:\n{text}");
}

#[test]
fn test_unknown_device_profile() {
    let output = rokuctl_cmd()
        .args(["--device", "garage", "key", "home"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(4));
    assert!(combined_output(&output).contains("garage"));
}

#[test]
fn test_invalid_output_format() {
    rokuctl_cmd()
        .args(["--output", "xml", "keys"])
        .assert()
        .failure();
}

#[test]
fn test_connection_refused_exit_code() {
    let output = rokuctl_cmd()
        .args(["--ip", "127.0.0.1", "--port", "1", "key", "home"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(7));
}

// ── Config ──────────────────────────────────────────────────────────

#[test]
fn test_config_path_points_at_toml() {
    rokuctl_cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_set_device_then_show() {
    let dir = tempfile::tempdir().unwrap();
    let home = dir.path().to_str().unwrap();

    rokuctl_cmd_in(home)
        .args(["config", "set-device", "den", "10.0.0.3", "--port", "9000"])
        .assert()
        .success();

    rokuctl_cmd_in(home)
        .args(["config", "show", "-o", "json-compact"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains(r#""default_device":"den""#)
                .and(predicate::str::contains(r#""host":"10.0.0.3""#))
                .and(predicate::str::contains(r#""port":9000"#)),
        );
}

/// The config file `rokuctl` uses under `home`.
fn config_file_in(home: &str) -> std::path::PathBuf {
    let output = rokuctl_cmd_in(home).args(["config", "path"]).output().unwrap();
    assert!(output.status.success());
    std::path::PathBuf::from(String::from_utf8(output.stdout).unwrap().trim())
}

#[test]
fn test_set_device_leaves_broken_config_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let home = dir.path().to_str().unwrap();
    let path = config_file_in(home);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();

    let original = r#"default_device = "den"

[devices.den]
host = "10.0.0.3"

[devices.attic]
host = "10.0.0.4"
timeout = "ten"

[devices.kitchen]
host = "10.0.0.5"
"#;
    std::fs::write(&path, original).unwrap();

    let output = rokuctl_cmd_in(home)
        .args(["config", "set-device", "office", "10.0.0.9"])
        .output()
        .unwrap();
    assert!(!output.status.success(), "{}", combined_output(&output));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), original);
}

#[test]
fn test_set_device_does_not_persist_env_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let home = dir.path().to_str().unwrap();

    rokuctl_cmd_in(home)
        .env("ROKUCTL_DEFAULTS__TIMEOUT", "30")
        .env("ROKUCTL_DEFAULT_DEVICE", "attic")
        .args(["config", "set-device", "den", "10.0.0.3"])
        .assert()
        .success();

    let saved = std::fs::read_to_string(config_file_in(home)).unwrap();
    assert!(saved.contains("timeout = 5"), "{saved}");
    assert!(!saved.contains("timeout = 30"), "{saved}");
    assert!(saved.contains(r#"default_device = "den""#), "{saved}");
    assert!(!saved.contains("attic"), "{saved}");
}

#[test]
fn test_zero_timeout_is_a_usage_error() {
    let output = rokuctl_cmd()
        .args(["--ip", "127.0.0.1", "--timeout", "0", "key", "home"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("timeout"));
}

// ── Device-bound commands ───────────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_key_presses_in_order() {
    let server = device().await;
    let port = server.address().port().to_string();

    rokuctl_cmd()
        .args(["--ip", "127.0.0.1", "--port", &port, "key", "down", "down", "select"])
        .assert()
        .success();

    assert_eq!(
        posted_paths(&server).await,
        ["/keypress/Down", "/keypress/Down", "/keypress/Select"]
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_roku_env_supplies_host() {
    let server = device().await;
    let port = server.address().port().to_string();

    rokuctl_cmd()
        .env("ROKU", "127.0.0.1")
        .args(["--port", &port, "type", "a b"])
        .assert()
        .success();

    assert_eq!(
        posted_paths(&server).await,
        ["/keypress/Lit_a", "/keypress/Lit_+", "/keypress/Lit_b"]
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_hold_and_release() {
    let server = device().await;
    let port = server.address().port().to_string();

    for verb in ["down", "up"] {
        rokuctl_cmd()
            .args(["--ip", "127.0.0.1", "--port", &port, verb, "right"])
            .assert()
            .success();
    }

    assert_eq!(
        posted_paths(&server).await,
        ["/keydown/Right", "/keyup/Right"]
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_apps_launch_by_name_match() {
    let server = device().await;
    Mock::given(method("GET"))
        .and(path("/query/apps"))
        .respond_with(ResponseTemplate::new(200).set_body_string(APPS_XML))
        .mount(&server)
        .await;
    let port = server.address().port().to_string();

    rokuctl_cmd()
        .args(["--ip", "127.0.0.1", "--port", &port, "apps", "launch", "FLIX"])
        .assert()
        .success();

    assert_eq!(posted_paths(&server).await, ["/launch/12"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_apps_launch_not_found() {
    let server = device().await;
    Mock::given(method("GET"))
        .and(path("/query/apps"))
        .respond_with(ResponseTemplate::new(200).set_body_string(APPS_XML))
        .mount(&server)
        .await;
    let port = server.address().port().to_string();

    let output = rokuctl_cmd()
        .args(["--ip", "127.0.0.1", "--port", &port, "apps", "launch", "youtube"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(4));
    assert!(posted_paths(&server).await.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_apps_list_plain_ids() {
    let server = device().await;
    Mock::given(method("GET"))
        .and(path("/query/apps"))
        .respond_with(ResponseTemplate::new(200).set_body_string(APPS_XML))
        .mount(&server)
        .await;
    let port = server.address().port().to_string();

    rokuctl_cmd()
        .args(["--ip", "127.0.0.1", "--port", &port, "-o", "plain", "apps", "list"])
        .assert()
        .success()
        .stdout("12\n2285\n");
}
