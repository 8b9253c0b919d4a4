// ABOUTME: Integration tests for the envd CLI commands.
// ABOUTME: Validates --help output and failures that happen before or at runtime connection.

use assert_cmd::Command;
use predicates::prelude::*;

fn envd_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("envd"));
    cmd.env_remove("ENVD_RUNTIME")
        .env_remove("ENVD_RUNTIME_SOCKET")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_shows_commands() {
    envd_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("images"));
}

#[test]
fn images_help_shows_subcommands() {
    envd_cmd()
        .args(["images", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("remove"))
        .stdout(predicate::str::contains("list"));
}

#[test]
fn remove_without_image_fails_before_connecting() {
    envd_cmd()
        .args(["images", "remove"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("image name is required"))
        .stderr(predicate::str::contains("runtime").not());
}

#[test]
fn remove_with_empty_image_fails() {
    envd_cmd()
        .args(["images", "rm", "--image", "", "--tag", "v1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("image name is required"));
}

#[test]
fn remove_validation_error_as_json() {
    envd_cmd()
        .args(["--json", "images", "r", "-t", "v1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("\"event\":\"error\""))
        .stderr(predicate::str::contains("image name is required"));
}

#[test]
fn unreachable_socket_reports_connection_failure() {
    envd_cmd()
        .args([
            "--runtime",
            "docker",
            "--socket",
            "/nonexistent/envd-test/docker.sock",
            "images",
            "remove",
            "-i",
            "myimg",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("runtime connection failed"));
}

#[test]
fn socket_from_environment_is_used() {
    envd_cmd()
        .env("ENVD_RUNTIME", "podman")
        .env("ENVD_RUNTIME_SOCKET", "/nonexistent/envd-test/podman.sock")
        .args(["images", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("runtime connection failed"));
}

#[test]
fn unknown_runtime_is_rejected() {
    envd_cmd()
        .args(["--runtime", "containerd", "images", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown runtime"));
}

#[test]
fn quiet_and_json_conflict() {
    envd_cmd()
        .args(["--quiet", "--json", "images", "list"])
        .assert()
        .failure();
}
