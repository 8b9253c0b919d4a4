// ABOUTME: Tests for runtime configuration from the environment.
// ABOUTME: Uses temp-env to isolate ENVD_RUNTIME and ENVD_RUNTIME_SOCKET.

use envd_images::runtime::{RUNTIME_ENV, RuntimeConfig, RuntimeType, SOCKET_ENV};

#[test]
fn from_env_reads_runtime_and_socket() {
    temp_env::with_vars(
        [
            (RUNTIME_ENV, Some("podman")),
            (SOCKET_ENV, Some("/run/user/1000/podman/podman.sock")),
        ],
        || {
            let config = RuntimeConfig::from_env();
            assert_eq!(config.runtime, Some(RuntimeType::Podman));
            assert_eq!(
                config.socket.as_deref(),
                Some("/run/user/1000/podman/podman.sock")
            );
        },
    );
}

#[test]
fn from_env_treats_empty_and_invalid_as_unset() {
    temp_env::with_vars(
        [(RUNTIME_ENV, Some("containerd")), (SOCKET_ENV, Some(""))],
        || {
            assert_eq!(RuntimeConfig::from_env(), RuntimeConfig::default());
        },
    );
}

#[test]
fn flags_override_environment() {
    temp_env::with_vars(
        [
            (RUNTIME_ENV, Some("podman")),
            (SOCKET_ENV, Some("/env.sock")),
        ],
        || {
            let config = RuntimeConfig::from_env().merge(RuntimeConfig {
                runtime: Some(RuntimeType::Docker),
                socket: None,
            });
            assert_eq!(config.runtime, Some(RuntimeType::Docker));
            assert_eq!(config.socket.as_deref(), Some("/env.sock"));
        },
    );
}

#[test]
fn runtime_type_deserializes_lowercase() {
    let parsed: RuntimeType = serde_json::from_str("\"docker\"").unwrap();
    assert_eq!(parsed, RuntimeType::Docker);
}
