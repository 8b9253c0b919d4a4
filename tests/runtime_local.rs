// ABOUTME: Integration tests for container runtime operations.
// ABOUTME: Tests run against local Docker/Podman daemon and skip when none is found.

use envd_images::images::{RemoveImageError, list_images, remove_image};
use envd_images::runtime::{
    BollardRuntime, ImageError, LocalConnector, RuntimeConfig, RuntimeHealth, detect_local,
};

/// Get a reachable local runtime, if any.
async fn local_runtime() -> Option<BollardRuntime> {
    let info = detect_local().ok()?;
    let runtime = BollardRuntime::connect(&info).ok()?;
    runtime.ping().await.ok()?;
    Some(runtime)
}

/// Skip test if no local runtime available.
macro_rules! require_runtime {
    () => {
        match local_runtime().await {
            Some(rt) => rt,
            None => {
                eprintln!("Skipping test: no local container runtime found");
                return;
            }
        }
    };
}

// =============================================================================
// Health Tests
// =============================================================================

#[tokio::test]
async fn runtime_ping() {
    let runtime = require_runtime!();
    runtime.ping().await.expect("ping should succeed");
}

// =============================================================================
// Image Tests
// =============================================================================

#[tokio::test]
async fn list_images_filters_by_name() {
    let _runtime = require_runtime!();
    let connector = LocalConnector::new(RuntimeConfig::default());

    let images = list_images(&connector, Some("envd-test-image-that-does-not-exist"))
        .await
        .expect("list should succeed");

    assert!(images.is_empty(), "filter should match nothing");
}

#[tokio::test]
async fn removing_missing_image_is_an_error() {
    let _runtime = require_runtime!();
    let connector = LocalConnector::new(RuntimeConfig::default());

    let err = remove_image(&connector, "envd-test-image-that-does-not-exist", Some("v999"))
        .await
        .expect_err("missing image should fail");

    match err {
        RemoveImageError::Removal { reference, source } => {
            assert_eq!(reference, "envd-test-image-that-does-not-exist:v999");
            assert!(
                matches!(source, ImageError::NotFound(_)),
                "expected NotFound, got: {source}"
            );
        }
        other => panic!("expected Removal error, got: {other}"),
    }
}
