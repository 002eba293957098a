//! Integration tests for the Facetlink HTTP API.
//!
//! Uses axum-test to test the API handlers without starting a real server.

// Allow unwrap and panic in tests - these are standard for test code
// Allow holding MutexGuard across await in auth tests - tests are serialized
// intentionally to avoid env var conflicts
#![allow(clippy::unwrap_used, clippy::panic, clippy::await_holding_lock)]

use axum::http::{HeaderValue, header};
use axum_test::TestServer;
use facetlink::api::{
    AppState, ConfigResponse, HealthResponse, OptionsResponse, ResolveResponse, SelectedResponse,
    create_router,
};
use facetlink::config::FacetRegistry;
use facetlink_core::LinkKind;
use serde_json::json;
use std::sync::Mutex;

/// Mutex to serialize auth tests since they modify env vars.
static AUTH_TEST_MUTEX: Mutex<()> = Mutex::new(());

/// TOML used by the configured-server tests.
const REGISTRY_TOML: &str = r#"
[default]
selecting_selected_option_removes_filter = true

[facets.color]
single_option_mode = true
options_limit = 2
"#;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Guard wrapper that holds the mutex and ensures cleanup on drop.
struct TestGuard {
    _guard: std::sync::MutexGuard<'static, ()>,
}

impl Drop for TestGuard {
    fn drop(&mut self) {
        // SAFETY: Tests run sequentially under AUTH_TEST_MUTEX, so no concurrent env access.
        unsafe { std::env::remove_var("FACETLINK_API_KEY") };
    }
}

/// Create a test server with an all-default registry.
/// Returns a guard that must be kept alive during the test.
fn create_test_server() -> (TestServer, TestGuard) {
    let guard = AUTH_TEST_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    // SAFETY: Tests run sequentially under AUTH_TEST_MUTEX, so no concurrent env access.
    unsafe { std::env::remove_var("FACETLINK_API_KEY") };
    let state = AppState::new(FacetRegistry::default());
    let router = create_router(state);
    (
        TestServer::new(router).unwrap(),
        TestGuard { _guard: guard },
    )
}

/// Create a test server with a populated facet registry.
/// Returns a guard that must be kept alive during the test.
fn create_configured_test_server() -> (TestServer, TestGuard) {
    let guard = AUTH_TEST_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    // SAFETY: Tests run sequentially under AUTH_TEST_MUTEX, so no concurrent env access.
    unsafe { std::env::remove_var("FACETLINK_API_KEY") };

    let registry = FacetRegistry::from_toml(REGISTRY_TOML).unwrap();
    let state = AppState::new(registry);
    let router = create_router(state);
    (
        TestServer::new(router).unwrap(),
        TestGuard { _guard: guard },
    )
}

// =============================================================================
// HEALTH ENDPOINT TESTS
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let (server, _guard) = create_test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let health: HealthResponse = response.json();
    assert_eq!(health.status, "ok");
    assert!(!health.version.is_empty());
}

#[tokio::test]
async fn test_health_returns_correct_version() {
    let (server, _guard) = create_test_server();

    let response = server.get("/health").await;
    let health: HealthResponse = response.json();

    // Version should match Cargo.toml
    assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
}

// =============================================================================
// CONFIG ENDPOINT TESTS
// =============================================================================

#[tokio::test]
async fn test_config_defaults() {
    let (server, _guard) = create_test_server();

    let response = server.get("/config").await;

    response.assert_status_ok();
    let config: ConfigResponse = response.json();
    assert!(!config.default.config.single_option_mode);
    assert!(config.facets.is_empty());
}

#[tokio::test]
async fn test_config_populated_registry() {
    let (server, _guard) = create_configured_test_server();

    let response = server.get("/config").await;

    response.assert_status_ok();
    let config: ConfigResponse = response.json();
    assert!(config.default.config.selecting_selected_option_removes_filter);

    let color = config.facets.get("color").expect("color entry");
    assert!(color.config.single_option_mode);
    assert_eq!(color.options_limit, 2);
}

// =============================================================================
// SELECTED ENDPOINT TESTS
// =============================================================================

#[tokio::test]
async fn test_selected_true_for_active_filter() {
    let (server, _guard) = create_test_server();

    let response = server
        .post("/selected")
        .json(&json!({
            "filters": ["color%3Ared"],
            "facet": "color",
            "value": "red",
        }))
        .await;

    response.assert_status_ok();
    let selected: SelectedResponse = response.json();
    assert!(selected.success);
    assert!(selected.selected);
}

#[tokio::test]
async fn test_selected_false_for_other_value() {
    let (server, _guard) = create_test_server();

    let response = server
        .post("/selected")
        .json(&json!({
            "filters": ["color%3Ared"],
            "facet": "color",
            "value": "blue",
        }))
        .await;

    response.assert_status_ok();
    let selected: SelectedResponse = response.json();
    assert!(!selected.selected);
}

#[tokio::test]
async fn test_selected_empty_facet_rejected() {
    let (server, _guard) = create_test_server();

    let response = server
        .post("/selected")
        .json(&json!({
            "filters": [],
            "facet": "",
            "value": "red",
        }))
        .await;

    response.assert_status_bad_request();
    let selected: SelectedResponse = response.json();
    assert!(!selected.success);
    assert!(selected.error.is_some());
}

// =============================================================================
// RESOLVE ENDPOINT TESTS
// =============================================================================

#[tokio::test]
async fn test_resolve_default_config_adds() {
    let (server, _guard) = create_test_server();

    let response = server
        .post("/resolve")
        .json(&json!({
            "filters": ["color%3Ared"],
            "facet": "size",
            "value": "M",
        }))
        .await;

    response.assert_status_ok();
    let resolved: ResolveResponse = response.json();
    assert!(resolved.success);
    assert_eq!(resolved.kind, Some(LinkKind::Add));
    assert_eq!(resolved.filters, vec!["color%3Ared", "size%3AM"]);
}

#[tokio::test]
async fn test_resolve_uses_registry_entry() {
    let (server, _guard) = create_configured_test_server();

    // color is configured single_option_mode, so resolution replaces
    let response = server
        .post("/resolve")
        .json(&json!({
            "filters": ["color%3Ared"],
            "facet": "color",
            "value": "blue",
        }))
        .await;

    response.assert_status_ok();
    let resolved: ResolveResponse = response.json();
    assert_eq!(resolved.kind, Some(LinkKind::Replace));
    assert_eq!(resolved.filters, vec!["color%3Ablue"]);
}

#[tokio::test]
async fn test_resolve_registry_default_section_applies() {
    let (server, _guard) = create_configured_test_server();

    // size has no entry; the [default] toggle flag makes re-selection remove
    let response = server
        .post("/resolve")
        .json(&json!({
            "filters": ["size%3AM"],
            "facet": "size",
            "value": "M",
        }))
        .await;

    response.assert_status_ok();
    let resolved: ResolveResponse = response.json();
    assert_eq!(resolved.kind, Some(LinkKind::Remove));
    assert!(resolved.filters.is_empty());
}

#[tokio::test]
async fn test_resolve_inline_config_wins() {
    let (server, _guard) = create_configured_test_server();

    // Explicit request config overrides the configured replace mode
    let response = server
        .post("/resolve")
        .json(&json!({
            "filters": ["color%3Ared"],
            "facet": "color",
            "value": "blue",
            "config": {
                "single_facet_mode": true,
            },
        }))
        .await;

    response.assert_status_ok();
    let resolved: ResolveResponse = response.json();
    assert_eq!(resolved.kind, Some(LinkKind::Add));
    assert_eq!(resolved.filters, vec!["color%3Ablue"]);
}

#[tokio::test]
async fn test_resolve_too_many_filters_rejected() {
    let (server, _guard) = create_test_server();

    let filters: Vec<String> = (0..1001).map(|i| format!("f{i}%3Av")).collect();
    let response = server
        .post("/resolve")
        .json(&json!({
            "filters": filters,
            "facet": "color",
            "value": "red",
        }))
        .await;

    response.assert_status_bad_request();
    let resolved: ResolveResponse = response.json();
    assert!(!resolved.success);
}

// =============================================================================
// OPTIONS ENDPOINT TESTS
// =============================================================================

#[tokio::test]
async fn test_options_shaping_with_registry_limit() {
    let (server, _guard) = create_configured_test_server();

    let response = server
        .post("/options")
        .json(&json!({
            "filters": ["color%3Ared"],
            "facet": "color",
            "options": [
                {"value": "red", "count": 10},
                {"value": "blue", "count": 5},
                {"value": "green", "count": 1},
            ],
        }))
        .await;

    response.assert_status_ok();
    let shaped: OptionsResponse = response.json();
    assert!(shaped.success);
    assert_eq!(shaped.options.len(), 3);

    // color is single_option_mode: every option resolves to a replace
    assert!(shaped.options.iter().all(|o| o.kind == LinkKind::Replace));
    assert!(shaped.options[0].selected);

    // options_limit = 2 in the registry flags the third option hidden
    assert!(!shaped.options[1].hidden);
    assert!(shaped.options[2].hidden);
}

#[tokio::test]
async fn test_options_explicit_limit_overrides() {
    let (server, _guard) = create_configured_test_server();

    let response = server
        .post("/options")
        .json(&json!({
            "facet": "color",
            "options": [
                {"value": "red", "count": 10},
                {"value": "blue", "count": 5},
                {"value": "green", "count": 1},
            ],
            "limit": 10,
        }))
        .await;

    response.assert_status_ok();
    let shaped: OptionsResponse = response.json();
    assert!(shaped.options.iter().all(|o| !o.hidden));
}

#[tokio::test]
async fn test_options_empty_facet_rejected() {
    let (server, _guard) = create_test_server();

    let response = server
        .post("/options")
        .json(&json!({
            "facet": "",
            "options": [],
        }))
        .await;

    response.assert_status_bad_request();
    let shaped: OptionsResponse = response.json();
    assert!(!shaped.success);
}

// =============================================================================
// AUTHENTICATION TESTS
// =============================================================================

/// Create a test server with API key authentication enabled.
///
/// The env var must be set BEFORE router creation; the auth layer is
/// only attached when a key is configured at startup.
fn create_auth_test_server(key: &str) -> (TestServer, TestGuard) {
    let guard = AUTH_TEST_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    // SAFETY: Tests run sequentially under AUTH_TEST_MUTEX, so no concurrent env access.
    unsafe { std::env::set_var("FACETLINK_API_KEY", key) };
    let state = AppState::new(FacetRegistry::default());
    let router = create_router(state);
    (
        TestServer::new(router).unwrap(),
        TestGuard { _guard: guard },
    )
}

#[tokio::test]
async fn test_auth_missing_header_unauthorized() {
    let (server, _guard) = create_auth_test_server("secret-key");

    let response = server
        .post("/selected")
        .json(&json!({"filters": [], "facet": "color", "value": "red"}))
        .await;

    response.assert_status_unauthorized();
}

#[tokio::test]
async fn test_auth_wrong_key_unauthorized() {
    let (server, _guard) = create_auth_test_server("secret-key");

    let response = server
        .post("/selected")
        .add_header(header::AUTHORIZATION, HeaderValue::from_static("Bearer wrong-key"))
        .json(&json!({"filters": [], "facet": "color", "value": "red"}))
        .await;

    response.assert_status_unauthorized();
}

#[tokio::test]
async fn test_auth_correct_key_allowed() {
    let (server, _guard) = create_auth_test_server("secret-key");

    let response = server
        .post("/selected")
        .add_header(header::AUTHORIZATION, HeaderValue::from_static("Bearer secret-key"))
        .json(&json!({"filters": [], "facet": "color", "value": "red"}))
        .await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_auth_health_is_exempt() {
    let (server, _guard) = create_auth_test_server("secret-key");

    let response = server.get("/health").await;

    response.assert_status_ok();
}
