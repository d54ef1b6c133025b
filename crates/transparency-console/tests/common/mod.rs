//! Shared helpers for console integration tests

#![allow(dead_code, clippy::unwrap_used)]

use std::sync::Once;
use transparency_client::{AdminApiClient, ApiClients};
use transparency_core::config::ApiConfig;
use wiremock::MockServer;

static INIT_LOGGER: Once = Once::new();

/// Version prefix the mock backend is mounted under
pub const PREFIX: &str = "/api/v1";

/// Initialize test logging (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init();
    });
}

fn api_config(server: &MockServer) -> ApiConfig {
    ApiConfig {
        base_url: format!("{}{PREFIX}", server.uri()),
        token: Some("test-token".to_string()),
        ..ApiConfig::default()
    }
}

/// Admin client pointed at `server`
pub fn admin_client(server: &MockServer) -> AdminApiClient {
    AdminApiClient::new(&api_config(server)).unwrap()
}

/// Admin, notification and onboarding clients sharing one transport
pub fn clients(server: &MockServer) -> ApiClients {
    ApiClients::new(&api_config(server)).unwrap()
}

/// Full mock path for an API route
pub fn api_path(route: &str) -> String {
    format!("{PREFIX}{route}")
}
