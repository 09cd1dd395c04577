// ABOUTME: Test fixtures for application state with injectable provider URLs

use clever_connect::config::environment::{CleverConfig, Environment, ServerConfig};
use clever_connect::routes::AppState;

/// Application state pointing both Clever hosts at the given base URLs
#[allow(dead_code)]
pub fn test_state(base_url: &str, api_url: &str) -> AppState {
    let config = ServerConfig {
        http_port: 3000,
        environment: Environment::Testing,
        cors_allowed_origins: String::new(),
        clever: CleverConfig {
            client_id: "test-client-id".into(),
            client_secret: "test-client-secret".into(),
            redirect_uri: "http://localhost:3000/auth/clever/callback".into(),
            base_url: base_url.into(),
            api_url: api_url.into(),
        },
    };
    AppState::new(config).expect("failed to build test state")
}

/// State with unreachable provider hosts, for tests that must never make
/// an outbound call
#[allow(dead_code)]
pub fn offline_state() -> AppState {
    test_state("http://127.0.0.1:1", "http://127.0.0.1:1")
}
