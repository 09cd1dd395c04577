// ABOUTME: Startup configuration tests covering required-variable validation
// ABOUTME: Serialized because they mutate process environment variables

use clever_connect::config::environment::{
    Environment, ServerConfig, DEFAULT_CLEVER_API_URL, DEFAULT_CLEVER_BASE_URL,
    DEFAULT_HTTP_PORT, REQUIRED_ENV_VARS,
};
use serial_test::serial;
use std::env;

const OPTIONAL_VARS: [&str; 6] = [
    "PORT",
    "ENVIRONMENT",
    "NODE_ENV",
    "CORS_ALLOWED_ORIGINS",
    "CLEVER_BASE_URL",
    "CLEVER_API_URL",
];

fn set_required_vars() {
    env::set_var("CLEVER_CLIENT_ID", "test-client-id");
    env::set_var("CLEVER_CLIENT_SECRET", "test-client-secret");
    env::set_var(
        "CLEVER_REDIRECT_URI",
        "http://localhost:3000/auth/clever/callback",
    );
}

fn clear_all_vars() {
    for name in REQUIRED_ENV_VARS {
        env::remove_var(name);
    }
    for name in OPTIONAL_VARS {
        env::remove_var(name);
    }
}

#[test]
#[serial]
fn loads_with_defaults_when_only_required_vars_are_set() {
    clear_all_vars();
    set_required_vars();

    let config = ServerConfig::from_env().expect("config should load");

    assert_eq!(config.http_port, DEFAULT_HTTP_PORT);
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.clever.client_id, "test-client-id");
    assert_eq!(config.clever.base_url, DEFAULT_CLEVER_BASE_URL);
    assert_eq!(config.clever.api_url, DEFAULT_CLEVER_API_URL);

    clear_all_vars();
}

#[test]
#[serial]
fn missing_single_variable_is_named_in_the_error() {
    clear_all_vars();
    set_required_vars();
    env::remove_var("CLEVER_CLIENT_SECRET");

    let err = ServerConfig::from_env().expect_err("missing secret must fail");
    let message = err.to_string();

    assert!(message.contains("CLEVER_CLIENT_SECRET"));
    assert!(!message.contains("CLEVER_CLIENT_ID,"));
    assert!(!message.contains("CLEVER_REDIRECT_URI"));

    clear_all_vars();
}

#[test]
#[serial]
fn all_missing_variables_are_reported_together() {
    clear_all_vars();

    let err = ServerConfig::from_env().expect_err("empty environment must fail");
    let message = err.to_string();

    for name in REQUIRED_ENV_VARS {
        assert!(message.contains(name), "missing {name} in: {message}");
    }

    clear_all_vars();
}

#[test]
#[serial]
fn empty_value_counts_as_missing() {
    clear_all_vars();
    set_required_vars();
    env::set_var("CLEVER_CLIENT_ID", "");

    let err = ServerConfig::from_env().expect_err("empty value must fail");
    assert!(err.to_string().contains("CLEVER_CLIENT_ID"));

    clear_all_vars();
}

#[test]
#[serial]
fn optional_overrides_are_applied() {
    clear_all_vars();
    set_required_vars();
    env::set_var("PORT", "8099");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("CLEVER_BASE_URL", "http://clever.test");
    env::set_var("CLEVER_API_URL", "http://api.clever.test/v3.0");

    let config = ServerConfig::from_env().expect("config should load");

    assert_eq!(config.http_port, 8099);
    assert_eq!(config.environment, Environment::Production);
    assert!(config.environment.is_production());
    assert_eq!(config.clever.base_url, "http://clever.test");
    assert_eq!(config.clever.api_url, "http://api.clever.test/v3.0");

    clear_all_vars();
}

#[test]
#[serial]
fn node_env_is_honored_when_environment_is_unset() {
    clear_all_vars();
    set_required_vars();
    env::set_var("NODE_ENV", "production");

    let config = ServerConfig::from_env().expect("config should load");
    assert_eq!(config.environment, Environment::Production);

    clear_all_vars();
}

#[test]
#[serial]
fn unparseable_port_falls_back_to_the_default() {
    clear_all_vars();
    set_required_vars();
    env::set_var("PORT", "not-a-port");

    let config = ServerConfig::from_env().expect("config should load");
    assert_eq!(config.http_port, DEFAULT_HTTP_PORT);

    clear_all_vars();
}
