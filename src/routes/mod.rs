// ABOUTME: HTTP router assembly and shared application state
// ABOUTME: Applies cross-cutting layers and scopes rate limiting to /auth
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Route registration for the Clever Connect server

pub mod auth;
pub mod health;

use std::sync::Arc;

use axum::{middleware as axum_middleware, Router};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::clever::{self, CleverApiClient, CleverOAuthProvider};
use crate::config::environment::ServerConfig;
use crate::middleware::rate_limiting::{self, AuthRateLimiter};
use crate::middleware::{cors, security_headers};

/// Shared state handed to every handler. Cloning is cheap: the config is
/// behind an `Arc` and the clients share one HTTP connection pool.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub oauth: CleverOAuthProvider,
    pub api: CleverApiClient,
}

impl AppState {
    /// Build state from loaded configuration, creating the shared HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS-backed HTTP client cannot be constructed.
    pub fn new(config: ServerConfig) -> anyhow::Result<Self> {
        let http = clever::http_client()?;
        let oauth = CleverOAuthProvider::new(http.clone(), config.clever.clone());
        let api = CleverApiClient::new(http, config.clever.api_url.clone());
        Ok(Self {
            config: Arc::new(config),
            oauth,
            api,
        })
    }
}

/// Assemble the full application router with all cross-cutting layers.
///
/// Rate limiting covers only the `/auth` namespace; security headers, CORS,
/// request tracing, and static file serving apply everywhere.
#[must_use]
pub fn router(state: AppState) -> Router {
    let limiter = AuthRateLimiter::new();
    let auth_routes = auth::routes(state.clone()).layer(axum_middleware::from_fn_with_state(
        limiter,
        rate_limiting::enforce,
    ));

    Router::new()
        .nest("/auth", auth_routes)
        .merge(health::routes())
        .fallback_service(ServeDir::new("public"))
        .layer(axum_middleware::from_fn(
            security_headers::set_security_headers,
        ))
        .layer(cors::setup_cors(state.config.as_ref()))
        .layer(TraceLayer::new_for_http())
}
