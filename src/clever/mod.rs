// ABOUTME: Clever integration layer: OAuth token exchange and data API access
// ABOUTME: Shares one HTTP client with a fixed timeout and identifying User-Agent
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Clever provider integration.
//!
//! [`provider`] handles the OAuth side (authorization URL, code-for-token
//! exchange); [`api`] fetches the identity, profile, and district records.
//! Both share a single [`reqwest::Client`] built by [`http_client`].

pub mod api;
pub mod provider;

pub use api::{CleverApiClient, CleverUserData};
pub use provider::CleverOAuthProvider;

use crate::errors::AuthFlowError;
use serde::Deserialize;
use std::time::Duration;

/// Timeout applied to every outbound call to Clever
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client-identifying header sent on every outbound call
pub const USER_AGENT: &str = "CleverPrintApp/1.0";

/// Build the shared HTTP client used for all Clever traffic.
///
/// # Errors
///
/// Returns an error if the TLS backend cannot be initialized.
pub fn http_client() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(USER_AGENT)
        .build()
}

/// Error body shape used by Clever's OAuth and data endpoints
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ProviderErrorBody {
    pub error: Option<String>,
    pub error_description: Option<String>,
}

/// Convert a non-success response into a typed provider error, keeping
/// whatever OAuth error fields the body carries for message extraction.
pub(crate) async fn provider_error(response: reqwest::Response) -> AuthFlowError {
    let status = response.status();
    let body: ProviderErrorBody = response.json().await.unwrap_or_default();
    AuthFlowError::Provider {
        status,
        error: body.error,
        error_description: body.error_description,
    }
}
