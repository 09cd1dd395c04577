// ABOUTME: Clever OAuth provider: authorization URL construction and token exchange
// ABOUTME: Server-to-server exchange of the authorization code for an access token
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};

use super::provider_error;
use crate::config::environment::CleverConfig;
use crate::errors::AuthFlowError;

/// Scopes requested during authorization: read access to the roster
/// resource categories the application works with
pub const OAUTH_SCOPES: &str =
    "read:user_id read:districts read:schools read:teachers read:students";

/// Clever OAuth provider bound to one registered application
#[derive(Clone)]
pub struct CleverOAuthProvider {
    http: reqwest::Client,
    config: CleverConfig,
}

/// Token exchange request body. The client secret makes this a strictly
/// server-to-server call.
#[derive(Debug, Serialize)]
struct TokenExchangeRequest<'a> {
    client_id: &'a str,
    client_secret: &'a str,
    code: &'a str,
    grant_type: &'static str,
    redirect_uri: &'a str,
}

/// Token endpoint response. `access_token` is optional so a success body
/// without a token surfaces as a domain error instead of a parse error.
#[derive(Debug, Deserialize)]
struct TokenExchangeResponse {
    access_token: Option<String>,
}

impl CleverOAuthProvider {
    #[must_use]
    pub const fn new(http: reqwest::Client, config: CleverConfig) -> Self {
        Self { http, config }
    }

    /// Build the authorization URL the browser is redirected to.
    ///
    /// All query values are percent-encoded; the scope list stays
    /// space-delimited after decoding.
    #[must_use]
    pub fn authorization_url(&self) -> String {
        format!(
            "{}/oauth/authorize?client_id={}&redirect_uri={}&response_type=code&scope={}",
            self.config.base_url,
            urlencoding::encode(&self.config.client_id),
            urlencoding::encode(&self.config.redirect_uri),
            urlencoding::encode(OAUTH_SCOPES),
        )
    }

    /// Exchange an authorization code for an access token.
    ///
    /// # Errors
    ///
    /// `Provider` when Clever rejects the code, `MissingAccessToken` when a
    /// success response carries no token, `Http` on transport failures.
    pub async fn exchange_code(&self, code: &str) -> Result<String, AuthFlowError> {
        let body = TokenExchangeRequest {
            client_id: &self.config.client_id,
            client_secret: &self.config.client_secret,
            code,
            grant_type: "authorization_code",
            redirect_uri: &self.config.redirect_uri,
        };

        let response = self
            .http
            .post(format!("{}/oauth/tokens", self.config.base_url))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(provider_error(response).await);
        }

        let token: TokenExchangeResponse = response.json().await?;
        token
            .access_token
            .filter(|access_token| !access_token.is_empty())
            .ok_or(AuthFlowError::MissingAccessToken)
    }
}
