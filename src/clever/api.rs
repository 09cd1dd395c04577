// ABOUTME: Clever data API client: identity record plus parallel profile/district lookups
// ABOUTME: Fails fast when the identity record lacks the ids the second phase needs
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde_json::Value;

use super::provider_error;
use crate::errors::AuthFlowError;

/// The three payloads collected for a logged-in user, passed through to the
/// browser application unmodified
#[derive(Debug, Clone)]
pub struct CleverUserData {
    pub user: Value,
    pub profile: Value,
    pub district: Value,
}

/// Client for Clever's data API, authenticated per call with a bearer token
#[derive(Clone)]
pub struct CleverApiClient {
    http: reqwest::Client,
    api_url: String,
}

impl CleverApiClient {
    #[must_use]
    pub const fn new(http: reqwest::Client, api_url: String) -> Self {
        Self { http, api_url }
    }

    /// Fetch the identity, profile, and district payloads for a bearer token.
    ///
    /// The identity record is fetched first; the profile and district lookups
    /// depend only on ids extracted from it and run concurrently. Either of
    /// the parallel calls failing fails the whole fetch. Nothing is retried.
    ///
    /// # Errors
    ///
    /// `InvalidIdentity` when the identity record lacks a user id or district
    /// id (the remaining calls are never issued), `Provider`/`Http` when any
    /// call fails.
    pub async fn fetch_user_data(
        &self,
        access_token: &str,
    ) -> Result<CleverUserData, AuthFlowError> {
        let user = self.get_json("/me", access_token).await?;

        let user_id = user.pointer("/data/id").and_then(Value::as_str);
        let district_id = user.pointer("/data/district").and_then(Value::as_str);
        let (Some(user_id), Some(district_id)) = (user_id, district_id) else {
            return Err(AuthFlowError::InvalidIdentity);
        };

        let profile_path = format!("/users/{user_id}");
        let district_path = format!("/districts/{district_id}");
        let (profile, district) = tokio::try_join!(
            self.get_json(&profile_path, access_token),
            self.get_json(&district_path, access_token),
        )?;

        Ok(CleverUserData {
            user,
            profile,
            district,
        })
    }

    async fn get_json(&self, path: &str, access_token: &str) -> Result<Value, AuthFlowError> {
        let response = self
            .http
            .get(format!("{}{path}", self.api_url))
            .bearer_auth(access_token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(provider_error(response).await);
        }

        Ok(response.json().await?)
    }
}
