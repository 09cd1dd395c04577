// ABOUTME: Unified error types for the OAuth authentication flow
// ABOUTME: Implements the user-facing message precedence for error redirects
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error handling for the authentication flow.
//!
//! Every failure between the token exchange and the final render converges
//! on [`AuthFlowError`] so the callback handler can turn any of them into a
//! single error redirect without unwinding through intermediate layers.

use http::StatusCode;
use thiserror::Error;

/// Fallback shown when no better message can be extracted
pub const GENERIC_AUTH_FAILURE: &str = "Authentication failed";

/// Failures that can occur between receiving a valid authorization code and
/// rendering the success page
#[derive(Debug, Error)]
pub enum AuthFlowError {
    /// Outbound request failed before a usable response arrived (connect
    /// error, timeout, body read failure)
    #[error("request to Clever failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Clever answered with a non-success status
    #[error("Clever returned {status}")]
    Provider {
        status: StatusCode,
        /// OAuth `error` code from the response body, when the body parsed
        error: Option<String>,
        /// OAuth `error_description` from the response body, when the body parsed
        error_description: Option<String>,
    },

    /// Token endpoint returned a success status without an access token
    #[error("No access token received from Clever")]
    MissingAccessToken,

    /// Identity record is missing the user id or the district id
    #[error("Invalid user data structure - missing user ID or district ID")]
    InvalidIdentity,

    /// Aggregated result could not be serialized for the bootstrap page
    #[error("failed to serialize login payload: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AuthFlowError {
    /// Best-effort human-readable message for the error redirect.
    ///
    /// Precedence: provider `error_description`, provider `error`, this
    /// failure's own message, then [`GENERIC_AUTH_FAILURE`]. The order is
    /// user-visible and must not change.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Provider {
                error,
                error_description,
                ..
            } => error_description
                .as_deref()
                .filter(|message| !message.is_empty())
                .or_else(|| error.as_deref().filter(|message| !message.is_empty()))
                .map_or_else(|| self.to_string(), ToOwned::to_owned),
            other => {
                let message = other.to_string();
                if message.is_empty() {
                    GENERIC_AUTH_FAILURE.to_owned()
                } else {
                    message
                }
            }
        }
    }
}
