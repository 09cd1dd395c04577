// ABOUTME: OAuth flow route handlers: authorization redirect and provider callback
// ABOUTME: Validates callback input and converts downstream failures to error redirects
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Authentication routes for the Clever OAuth flow.
//!
//! Handlers stay thin: input validation and response shaping live here,
//! token exchange and data fetching in the `clever` module. No failure in
//! the flow propagates past the callback handler; every one becomes an
//! error redirect to the application root.

use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use http::{header, StatusCode};
use serde::Deserialize;

use super::AppState;
use crate::errors::AuthFlowError;
use crate::models::AggregatedResult;
use crate::render;

/// Minimum plausible authorization code length. Shorter values are rejected
/// before any upstream call is made.
const MIN_CODE_LEN: usize = 10;

/// Body returned for malformed callback input
const INVALID_CODE_MESSAGE: &str = "Invalid authorization code provided";

/// Create the `/auth` route tree
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/clever", get(initiate_login))
        .route("/clever/callback", get(handle_callback))
        .with_state(state)
}

/// Query parameters Clever sends to the callback
#[derive(Debug, Deserialize)]
struct CallbackParams {
    code: Option<String>,
}

/// 302 Found with an explicit Location. The browser-facing contract is a
/// plain found redirect, not axum's 303/307 helpers.
fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_owned())]).into_response()
}

/// GET /auth/clever - redirect the browser to Clever's consent screen.
/// Cannot fail given valid configuration.
async fn initiate_login(State(state): State<AppState>) -> Response {
    let auth_url = state.oauth.authorization_url();
    tracing::debug!("Redirecting to Clever authorization URL: {auth_url}");
    found(&auth_url)
}

/// GET /auth/clever/callback - exchange the code and bootstrap the client
async fn handle_callback(
    State(state): State<AppState>,
    Query(params): Query<CallbackParams>,
) -> Response {
    let code = params.code.unwrap_or_default();
    if code.len() < MIN_CODE_LEN {
        tracing::error!("Invalid authorization code received (len={})", code.len());
        return (StatusCode::BAD_REQUEST, INVALID_CODE_MESSAGE).into_response();
    }

    match run_flow(&state, &code).await {
        Ok(page) => Html(page).into_response(),
        Err(err) => {
            tracing::error!("OAuth flow failed: {err}");
            let message = err.user_message();
            found(&format!(
                "/?login=error&message={}",
                urlencoding::encode(&message)
            ))
        }
    }
}

/// Token exchange, data fetch, aggregation, and rendering as one fallible
/// unit so the handler has a single failure point to convert.
async fn run_flow(state: &AppState, code: &str) -> Result<String, AuthFlowError> {
    let access_token = state.oauth.exchange_code(code).await?;
    let data = state.api.fetch_user_data(&access_token).await?;
    let result = AggregatedResult::new(&access_token, data);
    Ok(render::success_page(&result)?)
}
