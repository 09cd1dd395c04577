// ABOUTME: Main library entry point for the Clever OAuth integration server
// ABOUTME: Exposes configuration, the OAuth flow, REST routes, and rendering modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # Clever Connect
//!
//! A backend integration that performs the OAuth 2.0 authorization-code flow
//! against Clever, an education identity provider. The server redirects the
//! browser to Clever's consent screen, exchanges the returned authorization
//! code for an access token, fetches the identity, profile, and district
//! records, and hands the aggregated data to the browser-side application
//! through a localStorage bootstrap page.
//!
//! ## Architecture
//!
//! - **Config**: environment-sourced configuration, validated at startup
//! - **Clever**: OAuth provider client and data API client
//! - **Routes**: the `/auth` HTTP surface plus health checks
//! - **Render**: script-safe serialization of the login payload
//! - **Middleware**: CORS, security headers, and `/auth` rate limiting
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use clever_connect::config::environment::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     // Requires CLEVER_CLIENT_ID, CLEVER_CLIENT_SECRET, CLEVER_REDIRECT_URI
//!     let config = ServerConfig::from_env()?;
//!     println!("Clever Connect configured with port: {}", config.http_port);
//!     Ok(())
//! }
//! ```

pub mod clever;
pub mod config;
pub mod errors;
pub mod logging;
pub mod middleware;
pub mod models;
pub mod render;
pub mod routes;
