// ABOUTME: Cross-cutting HTTP middleware: CORS, security headers, rate limiting
// ABOUTME: Applied by the router; handlers stay free of policy concerns
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP middleware

pub mod cors;
pub mod rate_limiting;
pub mod security_headers;
