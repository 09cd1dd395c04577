// ABOUTME: Per-IP sliding-window rate limiting for the /auth namespace
// ABOUTME: Returns 429 with standard RateLimit headers when the window is exhausted
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rate limiting for authentication routes.
//!
//! A small in-memory sliding window per client IP. Authentication attempts
//! are rare for legitimate users, so a low ceiling over a long window keeps
//! brute-force traffic out without hurting real logins.

use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use axum::extract::{ConnectInfo, Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use http::{HeaderValue, StatusCode};

/// Maximum `/auth` requests per client per window
pub const AUTH_RATE_LIMIT: usize = 5;

/// Window length for the limiter
pub const AUTH_RATE_WINDOW: Duration = Duration::from_secs(15 * 60);

/// Body returned to rejected clients
pub const RATE_LIMIT_MESSAGE: &str =
    "Too many authentication attempts, please try again later.";

/// Standard rate limiting response header names
mod headers {
    pub const RATE_LIMIT_LIMIT: &str = "RateLimit-Limit";
    pub const RATE_LIMIT_REMAINING: &str = "RateLimit-Remaining";
    pub const RATE_LIMIT_RESET: &str = "RateLimit-Reset";
}

/// Sliding-window rate limiter with per-IP tracking
#[derive(Clone)]
pub struct AuthRateLimiter {
    state: Arc<Mutex<HashMap<IpAddr, Vec<Instant>>>>,
    limit: usize,
    window: Duration,
}

/// Outcome of a rate-limit check
#[derive(Debug, Clone, Copy)]
pub struct RateLimitStatus {
    pub limited: bool,
    pub limit: usize,
    pub remaining: usize,
    /// Seconds until the oldest tracked request ages out of the window
    pub reset_after: Duration,
}

impl AuthRateLimiter {
    /// Limiter with the `/auth` namespace defaults
    #[must_use]
    pub fn new() -> Self {
        Self::with_limits(AUTH_RATE_LIMIT, AUTH_RATE_WINDOW)
    }

    /// Limiter with a custom ceiling and window, for tests
    #[must_use]
    pub fn with_limits(limit: usize, window: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(HashMap::new())),
            limit,
            window,
        }
    }

    /// Record a hit for `client_ip` and report whether it is over the limit.
    /// Rejected hits are not recorded, so a limited client's window still
    /// drains while it retries.
    pub fn check(&self, client_ip: IpAddr) -> RateLimitStatus {
        let now = Instant::now();
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);

        // Drop clients whose entire history has aged out
        state.retain(|_, hits| {
            hits.iter()
                .any(|hit| now.duration_since(*hit) < self.window)
        });

        let hits = state.entry(client_ip).or_default();
        hits.retain(|hit| now.duration_since(*hit) < self.window);

        let limited = hits.len() >= self.limit;
        if !limited {
            hits.push(now);
        }

        let remaining = self.limit.saturating_sub(hits.len());
        let reset_after = hits.first().map_or(self.window, |oldest| {
            self.window.saturating_sub(now.duration_since(*oldest))
        });

        RateLimitStatus {
            limited,
            limit: self.limit,
            remaining,
            reset_after,
        }
    }
}

impl Default for AuthRateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

/// Axum middleware enforcing the limiter.
///
/// The client is identified by its socket peer address, falling back to
/// localhost when no peer address is available (in-process test requests).
pub async fn enforce(
    State(limiter): State<AuthRateLimiter>,
    request: Request,
    next: Next,
) -> Response {
    let client_ip = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map_or(IpAddr::V4(Ipv4Addr::LOCALHOST), |info| info.0.ip());

    let status = limiter.check(client_ip);
    if status.limited {
        tracing::warn!(
            "Rate limit exceeded for {client_ip} on {}",
            request.uri().path()
        );
        return rejection(&status);
    }

    next.run(request).await
}

fn rejection(status: &RateLimitStatus) -> Response {
    let mut response = (StatusCode::TOO_MANY_REQUESTS, RATE_LIMIT_MESSAGE).into_response();
    let header_map = response.headers_mut();

    if let Ok(value) = HeaderValue::from_str(&status.limit.to_string()) {
        header_map.insert(headers::RATE_LIMIT_LIMIT, value);
    }
    if let Ok(value) = HeaderValue::from_str(&status.remaining.to_string()) {
        header_map.insert(headers::RATE_LIMIT_REMAINING, value);
    }
    if let Ok(value) = HeaderValue::from_str(&status.reset_after.as_secs().to_string()) {
        header_map.insert(headers::RATE_LIMIT_RESET, value);
    }

    response
}
