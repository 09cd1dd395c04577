// ABOUTME: HTML bootstrap page rendering and script-safe JSON escaping
// ABOUTME: Transfers server-fetched data to the browser via localStorage plus redirect
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Response rendering for the OAuth callback.
//!
//! The aggregated result is serialized to JSON, escaped for embedding inside
//! a single-quoted script string, and returned as a page that stores the data
//! under [`STORAGE_KEY`] before navigating to the application root. This is
//! the only mechanism that moves server-obtained data to the browser; no
//! cookies or server-side sessions exist.

use crate::models::AggregatedResult;

/// localStorage key the front-end application reads after the redirect
pub const STORAGE_KEY: &str = "cleverData";

/// Escape a JSON text for literal embedding in a single-quoted script string.
///
/// Backslashes must be handled before the quote escapes, or the backslashes
/// those escapes add would be doubled. Angle brackets become unicode escapes
/// so the payload can never terminate the surrounding `<script>` tag.
#[must_use]
pub fn escape_json_for_html(json: &str) -> String {
    json.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('"', "\\\"")
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
}

/// Render the success page that hands `result` to the browser application.
///
/// # Errors
///
/// Returns an error if the result cannot be encoded as JSON.
pub fn success_page(result: &AggregatedResult) -> Result<String, serde_json::Error> {
    let escaped = escape_json_for_html(&serde_json::to_string(result)?);
    Ok(format!(
        r"<!DOCTYPE html>
<html>
<head>
    <title>Clever Login Success</title>
    <script>
        localStorage.setItem('{STORAGE_KEY}', '{escaped}');
        window.location.href = '/?login=success';
    </script>
</head>
<body>
    <p>Processing login...</p>
</body>
</html>
"
    ))
}
