// ABOUTME: Wire-facing data structures handed to the browser application
// ABOUTME: Aggregated OAuth result with placeholder roster resource sections
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Data structures for the aggregated login payload.
//!
//! Everything here is request-scoped: built once per successful callback,
//! serialized into the bootstrap page, and never retained.

use serde::Serialize;
use serde_json::Value;

use crate::clever::CleverUserData;

/// How much of the access token the browser is allowed to see
const TOKEN_PREVIEW_LEN: usize = 20;

/// Auth summary embedded in the aggregated result. The token is truncated
/// before it leaves the server; the full value never reaches the browser.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthInfo {
    pub token: String,
    pub token_type: &'static str,
    pub scopes: &'static str,
}

/// Placeholder for a roster resource category this flow does not fetch
#[derive(Debug, Serialize)]
pub struct ResourceSection {
    pub count: usize,
    pub data: Vec<Value>,
    pub available: bool,
}

impl ResourceSection {
    /// Empty, explicitly-unavailable section
    #[must_use]
    pub const fn unavailable() -> Self {
        Self {
            count: 0,
            data: Vec::new(),
            available: false,
        }
    }
}

/// Everything the browser-side application receives after a login
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedResult {
    pub auth_info: AuthInfo,
    pub me: Value,
    pub user_profile: Value,
    pub district: Value,
    pub schools: ResourceSection,
    pub teachers: ResourceSection,
    pub students: ResourceSection,
    pub sections: ResourceSection,
    pub my_teacher_sections: ResourceSection,
}

impl AggregatedResult {
    /// Assemble the client payload from a completed fetch
    #[must_use]
    pub fn new(access_token: &str, data: CleverUserData) -> Self {
        Self {
            auth_info: AuthInfo {
                token: truncate_token(access_token),
                token_type: "Bearer",
                scopes: "District SSO - Basic Access",
            },
            me: data.user,
            user_profile: data.profile,
            district: data.district,
            schools: ResourceSection::unavailable(),
            teachers: ResourceSection::unavailable(),
            students: ResourceSection::unavailable(),
            sections: ResourceSection::unavailable(),
            my_teacher_sections: ResourceSection::unavailable(),
        }
    }
}

/// First [`TOKEN_PREVIEW_LEN`] characters of the token followed by `...`
fn truncate_token(access_token: &str) -> String {
    let preview: String = access_token.chars().take(TOKEN_PREVIEW_LEN).collect();
    format!("{preview}...")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_data() -> CleverUserData {
        CleverUserData {
            user: json!({"data": {"id": "u1", "district": "d1"}}),
            profile: json!({"data": {"name": {"first": "Ada"}}}),
            district: json!({"data": {"name": "Test District"}}),
        }
    }

    #[test]
    fn token_is_truncated_to_twenty_characters() {
        let token = "0123456789abcdefghijKLMNOP";
        let result = AggregatedResult::new(token, sample_data());
        assert_eq!(result.auth_info.token, "0123456789abcdefghij...");
    }

    #[test]
    fn short_token_is_passed_through_with_ellipsis() {
        let result = AggregatedResult::new("short", sample_data());
        assert_eq!(result.auth_info.token, "short...");
    }

    #[test]
    fn serialized_keys_are_camel_case() {
        let result = AggregatedResult::new("token", sample_data());
        let value = serde_json::to_value(&result).unwrap();

        assert!(value.get("authInfo").is_some());
        assert!(value.get("userProfile").is_some());
        assert!(value.get("myTeacherSections").is_some());
        assert_eq!(value["authInfo"]["tokenType"], "Bearer");
        assert_eq!(value["authInfo"]["scopes"], "District SSO - Basic Access");
    }

    #[test]
    fn placeholder_sections_report_unavailable() {
        let result = AggregatedResult::new("token", sample_data());
        let value = serde_json::to_value(&result).unwrap();

        for section in ["schools", "teachers", "students", "sections", "myTeacherSections"] {
            assert_eq!(value[section]["count"], 0, "{section}");
            assert_eq!(value[section]["data"], json!([]), "{section}");
            assert_eq!(value[section]["available"], false, "{section}");
        }
    }
}
