//! Session metadata projection.

use serde::{Deserialize, Serialize};

/// Listing projection of a stored session.
///
/// This is the shape session pickers render: the machine id, the last
/// write time, the optional user label, and the optional friendly alias.
/// Field names serialize in camelCase for web-facing callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionMetadata {
    /// Machine-generated session id.
    pub id: String,
    /// Last write time, RFC 3339 with millisecond precision (UTC).
    pub time: String,
    /// User-assigned label, if any.
    pub label: Option<String>,
    /// Friendly alias issued for this id, if any.
    pub friendly_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_camel_case_for_web_callers() {
        let metadata = SessionMetadata {
            id: "abc".to_string(),
            time: "2024-01-01T00:00:00.000Z".to_string(),
            label: None,
            friendly_id: Some("spanish-albatross".to_string()),
        };
        let json = serde_json::to_string(&metadata).unwrap();
        assert!(json.contains(r#""friendlyId":"spanish-albatross""#));
        assert!(json.contains(r#""label":null"#));
    }
}
