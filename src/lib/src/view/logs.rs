//! Serde shapes for the records list endpoint
//!
//! [`LogRecord`] mirrors one raw record as the remote sends it. Anything
//! the remote adds beyond these fields (collection metadata, expansion
//! blobs) is dropped at deserialization so nothing unbounded is retained.

use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::model::{LogEntry, PageResult};

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct LogRecord {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub updated: Option<String>,
}

#[derive(Deserialize, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ListLogsResponse {
    pub page: usize,
    pub per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub items: Vec<LogRecord>,
}

impl ListLogsResponse {
    /// Normalize the wire response into the domain shape.
    ///
    /// `total_pages` is floored at 1 and `items` is truncated to
    /// `per_page`, so the [`PageResult`] invariants hold no matter what
    /// the remote sent.
    pub fn into_page_result(self) -> PageResult {
        let ListLogsResponse {
            page,
            per_page,
            total_items,
            total_pages,
            items,
        } = self;
        let mut items: Vec<LogEntry> = items.into_iter().map(LogEntry::from).collect();
        if per_page > 0 {
            items.truncate(per_page);
        }
        PageResult {
            items,
            page,
            per_page,
            total_items,
            total_pages: total_pages.max(1),
        }
    }
}

impl From<LogRecord> for LogEntry {
    fn from(record: LogRecord) -> LogEntry {
        LogEntry {
            id: record.id,
            email: non_empty(record.email),
            password: non_empty(record.password),
            description: non_empty(record.description),
            created: parse_timestamp(record.created.as_deref()),
            updated: parse_timestamp(record.updated.as_deref()),
        }
    }
}

// The remote sends "" rather than null for blank fields
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// Parse the remote's `2024-01-02 15:04:05.000Z` timestamps, accepting
/// plain RFC 3339 as well. Absent or garbage values come back as `None`.
fn parse_timestamp(raw: Option<&str>) -> Option<OffsetDateTime> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    let candidate = if raw.len() > 10 && raw.as_bytes()[10] == b' ' {
        raw.replacen(' ', "T", 1)
    } else {
        raw.to_string()
    };
    OffsetDateTime::parse(&candidate, &Rfc3339).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn record(id: &str) -> LogRecord {
        LogRecord {
            id: id.to_string(),
            email: Some("user@example.com".to_string()),
            password: Some("hunter2".to_string()),
            description: Some("".to_string()),
            created: Some("2024-01-02 15:04:05.000Z".to_string()),
            updated: None,
        }
    }

    #[test]
    fn test_log_record_projects_known_fields() {
        let entry = LogEntry::from(record("abc123"));
        assert_eq!(entry.id, "abc123");
        assert_eq!(entry.email.as_deref(), Some("user@example.com"));
        assert_eq!(entry.password.as_deref(), Some("hunter2"));
        // blank strings become None
        assert_eq!(entry.description, None);
        assert_eq!(entry.created, Some(datetime!(2024-01-02 15:04:05 UTC)));
        assert_eq!(entry.updated, None);
    }

    #[test]
    fn test_parse_timestamp_accepts_rfc3339() {
        let parsed = parse_timestamp(Some("2023-06-01T08:30:00Z"));
        assert_eq!(parsed, Some(datetime!(2023-06-01 08:30:00 UTC)));
    }

    #[test]
    fn test_parse_timestamp_rejects_garbage() {
        assert_eq!(parse_timestamp(Some("not a date")), None);
        assert_eq!(parse_timestamp(Some("")), None);
        assert_eq!(parse_timestamp(None), None);
    }

    #[test]
    fn test_unknown_fields_are_dropped() {
        let body = r#"{
            "id": "r1",
            "email": "a@b.com",
            "collectionId": "xyz",
            "collectionName": "logs",
            "expand": {"huge": ["blob"]}
        }"#;
        let record: LogRecord = serde_json::from_str(body).unwrap();
        let entry = LogEntry::from(record);
        assert_eq!(entry.id, "r1");
        assert_eq!(entry.email.as_deref(), Some("a@b.com"));
    }

    #[test]
    fn test_into_page_result_enforces_invariants() {
        let response = ListLogsResponse {
            page: 1,
            per_page: 2,
            total_items: 0,
            total_pages: 0,
            items: vec![record("a"), record("b"), record("c")],
        };
        let result = response.into_page_result();
        assert_eq!(result.total_pages, 1);
        assert!(result.items.len() <= result.per_page);
    }
}
