//! Article entity and its raw scraped form.

use serde::Serialize;
use tracing::warn;

use super::timestamp::{ParsePolicy, TimestampParseError, parse_epoch_seconds};

/// One listing row exactly as extracted from the page, before any
/// normalization. Display fields may be absent when the markup is odd.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawArticle {
    pub id: String,
    pub rank: Option<String>,
    pub title: Option<String>,
    pub link: Option<String>,
    /// Composite age string, e.g. `2024-01-15T12:34:56 1705322096`.
    pub timestamp: Option<String>,
}

/// One listing entry with normalized ordering keys.
///
/// Serializes to the report shape: only the scraped fields appear in the
/// JSON artifact, in this order.
#[derive(Debug, Clone, Serialize)]
pub struct Article {
    pub id: String,
    pub rank: Option<String>,
    pub title: Option<String>,
    pub link: Option<String>,
    pub timestamp: Option<String>,
    /// Normalized epoch seconds; ordering key, not part of the report.
    #[serde(skip)]
    pub epoch: i64,
    /// Base-10 parse of `id`; `None` marks a malformed identifier.
    #[serde(skip)]
    pub numeric_id: Option<i64>,
}

impl Article {
    /// Normalize a scraped row. Only fails under [`ParsePolicy::Reject`].
    pub fn from_raw(raw: RawArticle, policy: ParsePolicy) -> Result<Self, TimestampParseError> {
        let epoch = parse_epoch_seconds(raw.timestamp.as_deref(), policy)?;
        let numeric_id = raw.id.trim().parse::<i64>().ok();
        if numeric_id.is_none() {
            warn!("article id '{}' is not numeric", raw.id);
        }
        Ok(Self {
            id: raw.id,
            rank: raw.rank.map(|s| s.trim().to_string()),
            title: raw.title.map(|s| s.trim().to_string()),
            link: raw.link,
            timestamp: raw.timestamp,
            epoch,
            numeric_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(id: &str, ts: &str) -> RawArticle {
        RawArticle {
            id: id.to_string(),
            rank: Some("  1.  ".to_string()),
            title: Some(" Title ".to_string()),
            link: Some("https://example.com".to_string()),
            timestamp: Some(ts.to_string()),
        }
    }

    #[test]
    fn from_raw_normalizes_keys_and_trims_display_fields() {
        let article = Article::from_raw(raw("41000000", "t 1700000000"), ParsePolicy::ZeroDefault)
            .unwrap();
        assert_eq!(article.epoch, 1_700_000_000);
        assert_eq!(article.numeric_id, Some(41_000_000));
        assert_eq!(article.rank.as_deref(), Some("1."));
        assert_eq!(article.title.as_deref(), Some("Title"));
        // raw timestamp is preserved verbatim for the report
        assert_eq!(article.timestamp.as_deref(), Some("t 1700000000"));
    }

    #[test]
    fn malformed_id_is_kept_but_flagged() {
        let article =
            Article::from_raw(raw("not-a-number", "t 10"), ParsePolicy::ZeroDefault).unwrap();
        assert_eq!(article.id, "not-a-number");
        assert_eq!(article.numeric_id, None);
    }

    #[test]
    fn report_serialization_omits_ordering_keys() {
        let article = Article::from_raw(raw("5", "t 10"), ParsePolicy::ZeroDefault).unwrap();
        let json = serde_json::to_string(&article).unwrap();
        for key in ["\"id\"", "\"rank\"", "\"title\"", "\"link\"", "\"timestamp\""] {
            assert!(json.contains(key), "missing {key} in {json}");
        }
        assert!(!json.contains("epoch"));
        assert!(!json.contains("numeric_id"));
    }
}
