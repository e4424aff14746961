//! Respondent answers.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Lowest valid response value
pub const MIN_RESPONSE_VALUE: i64 = 1;
/// Highest valid response value; also the per-question maximum when scoring
pub const MAX_RESPONSE_VALUE: i64 = 4;

/// A recorded answer to one question.
///
/// Deserializes from either `{"value": 3, "timestamp": ...}` or a bare `3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ResponseRepr")]
pub struct Response {
    /// Answer on the 1-4 scale. Out-of-range values are kept here and
    /// dropped during scoring.
    pub value: i64,
    /// Answer time in milliseconds since the Unix epoch
    #[serde(default)]
    pub timestamp: i64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ResponseRepr {
    Bare(i64),
    Full {
        value: i64,
        #[serde(default)]
        timestamp: i64,
    },
}

impl From<ResponseRepr> for Response {
    fn from(repr: ResponseRepr) -> Self {
        match repr {
            ResponseRepr::Bare(value) => Self::new(value, 0),
            ResponseRepr::Full { value, timestamp } => Self::new(value, timestamp),
        }
    }
}

impl Response {
    #[must_use]
    pub const fn new(value: i64, timestamp: i64) -> Self {
        Self { value, timestamp }
    }

    /// Whether the value lies on the 1-4 scale
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.value >= MIN_RESPONSE_VALUE && self.value <= MAX_RESPONSE_VALUE
    }

    /// Answer time, if the timestamp is representable
    #[must_use]
    pub fn answered_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp)
    }
}

/// Responses keyed by question id.
///
/// Re-answering a question replaces the earlier response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseSet {
    responses: IndexMap<String, Response>,
}

impl ResponseSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer, replacing any earlier one for the same question
    pub fn record(&mut self, question_id: impl Into<String>, value: i64, timestamp: i64) {
        self.responses
            .insert(question_id.into(), Response::new(value, timestamp));
    }

    /// Builder-style variant of [`Self::record`] with a zero timestamp
    #[must_use]
    pub fn with(mut self, question_id: impl Into<String>, value: i64) -> Self {
        self.record(question_id, value, 0);
        self
    }

    #[must_use]
    pub fn get(&self, question_id: &str) -> Option<&Response> {
        self.responses.get(question_id)
    }

    /// Forget the answer to a question
    pub fn remove(&mut self, question_id: &str) -> Option<Response> {
        self.responses.shift_remove(question_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Response)> {
        self.responses.iter().map(|(id, r)| (id.as_str(), r))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.responses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    /// Most recent answer time across all responses
    #[must_use]
    pub fn last_answered_at(&self) -> Option<DateTime<Utc>> {
        self.responses
            .values()
            .filter_map(Response::answered_at)
            .max()
    }
}

impl<K: Into<String>> FromIterator<(K, Response)> for ResponseSet {
    fn from_iter<I: IntoIterator<Item = (K, Response)>>(iter: I) -> Self {
        Self {
            responses: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_overwrites_previous_answer() {
        let mut set = ResponseSet::new();
        set.record("sec-1", 2, 1_000);
        set.record("sec-1", 4, 2_000);
        assert_eq!(set.len(), 1);
        assert_eq!(set.get("sec-1"), Some(&Response::new(4, 2_000)));
    }

    #[test]
    fn test_validity_bounds() {
        assert!(!Response::new(0, 0).is_valid());
        assert!(Response::new(1, 0).is_valid());
        assert!(Response::new(4, 0).is_valid());
        assert!(!Response::new(5, 0).is_valid());
    }

    #[test]
    fn test_deserialize_map_shape() {
        let set: ResponseSet = serde_json::from_str(
            r#"{"sec-1": {"value": 3, "timestamp": 1700000000000}, "rel-1": {"value": 1}}"#,
        )
        .unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.get("rel-1").map(|r| r.timestamp), Some(0));
        let at = set.get("sec-1").and_then(Response::answered_at).unwrap();
        assert_eq!(at.timestamp(), 1_700_000_000);
    }

    #[test]
    fn test_deserialize_bare_values() {
        let set: ResponseSet =
            serde_json::from_str(r#"{"sec-1": 2, "rel-1": {"value": 4}, "doc-1": 7}"#).unwrap();
        assert_eq!(set.get("sec-1"), Some(&Response::new(2, 0)));
        assert_eq!(set.get("doc-1").map(Response::is_valid), Some(false));
        let order: Vec<&str> = set.iter().map(|(id, _)| id).collect();
        assert_eq!(order, vec!["sec-1", "rel-1", "doc-1"]);
    }

    #[test]
    fn test_last_answered_at() {
        let mut set = ResponseSet::new();
        assert!(set.last_answered_at().is_none());
        set.record("a", 2, 5_000);
        set.record("b", 3, 9_000);
        assert_eq!(set.last_answered_at().map(|t| t.timestamp_millis()), Some(9_000));
    }
}
