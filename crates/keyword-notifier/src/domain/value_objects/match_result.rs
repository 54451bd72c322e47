//! MatchResult - Outcome of one evaluation

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Result of evaluating one message. The keyword is present iff matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "MatchRecord", try_from = "MatchRecord")]
pub enum MatchResult {
    Matched { keyword: String },
    NoMatch,
}

impl MatchResult {
    pub fn matched(keyword: impl Into<String>) -> Self {
        Self::Matched {
            keyword: keyword.into(),
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, Self::Matched { .. })
    }

    pub fn keyword(&self) -> Option<&str> {
        match self {
            Self::Matched { keyword } => Some(keyword),
            Self::NoMatch => None,
        }
    }
}

/// Wire shape: `{ "matched": bool, "keyword": string? }`
#[derive(Serialize, Deserialize)]
struct MatchRecord {
    matched: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    keyword: Option<String>,
}

impl From<MatchResult> for MatchRecord {
    fn from(result: MatchResult) -> Self {
        match result {
            MatchResult::Matched { keyword } => Self {
                matched: true,
                keyword: Some(keyword),
            },
            MatchResult::NoMatch => Self {
                matched: false,
                keyword: None,
            },
        }
    }
}

impl TryFrom<MatchRecord> for MatchResult {
    type Error = DomainError;

    fn try_from(record: MatchRecord) -> Result<Self, Self::Error> {
        match (record.matched, record.keyword) {
            (true, Some(keyword)) => Ok(Self::Matched { keyword }),
            (false, None) => Ok(Self::NoMatch),
            (true, None) => Err(DomainError::Validation(
                "matched result without keyword".into(),
            )),
            (false, Some(_)) => Err(DomainError::Validation(
                "keyword present on a non-match".into(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(MatchResult::matched("DD")).unwrap();
        assert_eq!(json, serde_json::json!({ "matched": true, "keyword": "DD" }));

        let json = serde_json::to_value(MatchResult::NoMatch).unwrap();
        assert_eq!(json, serde_json::json!({ "matched": false }));
    }

    #[test]
    fn test_rejects_inconsistent_records() {
        let parsed: Result<MatchResult, _> =
            serde_json::from_value(serde_json::json!({ "matched": true }));
        assert!(parsed.is_err());
    }
}
