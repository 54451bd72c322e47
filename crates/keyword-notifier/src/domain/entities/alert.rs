//! KeywordAlert Entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::IncomingMessage;

/// A positive match handed to a notifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordAlert {
    /// Keyword that triggered, as configured
    pub keyword: String,
    /// The message that matched
    pub message: IncomingMessage,
    pub detected_at: DateTime<Utc>,
}

impl KeywordAlert {
    pub fn new(keyword: impl Into<String>, message: IncomingMessage) -> Self {
        Self {
            keyword: keyword.into(),
            message,
            detected_at: Utc::now(),
        }
    }

    /// Toast headline
    pub fn title(&self) -> String {
        format!("🔔 Keyword \"{}\" detected!", self.keyword)
    }

    /// Short body: author and a preview of the content
    pub fn body(&self, max_chars: usize) -> String {
        let content = self.message.text().unwrap_or_default();
        let preview = truncate_chars(content, max_chars);
        match &self.message.author_name {
            Some(author) => format!("{}: {}", author, preview),
            None => preview,
        }
    }
}

/// Truncate by char count, not bytes
fn truncate_chars(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let head: String = s.chars().take(max_chars).collect();
        format!("{}...", head)
    } else {
        s.to_string()
    }
}
