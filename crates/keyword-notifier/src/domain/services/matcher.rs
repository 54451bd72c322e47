//! KeywordMatcher
//!
//! Decides whether one message should raise a notification and which keyword
//! triggered it. Pure: no I/O, no logging, nothing cached between calls.
//!
//! A message matches when all of these hold:
//! - it has non-empty content
//! - some configured keyword occurs in it as a whole word (first in list order wins)
//! - its guild passes the server filter and its channel passes the channel filter
//! - the [`NegationGuard`] does not veto it

use crate::domain::entities::{IncomingMessage, Settings};
use crate::domain::value_objects::MatchResult;

use super::NegationGuard;

pub struct KeywordMatcher;

impl KeywordMatcher {
    /// Evaluate one message against a settings snapshot
    pub fn evaluate(settings: &Settings, message: &IncomingMessage) -> MatchResult {
        let Some(content) = message.text() else {
            return MatchResult::NoMatch;
        };

        let keywords = settings.keyword_list();
        if keywords.is_empty() {
            return MatchResult::NoMatch;
        }

        let content = content.to_lowercase();
        let Some(keyword) = keywords.first_match(&content) else {
            return MatchResult::NoMatch;
        };

        let in_scope = settings
            .server_filter()
            .allows(message.guild_id.as_deref())
            && settings
                .channel_filter()
                .allows(message.channel_id.as_deref());

        if !in_scope || NegationGuard::vetoes(&content) {
            return MatchResult::NoMatch;
        }

        MatchResult::matched(keyword.as_str())
    }
}
