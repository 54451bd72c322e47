//! KeywordList - Ordered, literal, whole-word keywords

use regex::{Regex, RegexBuilder};

/// A single configured keyword, compiled once per parse
#[derive(Debug, Clone)]
pub struct Keyword {
    display: String,
    normalized: String,
    pattern: Option<Regex>,
}

impl Keyword {
    /// Build a keyword from a trimmed, non-empty token
    fn new(token: &str) -> Self {
        let normalized = token.to_lowercase();
        let pattern = RegexBuilder::new(&format!(r"\b{}\b", regex::escape(&normalized)))
            .case_insensitive(true)
            .build()
            .ok();
        Self {
            display: token.to_string(),
            normalized,
            pattern,
        }
    }

    /// Spelling as configured by the user
    pub fn as_str(&self) -> &str {
        &self.display
    }

    /// Lower-cased form used for matching
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Whether the keyword occurs in `content` as a whole word.
    ///
    /// The keyword is a literal: regex metacharacters are escaped. Word
    /// boundaries follow Unicode `\b`, so the keyword must not touch a
    /// letter, digit or underscore on either side. Accented letters count as
    /// letters: `xz` does not match inside `éxz`, unlike an ASCII-only
    /// boundary. A keyword whose pattern fails to compile never matches.
    pub fn occurs_in(&self, content: &str) -> bool {
        self.pattern
            .as_ref()
            .is_some_and(|re| re.is_match(content))
    }
}

impl PartialEq for Keyword {
    fn eq(&self, other: &Self) -> bool {
        self.display == other.display
    }
}

impl Eq for Keyword {}

/// Keywords in configured order. Empty lists never match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordList {
    keywords: Vec<Keyword>,
}

impl KeywordList {
    /// Split a comma-separated field into trimmed, non-empty keywords
    pub fn parse(raw: &str) -> Self {
        let keywords = raw
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(Keyword::new)
            .collect();
        Self { keywords }
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Keyword> {
        self.keywords.iter()
    }

    /// First keyword, in list order, occurring in `content`
    pub fn first_match(&self, content: &str) -> Option<&Keyword> {
        self.keywords.iter().find(|keyword| keyword.occurs_in(content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_and_drops_empty_tokens() {
        let list = KeywordList::parse(" XZ ,, DD,  ,Dragon ");
        let names: Vec<&str> = list.iter().map(Keyword::as_str).collect();
        assert_eq!(names, vec!["XZ", "DD", "Dragon"]);
    }

    #[test]
    fn test_parse_blank_is_empty() {
        assert!(KeywordList::parse("").is_empty());
        assert!(KeywordList::parse(" , ,").is_empty());
    }

    #[test]
    fn test_keyword_is_lowercased_for_matching() {
        let list = KeywordList::parse("Dragon");
        let keyword = list.iter().next().unwrap();
        assert_eq!(keyword.as_str(), "Dragon");
        assert_eq!(keyword.normalized(), "dragon");
    }

    #[test]
    fn test_whole_word_only() {
        let list = KeywordList::parse("xz");
        let keyword = list.iter().next().unwrap();
        assert!(keyword.occurs_in("xz is here"));
        assert!(keyword.occurs_in("look: xz!"));
        assert!(!keyword.occurs_in("xza"));
        assert!(!keyword.occurs_in("axz"));
        assert!(!keyword.occurs_in("xz_1"));
    }

    #[test]
    fn test_accented_neighbour_is_a_word_character() {
        let list = KeywordList::parse("xz");
        let keyword = list.iter().next().unwrap();
        assert!(!keyword.occurs_in("éxz"));
        assert!(keyword.occurs_in("é xz"));
    }

    #[test]
    fn test_pattern_is_compiled_at_parse_time() {
        let list = KeywordList::parse("DD, Dragon");
        assert!(list.iter().all(|keyword| keyword.pattern.is_some()));
        assert_eq!(list, KeywordList::parse("DD,Dragon"));
    }

    #[test]
    fn test_metacharacters_are_literal() {
        let list = KeywordList::parse("c.d");
        let keyword = list.iter().next().unwrap();
        assert!(keyword.occurs_in("see c.d now"));
        assert!(!keyword.occurs_in("see cxd now"));
    }

    #[test]
    fn test_first_match_follows_list_order() {
        let list = KeywordList::parse("DD,Dragon");
        let found = list.first_match("dragon and dd").map(Keyword::as_str);
        assert_eq!(found, Some("DD"));
    }
}
