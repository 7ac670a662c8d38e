//! Block classification — labels fragments as headings or list items.

use regex::Regex;

use crate::model::{BlockKind, TextFragment};

use super::EngineOptions;

/// Words that open ordinary sentences rather than section titles. A line
/// starting with one of these never qualifies via the styled-heading rule.
const SENTENCE_STARTERS: &[&str] = &[
    "the", "this", "in", "at", "for", "with", "from", "by", "an", "a", "it", "as", "on", "to",
    "of", "and", "or", "but", "however",
];

/// Connector words allowed in lowercase inside a title-case line.
const TITLE_CONNECTORS: &[&str] = &[
    "a", "an", "the", "of", "and", "or", "in", "on", "for", "to", "with", "at", "by",
];

/// Classifier assigning each surviving fragment a structural role.
///
/// Rules form an explicit ordered chain evaluated first-match-wins, so the
/// precedence between list markers, numbered prefixes, and visual style is
/// visible and each rule stays independently testable.
pub struct BlockClassifier {
    options: EngineOptions,
    list_marker: Regex,
    numbered_prefix: Regex,
}

type Rule = fn(&BlockClassifier, &TextFragment) -> Option<BlockKind>;

impl BlockClassifier {
    /// The rule chain, in precedence order. List markers are unambiguous
    /// and must not be reinterpreted as numbered headings, so they come
    /// first; the styled-heading heuristics run last.
    const RULES: &'static [(&'static str, Rule)] = &[
        ("list-marker", Self::match_list_marker),
        ("numbered-prefix", Self::match_numbered_prefix),
        ("styled-heading", Self::match_styled_heading),
    ];

    /// Create a new classifier with the given options.
    pub fn new(options: EngineOptions) -> Self {
        Self {
            options,
            list_marker: Regex::new(r"^([•●○▪‣◦*-]\s+|[a-z]\)\s+|\(?\d+\)\s+)").unwrap(),
            numbered_prefix: Regex::new(r"^(\d+(?:\.\d+)*)\.?\s+(.*)$").unwrap(),
        }
    }

    /// Classify a non-ignorable fragment, or drop it.
    pub fn classify(&self, fragment: &TextFragment) -> Option<BlockKind> {
        Self::RULES
            .iter()
            .find_map(|(_, rule)| rule(self, fragment))
    }

    /// Name of the first rule that matches, for diagnostics.
    pub fn matching_rule(&self, fragment: &TextFragment) -> Option<&'static str> {
        Self::RULES
            .iter()
            .find(|(_, rule)| rule(self, fragment).is_some())
            .map(|(name, _)| *name)
    }

    /// Bullet glyphs, "a)" markers, and "(3)" / "3)" number markers.
    fn match_list_marker(&self, fragment: &TextFragment) -> Option<BlockKind> {
        if self.list_marker.is_match(&fragment.text) {
            Some(BlockKind::ListItem)
        } else {
            None
        }
    }

    /// "2.1.3 Title" style prefixes. A lowercase remainder or an overlong
    /// line is an enumerated statement; real section titles begin with a
    /// capitalized word and stay short.
    fn match_numbered_prefix(&self, fragment: &TextFragment) -> Option<BlockKind> {
        let caps = self.numbered_prefix.captures(&fragment.text)?;
        let content = caps.get(2).map(|m| m.as_str()).unwrap_or("");

        let starts_lowercase = content
            .chars()
            .next()
            .map(|c| c.is_lowercase())
            .unwrap_or(false);

        if starts_lowercase || fragment.word_count() > self.options.numbered_heading_word_limit {
            Some(BlockKind::ListItem)
        } else {
            Some(BlockKind::Heading)
        }
    }

    /// Un-numbered headings recognized by casing and length alone.
    fn match_styled_heading(&self, fragment: &TextFragment) -> Option<BlockKind> {
        let text = fragment.text.as_str();
        let first_word = text.split_whitespace().next()?;
        if SENTENCE_STARTERS.contains(&first_word.to_lowercase().as_str()) {
            return None;
        }

        let words = fragment.word_count();

        if is_all_uppercase(text) && words <= self.options.upper_heading_max_words {
            return Some(BlockKind::Heading);
        }

        if is_title_case(text) {
            if text.ends_with(':') && words <= self.options.colon_heading_max_words {
                return Some(BlockKind::Heading);
            }
            if words <= self.options.title_heading_max_words {
                return Some(BlockKind::Heading);
            }
        }

        None
    }
}

/// Check that every alphabetic character is uppercase, with at least one.
fn is_all_uppercase(text: &str) -> bool {
    let mut has_alpha = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            has_alpha = true;
            if !c.is_uppercase() {
                return false;
            }
        }
    }
    has_alpha
}

/// Check title case: the first word capitalized, every other word either
/// capitalized, a lowercase connector, or non-alphabetic.
fn is_title_case(text: &str) -> bool {
    let mut words = text.split_whitespace();

    let Some(first) = words.next() else {
        return false;
    };
    if !starts_uppercase(first) {
        return false;
    }

    words.all(|w| {
        starts_uppercase(w)
            || TITLE_CONNECTORS.contains(&w.to_lowercase().as_str())
            || !w.chars().next().map(char::is_alphabetic).unwrap_or(false)
    })
}

fn starts_uppercase(word: &str) -> bool {
    word.chars().next().map(char::is_uppercase).unwrap_or(false)
}
