//! Outline deduplication.

use std::collections::HashSet;

use unicode_normalization::UnicodeNormalization;

use crate::model::{HeadingLevel, OutlineEntry};

/// Collapse repeated entries, keeping the first occurrence in order.
///
/// Two entries are duplicates when their case-insensitive, whitespace-
/// normalized text, page, and level all match — a heading repeated as a
/// running title collapses, while the same text on another page stays.
pub fn dedupe(entries: Vec<OutlineEntry>) -> Vec<OutlineEntry> {
    let mut seen: HashSet<(String, u32, HeadingLevel)> = HashSet::new();
    let mut result = Vec::with_capacity(entries.len());

    for entry in entries {
        let key = (normalize_text(&entry.text), entry.page, entry.level);
        if seen.insert(key) {
            result.push(entry);
        }
    }

    result
}

/// NFC-normalize, lowercase, and collapse runs of whitespace.
fn normalize_text(text: &str) -> String {
    text.nfc()
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
