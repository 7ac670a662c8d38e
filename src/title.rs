//! Document title inference from first-page fragments.

use regex::Regex;

use crate::model::TextFragment;

/// Fraction of the first page scanned for a title candidate.
const TITLE_ZONE_RATIO: f32 = 0.4;

/// Acceptable title length, exclusive bounds.
const MIN_TITLE_LEN: usize = 10;
const MAX_TITLE_LEN: usize = 200;

/// Pick a document title from the fragments of the first page.
///
/// Scans the top portion of the first page in reading order and returns
/// the first line that looks like body content rather than chrome: long
/// enough to be a title, not a bare number, and not a page, version, or
/// copyright marker. Returns `None` when no fragment qualifies.
pub fn infer_title(fragments: &[TextFragment]) -> Option<String> {
    let first_page = fragments.iter().map(|f| f.page).min()?;
    let chrome = Regex::new(r"(?i)^(page\b|version\b|copyright\b|©)").unwrap();

    fragments
        .iter()
        .filter(|f| f.page == first_page)
        .filter(|f| f.vertical_ratio() < TITLE_ZONE_RATIO)
        .find(|f| {
            let text = f.text.trim();
            text.len() > MIN_TITLE_LEN
                && text.len() < MAX_TITLE_LEN
                && !text.chars().all(|c| c.is_ascii_digit())
                && !chrome.is_match(text)
        })
        .map(|f| f.text.trim().to_string())
}
