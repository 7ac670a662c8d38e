//! Line filtering — drops structural noise before classification.

use chrono::NaiveDate;
use regex::Regex;

use crate::model::TextFragment;

use super::EngineOptions;

/// Filter that recognizes fragments with no structural value: page
/// numbers, running headers and footers, copyright lines, table-of-
/// contents leader lines, and calendar dates.
pub struct LineFilter {
    options: EngineOptions,
    page_caption: Regex,
    copyright: Regex,
    toc_leader: Regex,
    calendar_date: Regex,
}

impl LineFilter {
    /// Create a new line filter with the given options.
    pub fn new(options: EngineOptions) -> Self {
        Self {
            options,
            page_caption: Regex::new(r"(?i)^page\s+\d+").unwrap(),
            copyright: Regex::new(r"(?i)^(©|\(c\)\s|copyright\b)").unwrap(),
            toc_leader: Regex::new(r"\.{3,}\s*\d+\s*$").unwrap(),
            calendar_date: Regex::new(
                r"(?i)^(january|february|march|april|may|june|july|august|september|october|november|december)\s+(\d{1,2}),?\s+(\d{4})$",
            )
            .unwrap(),
        }
    }

    /// Check whether a fragment is structural noise.
    ///
    /// Pure predicate: ignorable fragments are dropped before
    /// classification and never reach later stages.
    pub fn is_ignorable(&self, fragment: &TextFragment) -> bool {
        let text = fragment.text.trim();

        if text.is_empty() {
            return true;
        }

        // Purely numeric lines are page numbers or figure indices.
        if text.chars().all(|c| c.is_ascii_digit()) {
            return true;
        }

        if self.page_caption.is_match(text) || self.copyright.is_match(text) {
            return true;
        }

        // TOC entries carry leader dots and a trailing page number.
        if self.toc_leader.is_match(text) {
            return true;
        }

        if self.is_calendar_date(text) {
            return true;
        }

        if self.in_margin_band(fragment) {
            return true;
        }

        // A long line ending in a period reads as prose, not a heading.
        if text.ends_with('.') && fragment.word_count() > self.options.prose_word_limit {
            return true;
        }

        false
    }

    /// Check whether the fragment sits in the page's header or footer band.
    ///
    /// The first page uses a wider band: title and cover pages carry
    /// proportionally more non-content chrome.
    fn in_margin_band(&self, fragment: &TextFragment) -> bool {
        if fragment.page_height <= 0.0 {
            return false;
        }

        let ratio = if fragment.page <= 1 {
            self.options.first_page_margin_ratio
        } else {
            self.options.margin_ratio
        };

        let band = fragment.page_height * ratio;
        fragment.y_pos < band || fragment.y_pos > fragment.page_height - band
    }

    /// Match "month day, year" lines, accepting only real calendar dates.
    fn is_calendar_date(&self, text: &str) -> bool {
        let Some(caps) = self.calendar_date.captures(text) else {
            return false;
        };

        let month = month_number(&caps[1]);
        let day: u32 = match caps[2].parse() {
            Ok(d) => d,
            Err(_) => return false,
        };
        let year: i32 = match caps[3].parse() {
            Ok(y) => y,
            Err(_) => return false,
        };

        NaiveDate::from_ymd_opt(year, month, day).is_some()
    }
}

fn month_number(name: &str) -> u32 {
    match name.to_ascii_lowercase().as_str() {
        "january" => 1,
        "february" => 2,
        "march" => 3,
        "april" => 4,
        "may" => 5,
        "june" => 6,
        "july" => 7,
        "august" => 8,
        "september" => 9,
        "october" => 10,
        "november" => 11,
        "december" => 12,
        _ => 0,
    }
}
