//! Engine configuration.

/// Tunable thresholds for outline inference.
///
/// Every heuristic constant the pipeline relies on is exposed here as a
/// named value so it can be calibrated against real documents instead of
/// living inline in the stage logic.
#[derive(Debug, Clone)]
pub struct EngineOptions {
    /// Maximum nesting level the engine exposes (1-3).
    pub max_level: u8,

    /// Horizontal slack, in page units, when comparing indentation
    /// positions. Absorbs sub-pixel layout jitter.
    pub indent_tolerance: f32,

    /// Fraction of the page height treated as header/footer chrome on the
    /// first page. Title and cover pages carry proportionally more chrome.
    pub first_page_margin_ratio: f32,

    /// Header/footer margin fraction for pages after the first.
    pub margin_ratio: f32,

    /// A line ending in a period with more than this many words is prose,
    /// not a heading candidate.
    pub prose_word_limit: usize,

    /// A numbered line longer than this many words is an enumerated
    /// statement rather than a section title.
    pub numbered_heading_word_limit: usize,

    /// Maximum word count for a fully upper-case heading.
    pub upper_heading_max_words: usize,

    /// Maximum word count for a title-case heading ending with a colon.
    pub colon_heading_max_words: usize,

    /// Maximum word count for a title-case heading without a colon.
    pub title_heading_max_words: usize,
}

impl EngineOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum exposed nesting level (clamped to 1-3).
    pub fn with_max_level(mut self, level: u8) -> Self {
        self.max_level = level.clamp(1, 3);
        self
    }

    /// Set the indentation comparison tolerance.
    pub fn with_indent_tolerance(mut self, tolerance: f32) -> Self {
        self.indent_tolerance = tolerance;
        self
    }

    /// Set the first-page margin band ratio.
    pub fn with_first_page_margin_ratio(mut self, ratio: f32) -> Self {
        self.first_page_margin_ratio = ratio;
        self
    }

    /// Set the margin band ratio for pages after the first.
    pub fn with_margin_ratio(mut self, ratio: f32) -> Self {
        self.margin_ratio = ratio;
        self
    }

    /// Set the prose word-count threshold.
    pub fn with_prose_word_limit(mut self, limit: usize) -> Self {
        self.prose_word_limit = limit;
        self
    }

    /// Set the numbered-heading word-count threshold.
    pub fn with_numbered_heading_word_limit(mut self, limit: usize) -> Self {
        self.numbered_heading_word_limit = limit;
        self
    }
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            max_level: 3,
            indent_tolerance: 5.0,
            first_page_margin_ratio: 0.20,
            margin_ratio: 0.11,
            prose_word_limit: 10,
            numbered_heading_word_limit: 10,
            upper_heading_max_words: 6,
            colon_heading_max_words: 8,
            title_heading_max_words: 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_builder() {
        let options = EngineOptions::new()
            .with_max_level(2)
            .with_indent_tolerance(8.0)
            .with_prose_word_limit(15);

        assert_eq!(options.max_level, 2);
        assert_eq!(options.indent_tolerance, 8.0);
        assert_eq!(options.prose_word_limit, 15);
    }

    #[test]
    fn test_max_level_clamped() {
        assert_eq!(EngineOptions::new().with_max_level(0).max_level, 1);
        assert_eq!(EngineOptions::new().with_max_level(9).max_level, 3);
    }
}
