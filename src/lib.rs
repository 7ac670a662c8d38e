//! # untoc
//!
//! Structural outline inference from positioned document text.
//!
//! Given a flat sequence of text fragments annotated with page number,
//! position, and page geometry — as produced by any document renderer —
//! untoc decides which fragments are structural headings versus list
//! items versus noise, and assigns each a nesting level (H1/H2/H3) by
//! reconciling explicit numbering conventions with visual indentation.
//!
//! ## Quick Start
//!
//! ```
//! use untoc::{extract_outline, TextFragment};
//!
//! let fragments = vec![
//!     TextFragment::new("1. Introduction", 1, 72.0, 300.0, 792.0),
//!     TextFragment::new("1.1 Scope", 1, 72.0, 360.0, 792.0),
//! ];
//!
//! let outline = extract_outline(&fragments);
//! assert_eq!(outline.len(), 2);
//! ```
//!
//! ## Features
//!
//! - **Numbering-aware leveling**: "2.1.3" prefixes map directly to depth
//! - **Indentation inference**: un-numbered headings nest by x-position
//! - **Noise filtering**: page numbers, running headers/footers, TOC
//!   leader lines, dates, and prose never reach the outline
//! - **Batch processing**: many documents in parallel via Rayon

pub mod batch;
pub mod engine;
pub mod error;
pub mod input;
pub mod model;
pub mod output;
pub mod title;

// Re-export commonly used types
pub use engine::{
    BlockClassifier, EngineOptions, LevelAssigner, LevelState, LineFilter, OutlineEngine,
};
pub use error::{Error, Result};
pub use input::{fragments_from_file, fragments_from_json_str, fragments_from_reader};
pub use model::{BlockKind, ClassifiedFragment, HeadingLevel, Outline, OutlineEntry, TextFragment};
pub use output::{to_json, JsonFormat};
pub use title::infer_title;

/// Infer an outline from a fragment sequence with default options.
///
/// The returned outline carries an inferred title when the first page
/// offers a plausible candidate.
pub fn extract_outline(fragments: &[TextFragment]) -> Outline {
    extract_outline_with_options(fragments, &EngineOptions::default())
}

/// Infer an outline with custom options.
///
/// # Example
///
/// ```
/// use untoc::{extract_outline_with_options, EngineOptions, TextFragment};
///
/// let options = EngineOptions::new().with_max_level(2);
/// let fragments = vec![TextFragment::new("1.1.1 Deep", 1, 72.0, 300.0, 792.0)];
/// let outline = extract_outline_with_options(&fragments, &options);
/// assert_eq!(outline.entries[0].level.ordinal(), 2);
/// ```
pub fn extract_outline_with_options(
    fragments: &[TextFragment],
    options: &EngineOptions,
) -> Outline {
    let engine = OutlineEngine::new(options.clone());
    let mut outline = Outline::from_entries(engine.extract(fragments));
    outline.title = title::infer_title(fragments);
    outline
}

/// Infer an outline and serialize it to JSON in one step.
pub fn outline_to_json(fragments: &[TextFragment], format: JsonFormat) -> Result<String> {
    output::to_json(&extract_outline(fragments), format)
}

/// Builder for configuring and running outline extraction.
///
/// # Example
///
/// ```
/// use untoc::Untoc;
///
/// let outline = Untoc::new()
///     .with_max_level(2)
///     .without_title()
///     .extract(&[]);
/// assert!(outline.is_empty());
/// ```
pub struct Untoc {
    options: EngineOptions,
    infer_title: bool,
}

impl Untoc {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            options: EngineOptions::default(),
            infer_title: true,
        }
    }

    /// Set the maximum exposed nesting level.
    pub fn with_max_level(mut self, level: u8) -> Self {
        self.options = self.options.with_max_level(level);
        self
    }

    /// Set the indentation comparison tolerance.
    pub fn with_indent_tolerance(mut self, tolerance: f32) -> Self {
        self.options = self.options.with_indent_tolerance(tolerance);
        self
    }

    /// Replace the full option set.
    pub fn with_options(mut self, options: EngineOptions) -> Self {
        self.options = options;
        self
    }

    /// Skip title inference.
    pub fn without_title(mut self) -> Self {
        self.infer_title = false;
        self
    }

    /// Run the pipeline over a fragment sequence.
    pub fn extract(&self, fragments: &[TextFragment]) -> Outline {
        let engine = OutlineEngine::new(self.options.clone());
        let mut outline = Outline::from_entries(engine.extract(fragments));
        if self.infer_title {
            outline.title = title::infer_title(fragments);
        }
        outline
    }
}

impl Default for Untoc {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let untoc = Untoc::new();
        assert_eq!(untoc.options.max_level, 3);
        assert!(untoc.infer_title);
    }

    #[test]
    fn test_builder_chained() {
        let untoc = Untoc::new()
            .with_max_level(2)
            .with_indent_tolerance(8.0)
            .without_title();

        assert_eq!(untoc.options.max_level, 2);
        assert_eq!(untoc.options.indent_tolerance, 8.0);
        assert!(!untoc.infer_title);
    }

    #[test]
    fn test_extract_outline_empty_input() {
        let outline = extract_outline(&[]);
        assert!(outline.is_empty());
        assert!(outline.title.is_none());
    }

    #[test]
    fn test_outline_to_json_smoke() {
        let fragments = vec![TextFragment::new("1. Overview", 1, 72.0, 300.0, 792.0)];
        let json = outline_to_json(&fragments, JsonFormat::Compact).unwrap();
        assert!(json.contains("\"1. Overview\""));
    }
}
