//! Outline entries — the output side of the pipeline.

use serde::{Deserialize, Serialize};

/// Nesting level of an outline entry.
///
/// Serializes as `"H1"` / `"H2"` / `"H3"`, the conventional document
/// outline notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HeadingLevel {
    /// Top-level section.
    H1,
    /// Subsection.
    H2,
    /// Sub-subsection.
    H3,
}

impl HeadingLevel {
    /// Build a level from a depth, clamping to the `[1, 3]` range.
    ///
    /// A depth of 0 (no structure observed) clamps up to H1; depths past 3
    /// clamp down to H3.
    pub fn from_depth(depth: u8) -> Self {
        match depth {
            0 | 1 => HeadingLevel::H1,
            2 => HeadingLevel::H2,
            _ => HeadingLevel::H3,
        }
    }

    /// Ordinal of this level: 1 for H1 through 3 for H3.
    pub fn ordinal(self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
        }
    }
}

impl std::fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "H{}", self.ordinal())
    }
}

/// One heading or list-item occurrence in the final outline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlineEntry {
    /// Nesting level, always within the engine's configured maximum.
    pub level: HeadingLevel,
    /// Entry text, never empty.
    pub text: String,
    /// Page the entry appears on, in the input's numbering convention.
    pub page: u32,
}

impl OutlineEntry {
    /// Create a new outline entry.
    pub fn new(level: HeadingLevel, text: impl Into<String>, page: u32) -> Self {
        Self {
            level,
            text: text.into(),
            page,
        }
    }
}

/// A document outline: an optional title plus ordered entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Outline {
    /// Inferred document title, if any.
    pub title: Option<String>,
    /// Entries in document order.
    #[serde(rename = "outline")]
    pub entries: Vec<OutlineEntry>,
}

impl Outline {
    /// Create a new empty outline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an outline from entries, without a title.
    pub fn from_entries(entries: Vec<OutlineEntry>) -> Self {
        Self {
            title: None,
            entries,
        }
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the outline has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
