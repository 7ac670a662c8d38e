//! Positioned text fragments — the input side of the pipeline.

use serde::{Deserialize, Serialize};

/// One line-level unit of text with page and positional metadata, as
/// produced by an external document renderer.
///
/// Coordinates use a top-left origin: `y_pos` grows downward, so a small
/// `y_pos` means the fragment sits near the top of the page. `page` is
/// 1-based and passes through the pipeline unrenumbered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextFragment {
    /// Trimmed text content, non-empty.
    pub text: String,
    /// 1-based page number.
    pub page: u32,
    /// Horizontal position of the fragment's left edge.
    pub x_pos: f32,
    /// Vertical position from the top of the page.
    pub y_pos: f32,
    /// Height of the page the fragment sits on, > 0.
    pub page_height: f32,
}

impl TextFragment {
    /// Create a new fragment. The text is trimmed on construction.
    pub fn new(
        text: impl Into<String>,
        page: u32,
        x_pos: f32,
        y_pos: f32,
        page_height: f32,
    ) -> Self {
        Self {
            text: text.into().trim().to_string(),
            page,
            x_pos,
            y_pos,
            page_height,
        }
    }

    /// Word count of the fragment text, split on ASCII whitespace.
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    /// Fraction of the page height at which the fragment sits (0.0 = top).
    pub fn vertical_ratio(&self) -> f32 {
        if self.page_height > 0.0 {
            self.y_pos / self.page_height
        } else {
            0.0
        }
    }
}

/// Structural role assigned to a fragment by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// A structural section title.
    Heading,
    /// An enumerated or bulleted content line.
    ListItem,
}

/// A fragment that survived filtering and received a structural role.
///
/// Fragments never hold two kinds; anything the classifier cannot place
/// is dropped before this type is constructed.
#[derive(Debug, Clone)]
pub struct ClassifiedFragment {
    /// The underlying fragment.
    pub fragment: TextFragment,
    /// The structural role.
    pub kind: BlockKind,
}

impl ClassifiedFragment {
    /// Pair a fragment with its classified role.
    pub fn new(fragment: TextFragment, kind: BlockKind) -> Self {
        Self { fragment, kind }
    }
}
