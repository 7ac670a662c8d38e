//! Serializing outlines to JSON.

use crate::error::Result;
use crate::model::Outline;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Human-readable, indented output.
    #[default]
    Pretty,
    /// Single-line output.
    Compact,
}

/// Serialize an outline to a JSON string.
///
/// The persisted shape is a title field plus an ordered `outline` list of
/// `{level, text, page}` records, with levels rendered as `"H1"`–`"H3"`.
/// Page numbers pass through in the input's convention, unrenumbered.
pub fn to_json(outline: &Outline, format: JsonFormat) -> Result<String> {
    let json = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(outline)?,
        JsonFormat::Compact => serde_json::to_string(outline)?,
    };
    Ok(json)
}
