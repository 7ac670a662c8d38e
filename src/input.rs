//! Loading fragment sequences from JSON.
//!
//! The wire format is the contract with the external document renderer:
//! a JSON array of fragment records. Loading validates each record
//! structurally; content-level oddities are left for the engine to drop.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::TextFragment;

/// Deserialize and validate fragments from a JSON string.
pub fn fragments_from_json_str(json: &str) -> Result<Vec<TextFragment>> {
    let fragments: Vec<TextFragment> = serde_json::from_str(json)?;
    validate(&fragments)?;
    Ok(fragments)
}

/// Deserialize and validate fragments from a reader.
pub fn fragments_from_reader<R: Read>(reader: R) -> Result<Vec<TextFragment>> {
    let fragments: Vec<TextFragment> = serde_json::from_reader(reader)?;
    validate(&fragments)?;
    Ok(fragments)
}

/// Deserialize and validate fragments from a file path.
pub fn fragments_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<TextFragment>> {
    let file = File::open(path)?;
    fragments_from_reader(BufReader::new(file))
}

/// Structural validation of a fragment sequence.
///
/// An empty sequence is valid — it yields an empty outline downstream.
fn validate(fragments: &[TextFragment]) -> Result<()> {
    for (index, fragment) in fragments.iter().enumerate() {
        if fragment.text.trim().is_empty() {
            return Err(Error::invalid_fragment(index, "empty text"));
        }
        if fragment.page == 0 {
            return Err(Error::invalid_fragment(index, "page must be 1-based"));
        }
        if !(fragment.page_height > 0.0) {
            return Err(Error::invalid_fragment(
                index,
                format!("page_height must be positive, got {}", fragment.page_height),
            ));
        }
    }
    Ok(())
}
