//! Data model types for outline inference.
//!
//! This module defines the fragment records supplied by an external
//! document renderer and the outline entries the engine produces. The
//! model is renderer-agnostic: any extractor that can report line text
//! with page and position metadata can feed the pipeline.

mod fragment;
mod outline;

pub use fragment::{BlockKind, ClassifiedFragment, TextFragment};
pub use outline::{HeadingLevel, Outline, OutlineEntry};
