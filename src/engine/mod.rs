//! The outline inference pipeline.
//!
//! Four stages run in page-then-vertical-position order, each consuming
//! the previous stage's output: line filtering, block classification,
//! level assignment, and deduplication. [`OutlineEngine`] wires them
//! together and holds the compiled patterns so repeated runs reuse them.

mod classify;
mod dedupe;
mod filter;
mod level;
mod options;

pub use classify::BlockClassifier;
pub use dedupe::dedupe;
pub use filter::LineFilter;
pub use level::{LevelAssigner, LevelState};
pub use options::EngineOptions;

use crate::model::{ClassifiedFragment, OutlineEntry, TextFragment};

/// The classification-and-leveling engine.
///
/// One engine can process any number of documents: all per-document state
/// lives in a fresh [`LevelState`] per [`extract`](Self::extract) call, so
/// runs are isolated and idempotent.
pub struct OutlineEngine {
    filter: LineFilter,
    classifier: BlockClassifier,
    assigner: LevelAssigner,
}

impl OutlineEngine {
    /// Create an engine with the given options.
    pub fn new(options: EngineOptions) -> Self {
        Self {
            filter: LineFilter::new(options.clone()),
            classifier: BlockClassifier::new(options.clone()),
            assigner: LevelAssigner::new(options),
        }
    }

    /// Infer outline entries from a fragment sequence.
    ///
    /// The input is expected in page-ascending, then y-ascending order;
    /// the engine assumes but does not enforce this precondition. An
    /// empty input yields an empty outline, never an error.
    pub fn extract(&self, fragments: &[TextFragment]) -> Vec<OutlineEntry> {
        let mut state = LevelState::new();
        let mut entries = Vec::new();
        let mut filtered = 0usize;
        let mut unclassified = 0usize;

        for fragment in fragments {
            if self.filter.is_ignorable(fragment) {
                filtered += 1;
                continue;
            }

            let Some(kind) = self.classifier.classify(fragment) else {
                unclassified += 1;
                continue;
            };

            let classified = ClassifiedFragment::new(fragment.clone(), kind);
            entries.push(self.assigner.assign(&mut state, &classified));
        }

        log::debug!(
            "outline pass: {} fragments, {} filtered, {} unclassified, {} entries",
            fragments.len(),
            filtered,
            unclassified,
            entries.len()
        );

        dedupe(entries)
    }
}

impl Default for OutlineEngine {
    fn default() -> Self {
        Self::new(EngineOptions::default())
    }
}
