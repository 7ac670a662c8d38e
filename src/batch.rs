//! Parallel outline extraction over many documents.

use rayon::prelude::*;

use crate::engine::{EngineOptions, OutlineEngine};
use crate::model::{Outline, TextFragment};
use crate::title;

/// Extract an outline from every document in parallel.
///
/// Each document gets an isolated engine run with fresh state, so results
/// are identical to calling the engine sequentially, in input order. The
/// engine itself stays single-threaded per document; rayon only fans out
/// across documents.
pub fn extract_outlines(documents: &[Vec<TextFragment>], options: &EngineOptions) -> Vec<Outline> {
    documents
        .par_iter()
        .map(|fragments| {
            let engine = OutlineEngine::new(options.clone());
            let mut outline = Outline::from_entries(engine.extract(fragments));
            outline.title = title::infer_title(fragments);
            outline
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::HeadingLevel;

    fn doc(headings: &[&str]) -> Vec<TextFragment> {
        headings
            .iter()
            .enumerate()
            .map(|(i, text)| TextFragment::new(*text, 1, 72.0, 300.0 + i as f32 * 40.0, 800.0))
            .collect()
    }

    #[test]
    fn test_one_outline_per_document_in_order() {
        let documents = vec![
            doc(&["1. Alpha"]),
            doc(&["1. Beta", "1.1 Gamma"]),
            doc(&[]),
        ];

        let outlines = extract_outlines(&documents, &EngineOptions::default());
        assert_eq!(outlines.len(), 3);
        assert_eq!(outlines[0].entries[0].text, "1. Alpha");
        assert_eq!(outlines[1].entries[1].level, HeadingLevel::H2);
        assert!(outlines[2].is_empty());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let documents: Vec<Vec<TextFragment>> = (0..16)
            .map(|i| {
                let first = format!("{}. Section", i + 1);
                doc(&[first.as_str(), "1.1 Sub"])
            })
            .collect();

        let parallel = extract_outlines(&documents, &EngineOptions::default());

        let engine = OutlineEngine::default();
        let sequential: Vec<Vec<_>> = documents.iter().map(|d| engine.extract(d)).collect();

        for (outline, entries) in parallel.iter().zip(&sequential) {
            assert_eq!(&outline.entries, entries);
        }
    }
}
