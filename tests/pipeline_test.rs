//! Integration tests for the full outline inference pipeline.

use untoc::{
    extract_outline, extract_outline_with_options, EngineOptions, HeadingLevel, TextFragment,
    Untoc,
};

const PAGE_HEIGHT: f32 = 800.0;

fn frag(text: &str, page: u32, x: f32, y: f32) -> TextFragment {
    TextFragment::new(text, page, x, y, PAGE_HEIGHT)
}

/// Build a body-area fragment on a later page, clear of margin bands.
fn body(text: &str, x: f32, y: f32) -> TextFragment {
    frag(text, 2, x, y)
}

#[test]
fn test_levels_always_within_range() {
    let fragments = vec![
        body("1.2.3.4.5.6 Impossibly Deep", 72.0, 200.0),
        body("SECTION ONE", 40.0, 240.0),
        body("Subsection Alpha", 80.0, 280.0),
        body("Deeper Beta", 120.0, 320.0),
        body("Deepest Gamma", 160.0, 360.0),
        body("• trailing point", 180.0, 400.0),
    ];

    let outline = extract_outline(&fragments);
    assert!(!outline.is_empty());
    for entry in &outline.entries {
        let ordinal = entry.level.ordinal();
        assert!((1..=3).contains(&ordinal), "level out of range: {}", ordinal);
    }
}

#[test]
fn test_numbered_monotonicity() {
    let fragments = vec![
        body("1. A", 72.0, 200.0),
        body("1.1 B", 72.0, 240.0),
        body("1.1.1 C", 72.0, 280.0),
        body("1.2 D", 72.0, 320.0),
    ];

    let levels: Vec<HeadingLevel> = extract_outline(&fragments)
        .entries
        .iter()
        .map(|e| e.level)
        .collect();

    assert_eq!(
        levels,
        vec![
            HeadingLevel::H1,
            HeadingLevel::H2,
            HeadingLevel::H3,
            HeadingLevel::H2
        ]
    );
}

#[test]
fn test_indentation_inference() {
    let fragments = vec![
        body("First Title", 50.0, 200.0),
        body("Second Title", 70.0, 240.0),
        body("Third Title", 90.0, 280.0),
        body("Fourth Title", 50.0, 320.0),
    ];

    let levels: Vec<u8> = extract_outline(&fragments)
        .entries
        .iter()
        .map(|e| e.level.ordinal())
        .collect();

    assert_eq!(levels, vec![1, 2, 3, 1]);
}

#[test]
fn test_list_items_inherit_from_last_heading() {
    let fragments = vec![
        body("1.1 Requirements", 72.0, 200.0),
        body("• first requirement", 90.0, 240.0),
        body("a) lettered option", 90.0, 280.0),
    ];

    let outline = extract_outline(&fragments);
    assert_eq!(outline.entries[0].level, HeadingLevel::H2);
    // min(2 + 1, 3) for both markers
    assert_eq!(outline.entries[1].level, HeadingLevel::H3);
    assert_eq!(outline.entries[2].level, HeadingLevel::H3);
}

#[test]
fn test_running_title_deduplicated() {
    let fragments = vec![
        body("Introduction", 72.0, 200.0),
        body("INTRODUCTION", 72.0, 500.0),
    ];
    let outline = extract_outline(&fragments);
    assert_eq!(outline.len(), 1);

    // Same text on a different page is a separate entry.
    let fragments = vec![
        body("Introduction", 72.0, 200.0),
        frag("Introduction", 3, 72.0, 200.0),
    ];
    let outline = extract_outline(&fragments);
    assert_eq!(outline.len(), 2);
}

#[test]
fn test_first_page_margin_filtering() {
    // 20% down page 1 sits inside the wider first-page chrome band.
    let chrome = vec![frag("Chapter Overview", 1, 72.0, PAGE_HEIGHT * 0.19)];
    assert!(extract_outline(&chrome).is_empty());

    let content = vec![frag("Chapter Overview", 1, 72.0, PAGE_HEIGHT * 0.25)];
    assert_eq!(extract_outline(&content).len(), 1);
}

#[test]
fn test_noise_never_reaches_outline() {
    let fragments = vec![
        body("7", 72.0, 200.0),
        body("Page 7", 72.0, 220.0),
        body("Contents ......... 3", 72.0, 240.0),
        body("March 14, 2023", 72.0, 260.0),
        body("© 2023 Example Corp", 72.0, 280.0),
        body("1. Real Heading", 72.0, 320.0),
    ];

    let outline = extract_outline(&fragments);
    assert_eq!(outline.len(), 1);
    assert_eq!(outline.entries[0].text, "1. Real Heading");
}

#[test]
fn test_pipeline_idempotent() {
    let fragments = vec![
        body("1. Alpha", 72.0, 200.0),
        body("Styled Subtitle", 90.0, 240.0),
        body("• a list point", 100.0, 280.0),
    ];

    let first = extract_outline(&fragments);
    let second = extract_outline(&fragments);
    assert_eq!(first, second);
}

#[test]
fn test_empty_input_yields_empty_outline() {
    let outline = extract_outline(&[]);
    assert!(outline.is_empty());
    assert!(outline.title.is_none());
}

#[test]
fn test_max_level_option_applies_everywhere() {
    let options = EngineOptions::new().with_max_level(2);
    let fragments = vec![
        body("1.1.1 Deep Numbering", 72.0, 200.0),
        body("• list item", 90.0, 240.0),
    ];

    let outline = extract_outline_with_options(&fragments, &options);
    assert!(outline.entries.iter().all(|e| e.level.ordinal() <= 2));
}

#[test]
fn test_mixed_numbering_and_indentation() {
    // Numbering reseeds the indent stack, so a styled heading at a
    // shallower x pops back out to level 1.
    let fragments = vec![
        body("2.1 Numbered Inner", 120.0, 200.0),
        body("Styled Outer", 60.0, 240.0),
    ];

    let levels: Vec<u8> = extract_outline(&fragments)
        .entries
        .iter()
        .map(|e| e.level.ordinal())
        .collect();
    assert_eq!(levels, vec![2, 1]);
}

#[test]
fn test_title_inference_on_first_page() {
    let fragments = vec![
        frag("Page 1", 1, 72.0, 10.0),
        frag("Feasibility Study for the Harbor", 1, 72.0, 180.0),
        frag("1. Introduction", 1, 72.0, 300.0),
    ];

    let outline = extract_outline(&fragments);
    assert_eq!(
        outline.title.as_deref(),
        Some("Feasibility Study for the Harbor")
    );

    let untitled = Untoc::new().without_title().extract(&fragments);
    assert!(untitled.title.is_none());
}
