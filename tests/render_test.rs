//! End-to-end rendering tests: chapter source -> parse -> styled blocks.

use std::cell::RefCell;

use lection::{
    BibleReference, ChapterSource, FontKind, FootnoteMode, RenderOptions, Result, TextCategory,
    VersionMetadata, VersionRendering,
};

/// Source serving a fixed markup string, recording fetches and
/// invalidations.
struct FixedSource {
    markup: RefCell<String>,
    replacement: Option<String>,
    fetches: RefCell<u32>,
    invalidations: RefCell<u32>,
}

impl FixedSource {
    fn new(markup: &str) -> Self {
        Self {
            markup: RefCell::new(markup.to_string()),
            replacement: None,
            fetches: RefCell::new(0),
            invalidations: RefCell::new(0),
        }
    }

    /// After invalidation, subsequent fetches serve `replacement`.
    fn with_replacement(markup: &str, replacement: &str) -> Self {
        Self {
            replacement: Some(replacement.to_string()),
            ..Self::new(markup)
        }
    }
}

impl ChapterSource for FixedSource {
    fn chapter_markup(&self, _version_id: u32, _book_code: &str, _chapter: u32) -> Result<String> {
        *self.fetches.borrow_mut() += 1;
        Ok(self.markup.borrow().clone())
    }

    fn invalidate(&self, _version_id: u32, _book_code: &str, _chapter: u32) {
        *self.invalidations.borrow_mut() += 1;
        if let Some(replacement) = &self.replacement {
            *self.markup.borrow_mut() = replacement.clone();
        }
    }

    fn version_metadata(&self, _version_id: u32) -> Result<VersionMetadata> {
        Ok(VersionMetadata {
            book_codes: vec!["GEN".to_string()],
            text_direction: Default::default(),
        })
    }
}

const PSALM_117: &str = r#"<div><div class="q1"><span class="yv-v" v="1"></span><span class="yv-vlbl">1</span>Praise the <span class="nd">Lord</span>, all you nations;</div></div>"#;

// ============================================================================
// Styled output
// ============================================================================

#[test]
fn test_verse_window_rendering() {
    let source = FixedSource::new(PSALM_117);
    let rendering = VersionRendering::new(&source);
    let reference = BibleReference::verse(1, "GEN", 1, 1).unwrap();

    let blocks = rendering
        .text_blocks(&reference, &RenderOptions::default())
        .unwrap()
        .expect("content should be available");

    assert_eq!(blocks.len(), 1);
    let text = &blocks[0].text;
    assert_eq!(text.text(), "1\u{a0}Praise the Lord, all you nations;");

    let runs = text.runs();
    assert_eq!(runs.len(), 4);

    assert_eq!(runs[0].style.category, TextCategory::VerseLabel);
    assert_eq!(text.run_text(&runs[0]), "1\u{a0}");

    assert_eq!(text.run_text(&runs[1]), "Praise the ");
    assert_eq!(runs[1].style.font, FontKind::Regular);
    assert_eq!(text.run_text(&runs[2]), "Lord");
    assert_eq!(runs[2].style.font, FontKind::SmallCaps);
    assert_eq!(text.run_text(&runs[3]), ", all you nations;");

    // Every scripture run maps back to verse 1.
    for run in &runs[1..] {
        assert_eq!(run.style.category, TextCategory::Scripture);
        let tag = run.style.verse.as_ref().expect("scripture run is tagged");
        assert_eq!(tag.to_string(), "1:GEN:1:1");
    }
}

#[test]
fn test_verse_window_excludes_other_verses() {
    let markup = r#"<div><div class="p"><span class="yv-v" v="1"></span><span class="yv-vlbl">1</span>first <span class="yv-v" v="2"></span><span class="yv-vlbl">2</span>second</div></div>"#;
    let source = FixedSource::new(markup);
    let rendering = VersionRendering::new(&source);

    let reference = BibleReference::verse(1, "GEN", 1, 2).unwrap();
    let blocks = rendering
        .text_blocks(&reference, &RenderOptions::default())
        .unwrap()
        .unwrap();
    assert_eq!(blocks[0].text.text(), "2\u{a0}second");

    // The whole-chapter reference renders everything.
    let whole = BibleReference::chapter(1, "GEN", 1).unwrap();
    let blocks = rendering
        .text_blocks(&whole, &RenderOptions::default())
        .unwrap()
        .unwrap();
    assert_eq!(blocks[0].text.text(), "1\u{a0}first 2\u{a0}second");
}

#[test]
fn test_table_block() {
    let markup = "<div><table><tr><td>Aleph</td><td>Ox</td></tr><tr><td>Beth</td><td>House</td></tr></table></div>";
    let source = FixedSource::new(markup);
    let rendering = VersionRendering::new(&source);
    let reference = BibleReference::chapter(1, "GEN", 1).unwrap();

    let blocks = rendering
        .text_blocks(&reference, &RenderOptions::default())
        .unwrap()
        .unwrap();
    assert_eq!(blocks.len(), 1);
    let table = &blocks[0];
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0].len(), 2);
    assert_eq!(table.rows[1].len(), 2);
    assert!(table.text.is_empty());
    assert_eq!(table.rows[1][0].text(), "Beth");
}

#[test]
fn test_footnote_collected_per_block() {
    let markup = r#"<div><div class="p"><span class="yv-v" v="1"></span>word<span class="yv-n f"><span class="ft">meaning uncertain</span></span></div><div class="p"><span class="yv-v" v="2"></span>plain</div></div>"#;
    let source = FixedSource::new(markup);
    let rendering = VersionRendering::new(&source);
    let reference = BibleReference::chapter(1, "GEN", 1).unwrap();

    let options = RenderOptions {
        show_verse_numbers: false,
        footnotes: FootnoteMode::Marker("*".to_string()),
        ..Default::default()
    };
    let blocks = rendering.text_blocks(&reference, &options).unwrap().unwrap();
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].text.text(), "word*");
    assert_eq!(blocks[0].footnotes.len(), 1);
    assert_eq!(blocks[0].footnotes[0].text(), "meaning uncertain");
    assert!(blocks[1].footnotes.is_empty());
}

// ============================================================================
// Source interaction
// ============================================================================

#[test]
fn test_single_fetch_for_good_content() {
    let source = FixedSource::new(PSALM_117);
    let rendering = VersionRendering::new(&source);
    let reference = BibleReference::chapter(1, "GEN", 1).unwrap();

    rendering
        .text_blocks(&reference, &RenderOptions::default())
        .unwrap();
    assert_eq!(*source.fetches.borrow(), 1);
    assert_eq!(*source.invalidations.borrow(), 0);
}

#[test]
fn test_empty_tree_invalidates_and_retries_once() {
    let source = FixedSource::with_replacement("<div></div>", PSALM_117);
    let rendering = VersionRendering::new(&source);
    let reference = BibleReference::chapter(1, "GEN", 1).unwrap();

    let blocks = rendering
        .text_blocks(&reference, &RenderOptions::default())
        .unwrap()
        .expect("replacement content should render");
    assert_eq!(*source.fetches.borrow(), 2);
    assert_eq!(*source.invalidations.borrow(), 1);
    assert_eq!(blocks.len(), 1);
}

#[test]
fn test_still_empty_after_retry_returns_none() {
    let source = FixedSource::new("<div></div>");
    let rendering = VersionRendering::new(&source);
    let reference = BibleReference::chapter(1, "GEN", 1).unwrap();

    let blocks = rendering
        .text_blocks(&reference, &RenderOptions::default())
        .unwrap();
    assert!(blocks.is_none());
    assert_eq!(*source.fetches.borrow(), 2);
    assert_eq!(*source.invalidations.borrow(), 1);
}

#[test]
fn test_source_error_passes_through() {
    struct FailingSource;

    impl ChapterSource for FailingSource {
        fn chapter_markup(&self, _: u32, _: &str, _: u32) -> Result<String> {
            Err(lection::Error::source(std::io::Error::other("offline")))
        }
        fn version_metadata(&self, _: u32) -> Result<VersionMetadata> {
            Ok(VersionMetadata::default())
        }
    }

    let rendering = VersionRendering::new(&FailingSource);
    let reference = BibleReference::chapter(1, "GEN", 1).unwrap();
    let err = rendering
        .text_blocks(&reference, &RenderOptions::default())
        .unwrap_err();
    assert!(matches!(err, lection::Error::Source(_)));
}

#[test]
fn test_malformed_markup_errors() {
    let source = FixedSource::new("<div><span></div>");
    let rendering = VersionRendering::new(&source);
    let reference = BibleReference::chapter(1, "GEN", 1).unwrap();

    let err = rendering
        .text_blocks(&reference, &RenderOptions::default())
        .unwrap_err();
    assert!(matches!(err, lection::Error::MarkupParse(_)));
}
