//! Rendering engine: chapter markup to styled text blocks.
//!
//! [`VersionRendering`] fetches a chapter's markup through a
//! [`ChapterSource`], parses it into a [`TextNode`] tree and walks the tree
//! into ordered [`TextBlock`]s. The walk threads three cooperating state
//! values:
//!
//! - [`RenderConfig`] — read-only per call: the reference being rendered,
//!   the verse window, the option flags.
//! - [`Inherited`] — top-down, copied on descend: active font, alignment,
//!   text category, words-of-Christ and small-caps flags. Siblings never
//!   see each other's changes.
//! - [`Accumulated`] — bottom-up, mutated in place: the verse-window gate,
//!   pending indents and top margin, the in-progress styled text, collected
//!   footnotes, the current verse. Flushed into a completed block whenever
//!   a block or table boundary is crossed.

mod classes;
mod text;

pub use text::{
    Color, FontKind, HeaderLevel, RunStyle, StyledRun, StyledText, TextAlign, TextBlock,
    TextCategory, VerseTag,
};

use crate::error::Result;
use crate::markup::{self, NodeKind, TextNode};
use crate::reference::BibleReference;
use crate::source::ChapterSource;

use classes::{BlockEffect, InlineEffect};

/// Sentinel for a verse window that runs to the end of the chapter.
const VERSE_WINDOW_END: u32 = 999;

/// How footnote nodes are rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FootnoteMode {
    /// Footnote content is discarded; a single space takes its place.
    Hidden,
    /// Footnote content is rendered in brackets, inline with the text.
    Inline,
    /// The marker template is placed in the text; the footnote body is
    /// collected on the block's footnote list.
    Marker(String),
}

/// Rendering options, fixed for the duration of one `text_blocks` call.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub show_verse_numbers: bool,
    pub show_headlines: bool,
    pub footnotes: FootnoteMode,
    /// Base font size in points; indents and margins derive from it.
    pub base_font_size: f32,
    pub words_of_christ_color: Color,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_verse_numbers: true,
            show_headlines: true,
            footnotes: FootnoteMode::Marker("*".to_string()),
            base_font_size: 17.0,
            words_of_christ_color: Color::WOC_RED,
        }
    }
}

/// Read-only configuration shared by the whole walk.
struct RenderConfig<'a> {
    version_id: u32,
    book_code: &'a str,
    chapter: u32,
    from_verse: u32,
    to_verse: u32,
    options: &'a RenderOptions,
}

/// Top-down state. Copied on every descent; mutations are visible to the
/// subtree only.
#[derive(Debug, Clone, Copy)]
struct Inherited {
    font: FontKind,
    align: TextAlign,
    category: TextCategory,
    words_of_christ: bool,
    small_caps: bool,
    depth: u32,
}

impl Default for Inherited {
    fn default() -> Self {
        Self {
            font: FontKind::Regular,
            align: TextAlign::Start,
            category: TextCategory::Scripture,
            words_of_christ: false,
            small_caps: false,
            depth: 0,
        }
    }
}

impl Inherited {
    fn descend(mut self) -> Self {
        self.depth += 1;
        self
    }
}

/// Bottom-up state for one block subtree.
struct Accumulated {
    /// Whether the current position falls inside the requested verse
    /// window. Text appended while this is false is discarded.
    rendering: bool,
    head_indent: f32,
    rest_indent: f32,
    /// Pending top margin, consumed by the next flushed block.
    margin_top: f32,
    builder: StyledText,
    footnotes: Vec<StyledText>,
    /// Current verse number; 0 until the first verse marker.
    current_verse: u32,
}

impl Accumulated {
    fn new(rendering: bool) -> Self {
        Self {
            rendering,
            head_indent: 0.0,
            rest_indent: 0.0,
            margin_top: 0.0,
            builder: StyledText::new(),
            footnotes: Vec::new(),
            current_verse: 0,
        }
    }
}

/// Renders chapters of one Bible version into styled text blocks.
pub struct VersionRendering<'a, S: ChapterSource + ?Sized> {
    source: &'a S,
}

impl<'a, S: ChapterSource + ?Sized> VersionRendering<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Render the chapter `reference` points into, restricted to its verse
    /// window.
    ///
    /// Fetches the chapter markup for the whole-chapter key of `reference`,
    /// parses it and walks the tree. A markup tree with no content is
    /// treated as a corrupted cache entry: the chapter is invalidated on the
    /// source and fetched once more. Returns `Ok(None)` when the content is
    /// still empty after the retry; source errors propagate unchanged.
    pub fn text_blocks(
        &self,
        reference: &BibleReference,
        options: &RenderOptions,
    ) -> Result<Option<Vec<TextBlock>>> {
        let version_id = reference.version_id();
        let book_code = reference.book_code();
        let chapter = reference.chapter_number();

        let markup = self.source.chapter_markup(version_id, book_code, chapter)?;
        let mut tree = markup::parse(&markup)?;

        if !has_content(tree.as_ref()) {
            self.source.invalidate(version_id, book_code, chapter);
            let markup = self.source.chapter_markup(version_id, book_code, chapter)?;
            tree = markup::parse(&markup)?;
        }
        let Some(node) = tree.filter(|n| !n.children.is_empty()) else {
            return Ok(None);
        };

        let from_verse = reference.verse_start().unwrap_or(1);
        let cfg = RenderConfig {
            version_id,
            book_code,
            chapter,
            from_verse,
            to_verse: reference.verse_end().unwrap_or(VERSE_WINDOW_END),
            options,
        };

        let mut walker = Walker {
            cfg: &cfg,
            blocks: Vec::new(),
        };
        let mut acc = Accumulated::new(from_verse <= 1);
        walker.walk_block(&node, Inherited::default(), &mut acc);
        Ok(Some(walker.blocks))
    }
}

fn has_content(tree: Option<&TextNode>) -> bool {
    tree.is_some_and(|node| !node.children.is_empty())
}

/// The recursive walk over one parsed chapter tree.
struct Walker<'a> {
    cfg: &'a RenderConfig<'a>,
    blocks: Vec<TextBlock>,
}

impl Walker<'_> {
    fn walk_block(&mut self, node: &TextNode, inh: Inherited, acc: &mut Accumulated) {
        // Chapter labels are rendered by the UI itself.
        if node.has_class("cl") {
            return;
        }
        // Descriptive titles honor the headline toggle.
        if node.has_class("d") && !self.cfg.options.show_headlines {
            return;
        }

        let mut inh = inh.descend();
        let half_em = self.cfg.options.base_font_size / 2.0;
        // Indents are per paragraph; a block that sets none is flush.
        acc.head_indent = 0.0;
        acc.rest_indent = 0.0;
        for class in &node.classes {
            match classes::block_effect(class) {
                Some(BlockEffect::Indent { head, rest }) => {
                    acc.head_indent = head * half_em;
                    acc.rest_indent = rest * half_em;
                }
                Some(BlockEffect::AlignEnd) => inh.align = TextAlign::End,
                Some(BlockEffect::AlignCenter) => {
                    inh.align = TextAlign::Center;
                    inh.small_caps = true;
                    inh.font = FontKind::SmallCaps;
                    inh.category = TextCategory::Header;
                }
                Some(BlockEffect::DescriptiveTitle) => {
                    inh.font = FontKind::Italic;
                    inh.category = TextCategory::Header;
                }
                Some(BlockEffect::Header) => {
                    inh.font = FontKind::Header(classes::header_level(node));
                    inh.category = TextCategory::Header;
                    acc.margin_top = if node.has_class("mr") {
                        0.0
                    } else {
                        self.cfg.options.base_font_size
                    };
                }
                // Consumed by the Header arm via has_class("mr").
                Some(BlockEffect::MarginOverride) => {}
                None => {}
            }
        }

        // Remember this block's indents; a nested block overwrites them and
        // trailing inline content needs them back.
        let (head_indent, rest_indent) = (acc.head_indent, acc.rest_indent);

        for child in &node.children {
            match child.kind {
                NodeKind::Block => {
                    self.flush(&inh, acc);
                    self.walk_block(child, inh, acc);
                    acc.head_indent = head_indent;
                    acc.rest_indent = rest_indent;
                }
                NodeKind::Table => {
                    self.flush(&inh, acc);
                    self.walk_table(child, inh, acc);
                }
                NodeKind::Row | NodeKind::Cell => {
                    if cfg!(debug_assertions) {
                        log::debug!(
                            "table fragment <{}> outside a table at depth {}",
                            child.tag_name,
                            inh.depth
                        );
                    }
                }
                _ => self.walk_inline(child, inh, acc),
            }
        }
        self.flush(&inh, acc);
    }

    /// Complete the in-progress block, if any, and reset the builder state.
    fn flush(&mut self, inh: &Inherited, acc: &mut Accumulated) {
        if acc.builder.is_empty() {
            return;
        }
        self.blocks.push(TextBlock {
            text: std::mem::take(&mut acc.builder),
            chapter: self.cfg.chapter,
            rows: Vec::new(),
            head_indent: acc.head_indent,
            rest_indent: acc.rest_indent,
            margin_top: std::mem::take(&mut acc.margin_top),
            align: inh.align,
            footnotes: std::mem::take(&mut acc.footnotes),
        });
    }

    fn walk_inline(&mut self, node: &TextNode, inh: Inherited, acc: &mut Accumulated) {
        if node.kind == NodeKind::Text {
            if acc.rendering {
                acc.builder.push(&node.text, self.run_style(&inh, acc));
            }
            return;
        }

        // Cross references produce no output at all.
        if is_cross_reference(node) {
            return;
        }
        if is_footnote(node) {
            if acc.rendering {
                self.handle_footnote(node, &inh, acc);
            }
            return;
        }
        if is_verse_label(node) {
            self.handle_verse_label(node, &inh, acc);
            return;
        }

        let mut inh = inh.descend();
        for class in &node.classes {
            match classes::inline_effect(class) {
                Some(InlineEffect::WordsOfChrist) => inh.words_of_christ = true,
                Some(InlineEffect::VerseNumber) => {
                    if let Some(verse) = node.attr("v").and_then(|v| v.parse::<u32>().ok()) {
                        acc.current_verse = verse;
                        acc.rendering =
                            self.cfg.from_verse <= verse && verse <= self.cfg.to_verse;
                    }
                }
                Some(InlineEffect::SmallCaps) => {
                    inh.small_caps = true;
                    inh.font = FontKind::SmallCaps;
                }
                Some(InlineEffect::Italic) => {
                    // The small-caps flag is sticky within its subtree.
                    if !inh.small_caps {
                        inh.font = FontKind::Italic;
                    }
                }
                None => {}
            }
        }

        for child in &node.children {
            self.walk_inline(child, inh, acc);
        }
    }

    fn handle_verse_label(&mut self, node: &TextNode, inh: &Inherited, acc: &mut Accumulated) {
        if !self.cfg.options.show_verse_numbers || !acc.rendering {
            return;
        }
        let label = node.text_content();
        if label.is_empty() {
            return;
        }
        if !acc.builder.is_empty() && !acc.builder.ends_with_whitespace() {
            acc.builder.push(" ", self.run_style(inh, acc));
        }
        let style = RunStyle {
            font: FontKind::VerseLabel,
            color: None,
            category: TextCategory::VerseLabel,
            verse: self.verse_tag(acc),
        };
        acc.builder.push(&format!("{label}\u{a0}"), style);
    }

    fn handle_footnote(&mut self, node: &TextNode, inh: &Inherited, acc: &mut Accumulated) {
        let footnote_inh = Inherited {
            font: FontKind::Footnote,
            category: TextCategory::FootnoteText,
            ..*inh
        };
        match &self.cfg.options.footnotes {
            FootnoteMode::Hidden => {
                acc.builder.push(" ", self.run_style(inh, acc));
            }
            FootnoteMode::Marker(template) => {
                let marker = RunStyle {
                    font: FontKind::Footnote,
                    color: None,
                    category: TextCategory::FootnoteMarker,
                    verse: self.verse_tag(acc),
                };
                acc.builder.push(template, marker);

                // The footnote body renders into its own builder, outside
                // the verse window gate.
                let mut isolated = Accumulated::new(true);
                for child in &node.children {
                    self.walk_inline(child, footnote_inh, &mut isolated);
                }
                if !isolated.builder.is_empty() {
                    acc.footnotes.push(isolated.builder);
                }
            }
            FootnoteMode::Inline => {
                let bracket = RunStyle {
                    font: FontKind::Footnote,
                    color: None,
                    category: TextCategory::FootnoteText,
                    verse: self.verse_tag(acc),
                };
                acc.builder.push("[", bracket.clone());
                for child in &node.children {
                    self.walk_inline(child, footnote_inh, acc);
                }
                acc.builder.push("]", bracket);
            }
        }
    }

    fn walk_table(&mut self, node: &TextNode, inh: Inherited, acc: &mut Accumulated) {
        let mut rows: Vec<Vec<StyledText>> = Vec::new();
        let saved = std::mem::take(&mut acc.builder);

        for row in &node.children {
            if row.kind != NodeKind::Row {
                if cfg!(debug_assertions) {
                    log::debug!("non-row <{}> in table, skipped", row.tag_name);
                }
                continue;
            }
            let mut cells = Vec::new();
            for cell in &row.children {
                if cell.kind != NodeKind::Cell {
                    if cfg!(debug_assertions) {
                        log::debug!("non-cell <{}> in table row, skipped", cell.tag_name);
                    }
                    continue;
                }
                for child in &cell.children {
                    self.walk_inline(child, inh, acc);
                }
                let mut text = std::mem::take(&mut acc.builder);
                text.trim_end();
                cells.push(text);
            }
            if !cells.is_empty() {
                rows.push(cells);
            }
        }
        acc.builder = saved;

        if rows.is_empty() {
            return;
        }
        self.blocks.push(TextBlock {
            text: StyledText::new(),
            chapter: self.cfg.chapter,
            rows,
            head_indent: 0.0,
            rest_indent: 0.0,
            margin_top: self.cfg.options.base_font_size,
            align: inh.align,
            footnotes: std::mem::take(&mut acc.footnotes),
        });
    }

    /// Style for scripture-flow text under the current inherited state.
    fn run_style(&self, inh: &Inherited, acc: &Accumulated) -> RunStyle {
        RunStyle {
            font: inh.font,
            color: inh
                .words_of_christ
                .then_some(self.cfg.options.words_of_christ_color),
            category: inh.category,
            verse: self.verse_tag(acc),
        }
    }

    fn verse_tag(&self, acc: &Accumulated) -> Option<VerseTag> {
        (acc.current_verse > 0).then(|| VerseTag {
            version_id: self.cfg.version_id,
            book_code: self.cfg.book_code.to_string(),
            chapter: self.cfg.chapter,
            verse: acc.current_verse,
        })
    }
}

fn is_footnote(node: &TextNode) -> bool {
    node.has_class("yv-n") && node.has_class("f")
}

fn is_cross_reference(node: &TextNode) -> bool {
    node.has_class("rq") || (node.has_class("yv-n") && node.has_class("x"))
}

fn is_verse_label(node: &TextNode) -> bool {
    node.has_class("yv-vlbl") || node.has_class("vlbl")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_markup(markup: &str, options: &RenderOptions) -> Vec<TextBlock> {
        let node = markup::parse(markup).unwrap().expect("markup yields a node");
        let cfg = RenderConfig {
            version_id: 1,
            book_code: "GEN",
            chapter: 1,
            from_verse: 1,
            to_verse: VERSE_WINDOW_END,
            options,
        };
        let mut walker = Walker {
            cfg: &cfg,
            blocks: Vec::new(),
        };
        let mut acc = Accumulated::new(true);
        walker.walk_block(&node, Inherited::default(), &mut acc);
        walker.blocks
    }

    fn render(markup: &str) -> Vec<TextBlock> {
        render_markup(markup, &RenderOptions::default())
    }

    #[test]
    fn test_simple_paragraph() {
        let blocks = render(r#"<div><div class="p">In the beginning</div></div>"#);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].text.text(), "In the beginning");
        assert_eq!(blocks[0].head_indent, 17.0);
        assert_eq!(blocks[0].rest_indent, 0.0);
    }

    #[test]
    fn test_sibling_blocks_flush_separately() {
        let blocks = render(r#"<div><div class="q1">line one</div><div class="q2">line two</div></div>"#);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].text.text(), "line one");
        assert_eq!(blocks[1].text.text(), "line two");
        assert_eq!(blocks[1].head_indent, 3.0 * 8.5);
        assert_eq!(blocks[1].rest_indent, 4.0 * 8.5);
    }

    #[test]
    fn test_chapter_label_skipped() {
        let blocks = render(r#"<div><div class="cl">Chapter 1</div><div class="p">text</div></div>"#);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].text.text(), "text");
    }

    #[test]
    fn test_small_caps_span() {
        let blocks = render(
            r#"<div><div class="q1">Praise the <span class="nd">Lord</span>, all</div></div>"#,
        );
        let runs = blocks[0].text.runs();
        assert_eq!(blocks[0].text.text(), "Praise the Lord, all");
        assert_eq!(runs.len(), 3);
        assert_eq!(runs[0].style.font, FontKind::Regular);
        assert_eq!(runs[1].style.font, FontKind::SmallCaps);
        assert_eq!(blocks[0].text.run_text(&runs[1]), "Lord");
    }

    #[test]
    fn test_words_of_christ_color() {
        let blocks = render(r#"<div><div class="p"><span class="wj">Follow me</span></div></div>"#);
        let runs = blocks[0].text.runs();
        assert_eq!(runs[0].style.color, Some(Color::WOC_RED));
    }

    #[test]
    fn test_verse_label_emitted() {
        let blocks = render(
            r#"<div><div class="q1"><span class="yv-v" v="1"></span><span class="yv-vlbl">1</span>Praise</div></div>"#,
        );
        let text = &blocks[0].text;
        assert_eq!(text.text(), "1\u{a0}Praise");
        let label = &text.runs()[0];
        assert_eq!(label.style.font, FontKind::VerseLabel);
        assert_eq!(label.style.category, TextCategory::VerseLabel);
    }

    #[test]
    fn test_verse_label_suppressed_when_disabled() {
        let options = RenderOptions {
            show_verse_numbers: false,
            ..Default::default()
        };
        let blocks = render_markup(
            r#"<div><div class="q1"><span class="yv-v" v="1"></span><span class="yv-vlbl">1</span>Praise</div></div>"#,
            &options,
        );
        assert_eq!(blocks[0].text.text(), "Praise");
    }

    #[test]
    fn test_verse_label_space_separator() {
        let blocks = render(
            r#"<div><div class="p">before<span class="yv-v" v="2"></span><span class="yv-vlbl">2</span>after</div></div>"#,
        );
        assert_eq!(blocks[0].text.text(), "before 2\u{a0}after");
    }

    #[test]
    fn test_verse_reference_tagging() {
        let blocks = render(
            r#"<div><div class="q1"><span class="yv-v" v="3"></span>text of verse three</div></div>"#,
        );
        let runs = blocks[0].text.runs();
        let tag = runs[0].style.verse.as_ref().unwrap();
        assert_eq!(tag.to_string(), "1:GEN:1:3");
    }

    #[test]
    fn test_text_before_first_verse_has_no_tag() {
        let blocks = render(r#"<div><div class="p">untagged</div></div>"#);
        assert_eq!(blocks[0].text.runs()[0].style.verse, None);
    }

    #[test]
    fn test_cross_reference_ignored() {
        let blocks = render(
            r#"<div><div class="p">a<span class="yv-n x"><span class="xt">Isa 53</span></span>b<span class="rq">(Mal 3)</span></div></div>"#,
        );
        assert_eq!(blocks[0].text.text(), "ab");
    }

    #[test]
    fn test_footnote_marker_mode() {
        let options = RenderOptions {
            footnotes: FootnoteMode::Marker("#".to_string()),
            ..Default::default()
        };
        let blocks = render_markup(
            r#"<div><div class="p">before<span class="yv-n f"><span class="ft">Or <span class="it">despair</span></span></span>after</div></div>"#,
            &options,
        );
        let block = &blocks[0];
        assert_eq!(block.text.text(), "before#after");
        assert_eq!(block.footnotes.len(), 1);
        assert_eq!(block.footnotes[0].text(), "Or despair");
        let marker = &block.text.runs()[1];
        assert_eq!(marker.style.category, TextCategory::FootnoteMarker);
        // The body keeps its own italics but stays footnote-category.
        assert_eq!(
            block.footnotes[0].runs()[1].style.category,
            TextCategory::FootnoteText
        );
        assert_eq!(block.footnotes[0].runs()[1].style.font, FontKind::Italic);
    }

    #[test]
    fn test_footnote_inline_mode() {
        let options = RenderOptions {
            footnotes: FootnoteMode::Inline,
            ..Default::default()
        };
        let blocks = render_markup(
            r#"<div><div class="p">before<span class="yv-n f">note</span>after</div></div>"#,
            &options,
        );
        assert_eq!(blocks[0].text.text(), "before[note]after");
        assert!(blocks[0].footnotes.is_empty());
    }

    #[test]
    fn test_footnote_hidden_mode() {
        let options = RenderOptions {
            footnotes: FootnoteMode::Hidden,
            ..Default::default()
        };
        let blocks = render_markup(
            r#"<div><div class="p">before<span class="yv-n f">note</span>after</div></div>"#,
            &options,
        );
        assert_eq!(blocks[0].text.text(), "before after");
        assert!(blocks[0].footnotes.is_empty());
    }

    #[test]
    fn test_headline_toggle() {
        let markup = r#"<div><div class="d">A Psalm of David</div><div class="q1">text</div></div>"#;
        let on = render(markup);
        assert_eq!(on.len(), 2);
        assert_eq!(on[0].text.runs()[0].style.font, FontKind::Italic);
        assert_eq!(on[0].text.runs()[0].style.category, TextCategory::Header);

        let options = RenderOptions {
            show_headlines: false,
            ..Default::default()
        };
        let off = render_markup(markup, &options);
        assert_eq!(off.len(), 1);
        assert_eq!(off[0].text.text(), "text");
    }

    #[test]
    fn test_header_levels_and_margin() {
        let blocks = render(r#"<div><div class="yv-h ms1">BOOK ONE</div></div>"#);
        assert_eq!(
            blocks[0].text.runs()[0].style.font,
            FontKind::Header(HeaderLevel::H1)
        );
        assert_eq!(blocks[0].margin_top, 17.0);

        let blocks = render(r#"<div><div class="yv-h mr">Psalms 1-41</div></div>"#);
        assert_eq!(blocks[0].margin_top, 0.0);
    }

    #[test]
    fn test_centered_block() {
        let blocks = render(r#"<div><div class="qc">Selah</div></div>"#);
        assert_eq!(blocks[0].align, TextAlign::Center);
        assert_eq!(blocks[0].text.runs()[0].style.font, FontKind::SmallCaps);
    }

    #[test]
    fn test_end_aligned_block() {
        let blocks = render(r#"<div><div class="qr">his love endures</div></div>"#);
        assert_eq!(blocks[0].align, TextAlign::End);
    }

    #[test]
    fn test_table_rows_and_cells() {
        let blocks = render(
            "<div><table><tr><td>a </td><td>b</td></tr><tr><td>c</td><td>d</td></tr></table></div>",
        );
        assert_eq!(blocks.len(), 1);
        let table = &blocks[0];
        assert!(table.is_table());
        assert!(table.text.is_empty());
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].len(), 2);
        // Cell text is trimmed.
        assert_eq!(table.rows[0][0].text(), "a");
        assert_eq!(table.rows[1][1].text(), "d");
    }

    #[test]
    fn test_table_drops_empty_rows() {
        let blocks = render("<div><table><tr></tr></table></div>");
        assert!(blocks.is_empty());
    }

    #[test]
    fn test_verse_window_gates_text() {
        let markup = r#"<div><div class="p"><span class="yv-v" v="1"></span>one <span class="yv-v" v="2"></span>two <span class="yv-v" v="3"></span>three</div></div>"#;
        let node = markup::parse(markup).unwrap().unwrap();
        let options = RenderOptions {
            show_verse_numbers: false,
            ..Default::default()
        };
        let cfg = RenderConfig {
            version_id: 1,
            book_code: "GEN",
            chapter: 1,
            from_verse: 2,
            to_verse: 2,
            options: &options,
        };
        let mut walker = Walker {
            cfg: &cfg,
            blocks: Vec::new(),
        };
        // Window starts past verse 1, so rendering begins suppressed.
        let mut acc = Accumulated::new(false);
        walker.walk_block(&node, Inherited::default(), &mut acc);
        assert_eq!(walker.blocks.len(), 1);
        assert_eq!(walker.blocks[0].text.text(), "two ");
    }
}
