//! Styled text output types.
//!
//! The rendering walk produces [`TextBlock`] values: a flat string with
//! ordered, non-overlapping [`StyledRun`]s. Every run carries two
//! orthogonal annotation channels — a [`TextCategory`] and, when a verse
//! is established, a [`VerseTag`] — so the UI layer can map a character
//! range back to a reference for tap and selection handling.

use std::fmt;

/// RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0, a: 255 };

    /// Traditional red for the words of Christ.
    pub const WOC_RED: Color = Color { r: 0xc0, g: 0x1f, b: 0x1f, a: 255 };

    /// Create a new opaque color.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }
}

/// Paragraph alignment of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub enum TextAlign {
    #[default]
    Start,
    End,
    Center,
}

/// Header font weight, heaviest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub enum HeaderLevel {
    H1,
    H2,
    H3,
    H4,
    H5,
}

/// Font selection for a styled run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub enum FontKind {
    #[default]
    Regular,
    Italic,
    SmallCaps,
    /// Superscript verse number labels.
    VerseLabel,
    Footnote,
    Header(HeaderLevel),
}

/// Semantic category of a styled run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub enum TextCategory {
    #[default]
    Scripture,
    VerseLabel,
    FootnoteMarker,
    FootnoteText,
    Header,
}

/// Verse annotation: identifies the exact verse a character range belongs
/// to, as `version:book:chapter:verse`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct VerseTag {
    pub version_id: u32,
    pub book_code: String,
    pub chapter: u32,
    pub verse: u32,
}

impl fmt::Display for VerseTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}",
            self.version_id, self.book_code, self.chapter, self.verse
        )
    }
}

/// Style and annotations applied to a range of text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct RunStyle {
    pub font: FontKind,
    pub color: Option<Color>,
    pub category: TextCategory,
    pub verse: Option<VerseTag>,
}

/// A byte range of a [`StyledText`] with one uniform [`RunStyle`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct StyledRun {
    /// Byte offset into the owning text.
    pub start: usize,
    /// Length in bytes.
    pub len: usize,
    pub style: RunStyle,
}

impl StyledRun {
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// A flat string plus its ordered, non-overlapping styled runs.
///
/// Built by appending; appends with a style equal to the trailing run's
/// extend that run instead of opening a new one, so run boundaries are
/// style boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct StyledText {
    text: String,
    runs: Vec<StyledRun>,
}

impl StyledText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn runs(&self) -> &[StyledRun] {
        &self.runs
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn ends_with_whitespace(&self) -> bool {
        self.text.ends_with(char::is_whitespace)
    }

    /// Append `text` in the given style, merging with the trailing run when
    /// the styles are equal.
    pub fn push(&mut self, text: &str, style: RunStyle) {
        if text.is_empty() {
            return;
        }
        let start = self.text.len();
        self.text.push_str(text);
        match self.runs.last_mut() {
            Some(last) if last.style == style && last.end() == start => {
                last.len += text.len();
            }
            _ => self.runs.push(StyledRun {
                start,
                len: text.len(),
                style,
            }),
        }
    }

    /// Remove trailing whitespace, shrinking or dropping runs that covered
    /// it. Used for table cells.
    pub fn trim_end(&mut self) {
        let trimmed_len = self.text.trim_end().len();
        self.text.truncate(trimmed_len);
        while let Some(last) = self.runs.last_mut() {
            if last.start >= trimmed_len {
                self.runs.pop();
            } else {
                last.len = last.len.min(trimmed_len - last.start);
                break;
            }
        }
    }

    /// The text covered by a run.
    pub fn run_text(&self, run: &StyledRun) -> &str {
        &self.text[run.start..run.end()]
    }
}

/// One rendered block: a paragraph of styled text, or a table of rows.
///
/// Exactly one of `text`/`rows` is populated; a table block has empty
/// `text`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct TextBlock {
    pub text: StyledText,
    pub chapter: u32,
    /// Table rows (cells per row), empty unless this block is a table.
    pub rows: Vec<Vec<StyledText>>,
    /// First-line indent, in points.
    pub head_indent: f32,
    /// Continuation-line indent, in points.
    pub rest_indent: f32,
    pub margin_top: f32,
    pub align: TextAlign,
    pub footnotes: Vec<StyledText>,
}

impl TextBlock {
    pub fn is_table(&self) -> bool {
        !self.rows.is_empty()
    }
}
