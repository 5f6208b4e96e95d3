//! Class-token interpretation tables.
//!
//! Chapter markup drives styling through CSS-like class tokens. Rather
//! than chained string comparisons, each token maps into a closed effect
//! enum; the walk dispatches on the enum. Tokens that are neither mapped
//! nor on the documented ignore lists indicate unmodeled markup: logged in
//! debug builds, silently skipped in release.

use super::text::HeaderLevel;
use crate::markup::TextNode;

/// Effect of a class token on an inline node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InlineEffect {
    /// `wj` — words of Christ, rendered in a distinct color.
    WordsOfChrist,
    /// `yv-v` / `verse` — the node's `v` attribute sets the current verse.
    VerseNumber,
    /// `nd` / `sc` — divine-name and small-caps spans.
    SmallCaps,
    /// `tl` / `it` / `add` / `qs` / `qt` — transliterated, italic,
    /// translator-added and quoted spans.
    Italic,
}

/// Structural inline tokens that the walk recognizes by combination
/// rather than per-token effect.
const INLINE_STRUCTURAL: &[&str] = &["yv-n", "f", "x", "rq", "yv-vlbl", "vlbl"];

/// Inline tokens with no effect: footnote/cross-reference internals and
/// generic wrappers.
const INLINE_IGNORE: &[&str] = &[
    "content", "label", "note", "body", "heading", "fr", "ft", "fk", "fq", "fqa", "xo", "xt",
];

pub(crate) fn inline_effect(token: &str) -> Option<InlineEffect> {
    match token {
        "wj" => Some(InlineEffect::WordsOfChrist),
        "yv-v" | "verse" => Some(InlineEffect::VerseNumber),
        "nd" | "sc" => Some(InlineEffect::SmallCaps),
        "tl" | "it" | "add" | "qs" | "qt" => Some(InlineEffect::Italic),
        _ => {
            if !INLINE_STRUCTURAL.contains(&token) && !INLINE_IGNORE.contains(&token) {
                assert_unmodeled("inline", token);
            }
            None
        }
    }
}

/// Effect of a class token on a block node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum BlockEffect {
    /// Paragraph indents, in units of half the base font size.
    Indent { head: f32, rest: f32 },
    /// `pr` / `qr` — right-edge aligned lines.
    AlignEnd,
    /// `pc` / `qc` — centered small-caps header lines.
    AlignCenter,
    /// `d` — descriptive title (psalm superscription).
    DescriptiveTitle,
    /// `yv-h` / `yvh` — section header.
    Header,
    /// `mr` — range header, rendered without the default top margin.
    MarginOverride,
}

/// Block tokens with no effect: blank lines, list/letter framing and
/// front-matter structure.
const BLOCK_IGNORE: &[&str] = &[
    "b", "po", "lh", "lf", "mi", "cls", "pmo", "pm", "pmc", "pmr", "version", "book", "chapter",
    "label", "content",
];

pub(crate) fn block_effect(token: &str) -> Option<BlockEffect> {
    match token {
        "p" => Some(BlockEffect::Indent { head: 2.0, rest: 0.0 }),
        "m" | "nb" => Some(BlockEffect::Indent { head: 0.0, rest: 0.0 }),
        "q1" | "li1" => Some(BlockEffect::Indent { head: 1.0, rest: 2.0 }),
        "q2" | "li2" => Some(BlockEffect::Indent { head: 3.0, rest: 4.0 }),
        "q3" | "li3" => Some(BlockEffect::Indent { head: 5.0, rest: 6.0 }),
        "q4" | "li4" => Some(BlockEffect::Indent { head: 7.0, rest: 8.0 }),
        "pi1" => Some(BlockEffect::Indent { head: 2.0, rest: 2.0 }),
        "pi2" => Some(BlockEffect::Indent { head: 2.0, rest: 4.0 }),
        "pi3" => Some(BlockEffect::Indent { head: 2.0, rest: 6.0 }),
        "pr" | "qr" => Some(BlockEffect::AlignEnd),
        "pc" | "qc" => Some(BlockEffect::AlignCenter),
        "d" => Some(BlockEffect::DescriptiveTitle),
        "yv-h" | "yvh" => Some(BlockEffect::Header),
        "mr" => Some(BlockEffect::MarginOverride),
        _ => {
            // ms*/s* prefixes are header sub-classes picked up by
            // header_level(); they carry no block effect of their own.
            if !BLOCK_IGNORE.contains(&token) && !token.starts_with("ms") && !token.starts_with('s')
            {
                assert_unmodeled("block", token);
            }
            None
        }
    }
}

/// Header weight sub-dispatch for `yv-h` blocks, from co-occurring
/// classes: major section headers are heaviest, speaker and descriptive
/// sub-headers lightest.
pub(crate) fn header_level(node: &TextNode) -> HeaderLevel {
    if node.has_class("ms") || node.has_class("ms1") {
        HeaderLevel::H1
    } else if node.has_class("ms2") {
        HeaderLevel::H2
    } else if node.has_class("s2") {
        HeaderLevel::H4
    } else if node.has_class("s3") || node.has_class("s4") || node.has_class("sp") {
        HeaderLevel::H5
    } else {
        HeaderLevel::H3
    }
}

/// Design assertion for unmodeled markup: debug builds log, release
/// builds proceed with best-effort defaults.
fn assert_unmodeled(context: &str, token: &str) {
    if cfg!(debug_assertions) {
        log::debug!("unmodeled {context} class token: {token:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::parse;

    #[test]
    fn test_inline_effects() {
        assert_eq!(inline_effect("wj"), Some(InlineEffect::WordsOfChrist));
        assert_eq!(inline_effect("yv-v"), Some(InlineEffect::VerseNumber));
        assert_eq!(inline_effect("verse"), Some(InlineEffect::VerseNumber));
        assert_eq!(inline_effect("nd"), Some(InlineEffect::SmallCaps));
        assert_eq!(inline_effect("add"), Some(InlineEffect::Italic));
        assert_eq!(inline_effect("ft"), None);
    }

    #[test]
    fn test_block_indents() {
        assert_eq!(
            block_effect("p"),
            Some(BlockEffect::Indent { head: 2.0, rest: 0.0 })
        );
        assert_eq!(
            block_effect("q2"),
            Some(BlockEffect::Indent { head: 3.0, rest: 4.0 })
        );
        assert_eq!(block_effect("b"), None);
    }

    #[test]
    fn test_header_levels() {
        let node = |classes: &str| {
            parse(&format!("<div class=\"{classes}\">x</div>"))
                .unwrap()
                .unwrap()
        };
        assert_eq!(header_level(&node("yv-h ms1")), HeaderLevel::H1);
        assert_eq!(header_level(&node("yv-h ms2")), HeaderLevel::H2);
        assert_eq!(header_level(&node("yv-h s1")), HeaderLevel::H3);
        assert_eq!(header_level(&node("yv-h")), HeaderLevel::H3);
        assert_eq!(header_level(&node("yv-h s2")), HeaderLevel::H4);
        assert_eq!(header_level(&node("yv-h sp")), HeaderLevel::H5);
    }
}
