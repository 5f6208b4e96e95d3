//! # lection
//!
//! Bible reference algebra and chapter markup rendering.
//!
//! ## Features
//!
//! - [`BibleReference`]: an immutable interval-like value over
//!   (version, book, chapter, verse range) with ordering, overlap,
//!   containment and merge operations
//! - USFM-like reference strings (`GEN.1.3-5`) parsed and serialized
//! - Chapter markup parsed into a typed [`TextNode`](markup::TextNode) tree
//! - [`VersionRendering`]: walks the tree into styled, annotated
//!   [`TextBlock`]s ready for layout
//!
//! ## Quick start
//!
//! ```
//! use lection::{merge_all, BibleReference};
//!
//! let a = BibleReference::range(1, "GEN", 1, 1, 3).unwrap();
//! let b = BibleReference::range(1, "GEN", 1, 4, 6).unwrap();
//! assert!(a.is_adjacent_or_overlapping(&b));
//!
//! let merged = merge_all(vec![a, b]);
//! assert_eq!(merged.len(), 1);
//! assert_eq!(merged[0].as_usfm(), "GEN.1.1-6");
//! ```
//!
//! ## Rendering chapters
//!
//! Chapter markup arrives through a [`ChapterSource`] — the seam to the
//! transport and caching layers:
//!
//! ```
//! use lection::{
//!     BibleReference, ChapterSource, RenderOptions, Result, VersionMetadata, VersionRendering,
//! };
//!
//! struct OneChapter(&'static str);
//!
//! impl ChapterSource for OneChapter {
//!     fn chapter_markup(&self, _version: u32, _book: &str, _chapter: u32) -> Result<String> {
//!         Ok(self.0.to_string())
//!     }
//!     fn version_metadata(&self, _version: u32) -> Result<VersionMetadata> {
//!         Ok(VersionMetadata::default())
//!     }
//! }
//!
//! let source = OneChapter(r#"<div><div class="p">In the beginning</div></div>"#);
//! let rendering = VersionRendering::new(&source);
//! let reference = BibleReference::chapter(1, "GEN", 1).unwrap();
//! let blocks = rendering
//!     .text_blocks(&reference, &RenderOptions::default())
//!     .unwrap()
//!     .expect("chapter is available");
//! assert_eq!(blocks[0].text.text(), "In the beginning");
//! ```

pub mod error;
pub mod markup;
pub mod reference;
pub mod render;
pub mod source;

pub use error::{Error, Result};
pub use markup::{NodeKind, TextNode, parse};
pub use reference::{BibleReference, merge_all};
pub use render::{
    Color, FontKind, FootnoteMode, HeaderLevel, RenderOptions, RunStyle, StyledRun, StyledText,
    TextAlign, TextBlock, TextCategory, VerseTag, VersionRendering,
};
pub use source::{ChapterSource, TextDirection, VersionMetadata};
