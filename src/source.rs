//! Chapter source collaborator interface.
//!
//! The rendering engine is transport-agnostic: it sees the content API and
//! whatever caching sits in front of it only through [`ChapterSource`].
//! Methods take `&self`; implementations that maintain a cache use interior
//! mutability.

use crate::error::Result;

/// Writing direction of a version's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

/// Metadata for one Bible version.
#[derive(Debug, Clone, Default)]
pub struct VersionMetadata {
    /// Codes of the books this version contains, in canonical order.
    pub book_codes: Vec<String>,
    pub text_direction: TextDirection,
}

impl VersionMetadata {
    /// Case-insensitive book code lookup.
    pub fn has_book(&self, code: &str) -> bool {
        self.book_codes.iter().any(|c| c.eq_ignore_ascii_case(code))
    }
}

/// Provider of raw chapter markup and version metadata.
///
/// Errors from the underlying transport are wrapped once into
/// [`Error::Source`](crate::Error::Source) and pass through the renderer
/// unchanged. The renderer calls [`invalidate`](Self::invalidate) and
/// refetches exactly once when a chapter's markup parses to an empty tree.
pub trait ChapterSource {
    /// Raw markup for one chapter.
    fn chapter_markup(&self, version_id: u32, book_code: &str, chapter: u32) -> Result<String>;

    /// Drop any cached entry for the chapter. Sources without a cache can
    /// ignore this.
    fn invalidate(&self, _version_id: u32, _book_code: &str, _chapter: u32) {}

    /// Book list and text direction for a version.
    fn version_metadata(&self, version_id: u32) -> Result<VersionMetadata>;
}
