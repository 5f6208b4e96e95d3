//! Bible reference values and their interval algebra.
//!
//! A [`BibleReference`] addresses a span of verses within one chapter of one
//! book of one Bible version. The type behaves like a closed interval over
//! verse numbers: references can be compared, tested for overlap and
//! containment, and merged. A reference with no verse bounds stands for the
//! entire chapter (the wildcard window `[1, +inf)`).

mod usfm;

use std::cmp::Ordering;
use std::fmt;

use crate::error::{Error, Result};

/// Upper bound used when normalizing an open verse window.
const CHAPTER_END: u32 = u32::MAX;

/// An immutable reference to a verse span within a chapter.
///
/// Invariants, enforced at construction:
/// - `chapter >= 1`
/// - any present verse bound `>= 1`
/// - `verse_end >= verse_start` when both are present
///
/// Book codes are three word characters, stored and compared uppercase.
/// Ordering across books is lexicographic on the code; callers that need
/// canonical book order must supply codes that sort canonically.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BibleReference {
    version_id: u32,
    book_code: String,
    chapter: u32,
    verse_start: Option<u32>,
    verse_end: Option<u32>,
}

impl BibleReference {
    /// Create a whole-chapter reference (no verse bounds).
    pub fn chapter(version_id: u32, book_code: &str, chapter: u32) -> Result<Self> {
        Self::from_parts(version_id, book_code, chapter, None, None)
    }

    /// Create a single-verse reference (`verse_start == verse_end`).
    pub fn verse(version_id: u32, book_code: &str, chapter: u32, verse: u32) -> Result<Self> {
        Self::from_parts(version_id, book_code, chapter, Some(verse), Some(verse))
    }

    /// Create a verse-range reference.
    pub fn range(
        version_id: u32,
        book_code: &str,
        chapter: u32,
        verse_start: u32,
        verse_end: u32,
    ) -> Result<Self> {
        Self::from_parts(
            version_id,
            book_code,
            chapter,
            Some(verse_start),
            Some(verse_end),
        )
    }

    /// Create a reference from raw parts, validating all invariants.
    pub fn from_parts(
        version_id: u32,
        book_code: &str,
        chapter: u32,
        verse_start: Option<u32>,
        verse_end: Option<u32>,
    ) -> Result<Self> {
        if chapter < 1 {
            return Err(Error::InvalidReference(format!(
                "chapter must be >= 1, got {chapter}"
            )));
        }
        for verse in [verse_start, verse_end].into_iter().flatten() {
            if verse < 1 {
                return Err(Error::InvalidReference(format!(
                    "verse must be >= 1, got {verse}"
                )));
            }
        }
        if let (Some(start), Some(end)) = (verse_start, verse_end)
            && end < start
        {
            return Err(Error::InvalidReference(format!(
                "verse range ends before it starts: {start}-{end}"
            )));
        }

        Ok(Self {
            version_id,
            book_code: book_code.to_ascii_uppercase(),
            chapter,
            verse_start,
            verse_end,
        })
    }

    pub fn version_id(&self) -> u32 {
        self.version_id
    }

    pub fn book_code(&self) -> &str {
        &self.book_code
    }

    pub fn chapter_number(&self) -> u32 {
        self.chapter
    }

    pub fn verse_start(&self) -> Option<u32> {
        self.verse_start
    }

    pub fn verse_end(&self) -> Option<u32> {
        self.verse_end
    }

    /// True when the reference denotes the entire chapter.
    pub fn is_whole_chapter(&self) -> bool {
        self.verse_start.is_none() && self.verse_end.is_none()
    }

    /// The same chapter with verse bounds stripped: the key used to fetch
    /// chapter markup.
    pub fn with_whole_chapter(&self) -> Self {
        Self {
            version_id: self.version_id,
            book_code: self.book_code.clone(),
            chapter: self.chapter,
            verse_start: None,
            verse_end: None,
        }
    }

    /// Total order over references: book code (lexicographic), then chapter,
    /// then verse bounds.
    ///
    /// The verse tie-breaks are two independent rules, kept separate on
    /// purpose because existing sort outcomes depend on both:
    /// - when exactly one side lacks `verse_start`, that side sorts first;
    /// - when both sides have `verse_start` and the starts tie, an absent
    ///   `verse_end` sorts *after* any concrete end.
    ///
    /// `version_id` does not participate, which is why this type offers an
    /// inherent comparator rather than an `Ord` impl (an `Ord` that ignores
    /// a field would disagree with `Eq`).
    pub fn compare(&self, other: &Self) -> Ordering {
        self.book_code
            .cmp(&other.book_code)
            .then(self.chapter.cmp(&other.chapter))
            .then_with(|| match (self.verse_start, other.verse_start) {
                (Some(a), Some(b)) => a.cmp(&b).then_with(|| {
                    match (self.verse_end, other.verse_end) {
                        (Some(a), Some(b)) => a.cmp(&b),
                        // Open-ended sorts last when starts tie.
                        (Some(_), None) => Ordering::Less,
                        (None, Some(_)) => Ordering::Greater,
                        (None, None) => Ordering::Equal,
                    }
                }),
                (None, None) => Ordering::Equal,
                // No-start reference sorts first.
                (None, Some(_)) => Ordering::Less,
                (Some(_), None) => Ordering::Greater,
            })
    }

    /// Verse window as a closed interval. A whole-chapter reference covers
    /// `[1, CHAPTER_END]`; otherwise a missing end collapses to the start.
    fn window(&self) -> (u32, u32) {
        if self.is_whole_chapter() {
            return (1, CHAPTER_END);
        }
        let start = self.verse_start.unwrap_or(1);
        let end = self.verse_end.unwrap_or(start);
        (start, end)
    }

    /// True when both references share version, book and chapter. Overlap
    /// and containment are only defined within one chapter; there is no
    /// cross-chapter support.
    fn same_chapter(&self, other: &Self) -> bool {
        self.version_id == other.version_id
            && self.book_code == other.book_code
            && self.chapter == other.chapter
    }

    /// Whether the verse windows of two same-chapter references intersect.
    pub fn overlaps(&self, other: &Self) -> bool {
        if !self.same_chapter(other) {
            return false;
        }
        let (a_start, a_end) = self.window();
        let (b_start, b_end) = other.window();
        a_end >= b_start && b_end >= a_start
    }

    /// Whether this reference's verse window contains `other`'s entirely.
    pub fn contains(&self, other: &Self) -> bool {
        if !self.same_chapter(other) {
            return false;
        }
        let (a_start, a_end) = self.window();
        let (b_start, b_end) = other.window();
        a_start <= b_start && a_end >= b_end
    }

    /// Whether two same-chapter references touch or intersect, i.e. whether
    /// merging them yields one contiguous span.
    pub fn is_adjacent_or_overlapping(&self, other: &Self) -> bool {
        if !self.same_chapter(other) {
            return false;
        }
        let (first, second) = if self.compare(other) == Ordering::Greater {
            (other, self)
        } else {
            (self, other)
        };
        // A whole-chapter reference touches everything in its chapter.
        let Some(last) = first.verse_end.or(first.verse_start) else {
            return true;
        };
        last.saturating_add(1) >= second.verse_start.unwrap_or(1)
    }

    /// Merge two adjacent or overlapping references into one span.
    ///
    /// Fails with [`Error::Precondition`] when
    /// [`is_adjacent_or_overlapping`](Self::is_adjacent_or_overlapping)
    /// does not hold.
    pub fn merge(&self, other: &Self) -> Result<Self> {
        if !self.is_adjacent_or_overlapping(other) {
            return Err(Error::Precondition(format!(
                "cannot merge non-adjacent references {self} and {other}"
            )));
        }
        Ok(self.merged_with(other))
    }

    /// Merge without the precondition check. Callers must have verified
    /// adjacency.
    fn merged_with(&self, other: &Self) -> Self {
        // A whole chapter absorbs any range.
        if self.verse_start.is_none() {
            return self.clone();
        }
        if other.verse_start.is_none() {
            return other.clone();
        }

        let first = if self.compare(other) == Ordering::Greater {
            other
        } else {
            self
        };
        let start = self.verse_start.min(other.verse_start);
        let self_end = self.verse_end.or(self.verse_start);
        let other_end = other.verse_end.or(other.verse_start);
        Self {
            version_id: first.version_id,
            book_code: first.book_code.clone(),
            chapter: first.chapter,
            verse_start: start,
            verse_end: self_end.max(other_end),
        }
    }
}

impl fmt::Display for BibleReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_usfm())
    }
}

/// Merge every adjacent-or-overlapping run in `references` into single
/// spans, returning the result in total order.
///
/// The input is sorted, then swept left to right: whenever a pair of
/// neighbors touches, it is replaced by its merge and the sweep re-checks
/// the same position (the merged span may now touch the next neighbor).
/// Each merge removes one element, so the sweep is linear after the sort.
pub fn merge_all(references: Vec<BibleReference>) -> Vec<BibleReference> {
    let mut refs = references;
    refs.sort_by(|a, b| a.compare(b));

    let mut i = 0;
    while i + 1 < refs.len() {
        if refs[i].is_adjacent_or_overlapping(&refs[i + 1]) {
            refs[i] = refs[i].merged_with(&refs[i + 1]);
            refs.remove(i + 1);
        } else {
            i += 1;
        }
    }
    refs
}
