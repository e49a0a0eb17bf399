//! Text range and position types for source location tracking.
//!
//! All offsets are measured in logical characters (Unicode scalar values),
//! not in encoded bytes, so a multi-byte character advances every counter
//! by exactly one.

use serde::Serialize;
use std::fmt;

/// A position in source text, measured as a character offset from the start.
pub type TextPos = u32;

/// A half-open character range `[start, end)` in source text.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, Serialize)]
pub struct TextRange {
    /// The character offset where this range starts (inclusive).
    pub start: TextPos,
    /// The character offset where this range ends (exclusive).
    pub end: TextPos,
}

impl TextRange {
    /// Create a new text range.
    #[inline]
    pub fn new(start: TextPos, end: TextPos) -> Self {
        debug_assert!(end >= start);
        Self { start, end }
    }

    /// The length of this range in characters.
    #[inline]
    pub fn len(&self) -> TextPos {
        self.end - self.start
    }

    /// Whether this range is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Return a new range covering both this range and the other.
    pub fn cover(&self, other: &TextRange) -> TextRange {
        TextRange::new(self.start.min(other.start), self.end.max(other.end))
    }
}

impl fmt::Debug for TextRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for TextRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// A 1-based line and column pair.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct LineAndColumn {
    /// 1-based line number.
    pub line: u32,
    /// 1-based column, counted in characters.
    pub column: u32,
}

impl LineAndColumn {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl Default for LineAndColumn {
    fn default() -> Self {
        Self { line: 1, column: 1 }
    }
}

/// Convert a character offset into a byte offset within `text`.
///
/// Offsets at or past the end map to `text.len()`.
pub fn char_to_byte_offset(text: &str, offset: TextPos) -> usize {
    text.char_indices()
        .nth(offset as usize)
        .map(|(byte, _)| byte)
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_range() {
        let range = TextRange::new(5, 15);
        assert_eq!(range.len(), 10);
        assert!(!range.is_empty());
        assert!(TextRange::new(3, 3).is_empty());
    }

    #[test]
    fn test_text_range_cover() {
        let a = TextRange::new(2, 4);
        let b = TextRange::new(8, 10);
        assert_eq!(a.cover(&b), TextRange::new(2, 10));
    }

    #[test]
    fn test_char_to_byte_offset() {
        let text = "é😀x";
        assert_eq!(char_to_byte_offset(text, 0), 0);
        assert_eq!(char_to_byte_offset(text, 1), 2);
        assert_eq!(char_to_byte_offset(text, 2), 6);
        assert_eq!(char_to_byte_offset(text, 3), 7);
        assert_eq!(char_to_byte_offset(text, 10), 7);
    }
}
