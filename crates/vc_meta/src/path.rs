//! Property path tokenizer.
//!
//! A path is a dot-separated list of segments, each optionally followed by
//! one bracketed key:
//!
//! ```text
//! path    := segment ('.' segment)*
//! segment := name ('[' key ']')?
//! ```
//!
//! There is no escaping and brackets do not nest. An empty name before a
//! bracket (`"[1]"`) indexes into the current object itself.

use core::fmt;
use core::iter::FusedIterator;

// -----------------------------------------------------------------------------
// Segment

/// The first segment of a path, borrowed from the path string.
///
/// Parsing never fails and never allocates.
///
/// # Examples
///
/// ```
/// use vc_meta::path::Segment;
///
/// let seg = Segment::parse("orders[0].items[2].name");
/// assert_eq!(seg.name(), "orders");
/// assert_eq!(seg.index(), Some("0"));
/// assert_eq!(seg.indexed_name(), "orders[0]");
/// assert_eq!(seg.remainder(), Some("items[2].name"));
///
/// let names: Vec<_> = seg.into_iter().map(|seg| seg.indexed_name()).collect();
/// assert_eq!(names, ["orders[0]", "items[2]", "name"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment<'p> {
    indexed_name: &'p str,
    name: &'p str,
    index: Option<&'p str>,
    remainder: Option<&'p str>,
}

impl<'p> Segment<'p> {
    /// Parses the first segment of `path`.
    pub fn parse(path: &'p str) -> Self {
        let (indexed_name, remainder) = match path.split_once('.') {
            Some((current, rest)) => (current, Some(rest)),
            None => (path, None),
        };

        let (name, index) = match indexed_name.split_once('[') {
            Some((name, key)) => {
                let key = key.split_once(']').map_or(key, |(key, _)| key);
                (name, Some(key))
            }
            None => (indexed_name, None),
        };

        Self {
            indexed_name,
            name,
            index,
            remainder,
        }
    }

    /// The segment name, without bracket content.
    #[inline]
    pub const fn name(&self) -> &'p str {
        self.name
    }

    /// The bracket content, if the segment is indexed.
    #[inline]
    pub const fn index(&self) -> Option<&'p str> {
        self.index
    }

    /// The raw segment text, including brackets.
    #[inline]
    pub const fn indexed_name(&self) -> &'p str {
        self.indexed_name
    }

    /// Everything after the first `.`.
    #[inline]
    pub const fn remainder(&self) -> Option<&'p str> {
        self.remainder
    }

    #[inline]
    pub const fn is_indexed(&self) -> bool {
        self.index.is_some()
    }

    /// Returns `true` if another segment follows.
    #[inline]
    pub const fn has_next(&self) -> bool {
        self.remainder.is_some()
    }

    /// Parses the segment after this one.
    #[inline]
    pub fn next(&self) -> Option<Segment<'p>> {
        self.remainder.map(Segment::parse)
    }
}

impl fmt::Display for Segment<'_> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.indexed_name)
    }
}

// -----------------------------------------------------------------------------
// Segments

/// An iterator over the segments of a path, see [`Segment::into_iter`].
#[derive(Debug, Clone)]
pub struct Segments<'p> {
    next: Option<Segment<'p>>,
}

impl<'p> Segments<'p> {
    /// Iterates over every segment of `path`.
    #[inline]
    pub fn new(path: &'p str) -> Self {
        Self {
            next: Some(Segment::parse(path)),
        }
    }
}

impl<'p> Iterator for Segments<'p> {
    type Item = Segment<'p>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = current.next();
        Some(current)
    }
}

impl FusedIterator for Segments<'_> {}

impl<'p> IntoIterator for Segment<'p> {
    type Item = Segment<'p>;
    type IntoIter = Segments<'p>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        Segments { next: Some(self) }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::{Segment, Segments};

    #[test]
    fn plain_name() {
        let seg = Segment::parse("user");
        assert_eq!(seg.name(), "user");
        assert_eq!(seg.index(), None);
        assert!(!seg.has_next());
        assert!(seg.next().is_none());
    }

    #[test]
    fn dotted_and_indexed() {
        let seg = Segment::parse("attributes[scores].[1]");
        assert_eq!(seg.name(), "attributes");
        assert_eq!(seg.index(), Some("scores"));

        let next = seg.next().unwrap();
        assert_eq!(next.name(), "");
        assert_eq!(next.index(), Some("1"));
        assert!(next.is_indexed());
    }

    #[test]
    fn unclosed_bracket_takes_rest() {
        let seg = Segment::parse("items[2");
        assert_eq!(seg.index(), Some("2"));
        assert_eq!(seg.indexed_name(), "items[2");
    }

    #[test]
    fn only_first_bracket_counts() {
        let seg = Segment::parse("a[1][2]");
        assert_eq!(seg.name(), "a");
        assert_eq!(seg.index(), Some("1"));
    }

    #[test]
    fn trailing_dot_yields_empty_segment() {
        let names: Vec<_> = Segments::new("a.").map(|seg| seg.name()).collect();
        assert_eq!(names, ["a", ""]);
    }

    #[test]
    fn empty_path() {
        let seg = Segment::parse("");
        assert_eq!(seg.name(), "");
        assert_eq!(Segments::new("").count(), 1);
    }
}
