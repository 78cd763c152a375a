use std::ops::Deref;
use std::sync::Arc;

/// A token borrowed from a shared line buffer.
///
/// Every token of a line points into the same `Arc<str>`, so handing a token
/// out costs a reference-count bump instead of an allocation. It derefs to
/// `str` and can be compared against string literals directly.
#[derive(Clone, Debug)]
pub struct TextSlice {
    buffer: Arc<str>,
    start: usize,
    end: usize,
}

impl TextSlice {
    /// Creates a new slice from the given shared buffer and byte range.
    pub fn new(buffer: Arc<str>, start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        debug_assert!(end <= buffer.len());
        Self { buffer, start, end }
    }

    /// Creates a slice that covers the entire buffer.
    pub fn from_arc(buffer: Arc<str>) -> Self {
        let end = buffer.len();
        Self {
            buffer,
            start: 0,
            end,
        }
    }

    /// Returns the length in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true for a zero-length slice.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copies the token out into an owned `String`.
    pub fn into_string(self) -> String {
        self.deref().to_owned()
    }
}

impl std::fmt::Display for TextSlice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self)
    }
}

impl Deref for TextSlice {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.buffer[self.start..self.end]
    }
}

impl AsRef<str> for TextSlice {
    fn as_ref(&self) -> &str {
        self
    }
}

impl From<TextSlice> for String {
    fn from(value: TextSlice) -> Self {
        value.into_string()
    }
}

impl PartialEq<&str> for TextSlice {
    fn eq(&self, other: &&str) -> bool {
        self.deref() == *other
    }
}

impl PartialEq<str> for TextSlice {
    fn eq(&self, other: &str) -> bool {
        self.deref() == other
    }
}

impl PartialEq<TextSlice> for &str {
    fn eq(&self, other: &TextSlice) -> bool {
        *self == other.deref()
    }
}

/// Two slices are equal when their text is equal, wherever it lives.
impl PartialEq for TextSlice {
    fn eq(&self, other: &Self) -> bool {
        self.deref() == other.deref()
    }
}

impl Eq for TextSlice {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_of_shared_line() {
        let line: Arc<str> = Arc::from("12 34 56");
        let middle = TextSlice::new(Arc::clone(&line), 3, 5);
        assert_eq!(middle, "34");
        assert_eq!(middle.len(), 2);
        assert_eq!(Arc::strong_count(&line), 2);
    }

    #[test]
    fn test_equality_ignores_origin() {
        let a = TextSlice::from_arc(Arc::from("abc"));
        let b = TextSlice::new(Arc::from("xabcx"), 1, 4);
        assert_eq!(a, b);
        assert_eq!(b.to_string(), "abc");
        assert_eq!(String::from(b), "abc");
    }

    #[test]
    fn test_empty_slice() {
        let empty = TextSlice::new(Arc::from("abc"), 1, 1);
        assert!(empty.is_empty());
        assert_eq!(empty, "");
    }
}
