use fastio_common::{Position, TextSlice};
use std::sync::Arc;

/// Returns true for the characters that separate tokens: space, tab,
/// newline, carriage return and form feed.
#[inline]
pub fn is_delimiter(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r' | '\x0C')
}

/// A cursor over a single input line.
///
/// The reader keeps one cursor per line; the part the cursor has not
/// consumed yet is the line's pending tokens.
#[derive(Debug, Clone)]
pub struct Cursor {
    buffer: Arc<str>,
    current: usize,
    position: Position,
}

impl Cursor {
    /// Creates a cursor over `input`, numbered as line 1.
    pub fn new<S: Into<String>>(input: S) -> Self {
        let owned = input.into();
        Self::for_line(Arc::<str>::from(owned), 1)
    }

    /// Creates a cursor over an existing shared buffer numbered as `line`.
    pub fn for_line(buffer: Arc<str>, line: usize) -> Self {
        Self {
            buffer,
            current: 0,
            position: Position::line_start(line),
        }
    }

    /// Returns the current position in the line.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the current offset in bytes.
    pub fn offset(&self) -> usize {
        self.current
    }

    /// Returns true once the whole line has been consumed.
    pub fn is_eof(&self) -> bool {
        self.current >= self.buffer.len()
    }

    /// Returns the next character without advancing the cursor.
    pub fn peek(&self) -> Option<char> {
        self.buffer[self.current..].chars().next()
    }

    /// Advances the cursor by one character.
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        let len = ch.len_utf8();

        self.position.column += 1;
        self.position.offset += len;
        self.current += len;

        Some(ch)
    }

    /// Consumes characters while the predicate returns true.
    pub fn consume_while<F>(&mut self, mut predicate: F) -> TextSlice
    where
        F: FnMut(char) -> bool,
    {
        let start = self.current;
        while let Some(ch) = self.peek() {
            if !predicate(ch) {
                break;
            }
            self.advance();
        }
        TextSlice::new(Arc::clone(&self.buffer), start, self.current)
    }

    /// Skips delimiters and consumes the following token.
    ///
    /// Returns the token together with the position of its first character,
    /// or `None` once only delimiters remain.
    pub fn next_token(&mut self) -> Option<(TextSlice, Position)> {
        self.consume_while(is_delimiter);
        if self.is_eof() {
            return None;
        }
        let position = self.position;
        let token = self.consume_while(|ch| !is_delimiter(ch));
        Some((token, position))
    }
}

impl Default for Cursor {
    /// An exhausted cursor positioned before the first line.
    fn default() -> Self {
        Self::for_line(Arc::from(""), 0)
    }
}
