use std::fmt;

/// Location of a token in the input stream.
///
/// The reader only ever holds one line at a time, so `offset` is the byte
/// offset within that line rather than within the whole stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number in characters (1-indexed)
    pub column: usize,
    /// Byte offset from the start of the line
    pub offset: usize,
}

impl Position {
    /// Creates a position at the start of the first line.
    pub fn new() -> Self {
        Self::line_start(1)
    }

    /// Creates a position at the first column of `line`.
    pub fn line_start(line: usize) -> Self {
        Self {
            line,
            column: 1,
            offset: 0,
        }
    }

    /// Creates a position with the given values.
    pub fn at(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
