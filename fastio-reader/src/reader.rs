use crate::cursor::Cursor;
use crate::traits::FromToken;
use fastio_common::{FastIoError, IoConfig, Position, Result, TextSlice};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, StdinLock};
use std::path::Path;
use std::sync::Arc;

/// Largest number of slots [`FastReader::next_vec`] reserves up front.
const MAX_PREALLOCATED: usize = 1 << 16;

/// Reader over the process's standard input.
///
/// Reads straight from the locked stdin buffer, so no second buffer is
/// layered on top of it.
pub type StdinReader = FastReader<StdinLock<'static>>;

/// A buffered reader that hands out whitespace-separated tokens.
///
/// Input is pulled one line at a time. Tokens of the current line are
/// handed out left to right, and the next line is read only once they are
/// exhausted, so line boundaries are invisible to the token readers. Lines
/// without tokens are skipped.
///
/// The underlying stream is released by [`close`](Self::close) or when the
/// reader is dropped, whichever comes first.
#[derive(Debug)]
pub struct FastReader<R> {
    source: Option<R>,
    cursor: Cursor,
    line_number: usize,
    position: Position,
    /// Set after a line ended in `\r`; a `\n` right after it belongs to
    /// the same terminator.
    skip_lf: bool,
}

impl StdinReader {
    /// Creates a reader over standard input.
    pub fn stdin() -> Self {
        FastReader::from_buf_read(io::stdin().lock())
    }
}

impl FastReader<BufReader<File>> {
    /// Opens the file at `path` for reading.
    ///
    /// Any failure to open the file is reported as
    /// [`FastIoError::FileNotFound`].
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_config(path, IoConfig::default())
    }

    /// Opens the file at `path` with the buffer size taken from `config`.
    pub fn open_with_config<P: AsRef<Path>>(path: P, config: IoConfig) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| FastIoError::FileNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "opened input file");
        Ok(FastReader::with_config(file, config))
    }
}

impl<R: Read> FastReader<BufReader<R>> {
    /// Wraps an arbitrary byte stream in a buffered reader.
    pub fn new(inner: R) -> Self {
        Self::with_config(inner, IoConfig::default())
    }

    /// Wraps `inner` in a buffer of `config.buffer_capacity` bytes.
    pub fn with_config(inner: R, config: IoConfig) -> Self {
        FastReader::from_buf_read(BufReader::with_capacity(config.buffer_capacity, inner))
    }
}

impl<R: BufRead> FastReader<R> {
    /// Uses an already buffered stream as is.
    pub fn from_buf_read(source: R) -> Self {
        Self {
            source: Some(source),
            cursor: Cursor::default(),
            line_number: 0,
            position: Position::new(),
            skip_lf: false,
        }
    }

    /// Returns the next whitespace-delimited token.
    ///
    /// Fails with [`FastIoError::EndOfInput`] once the stream has no lines
    /// left to supply a token.
    pub fn next_token(&mut self) -> Result<TextSlice> {
        self.ensure_open()?;
        loop {
            if let Some((token, position)) = self.cursor.next_token() {
                self.position = position;
                return Ok(token);
            }
            self.refill()?;
        }
    }

    /// Returns the next raw line without its terminator.
    ///
    /// Tokens still pending from [`next_token`](Self::next_token) are left
    /// alone. The line read is whichever one follows the last line the
    /// tokenizer pulled in.
    pub fn next_line(&mut self) -> Result<String> {
        self.ensure_open()?;
        self.read_raw_line()?.ok_or(FastIoError::EndOfInput)
    }

    /// Reads the next token as a `T`.
    pub fn next<T: FromToken>(&mut self) -> Result<T> {
        let token = self.next_token()?;
        T::from_token(token, self.position)
    }

    /// Reads the next `n` tokens as `T`s.
    ///
    /// Running out of input partway through fails the whole read; no
    /// partial sequence is returned. `n == 0` reads nothing.
    ///
    /// `n` usually comes from the input itself, so only a bounded number of
    /// slots is reserved before the values actually arrive.
    pub fn next_vec<T: FromToken>(&mut self, n: usize) -> Result<Vec<T>> {
        let mut values = Vec::with_capacity(n.min(MAX_PREALLOCATED));
        for _ in 0..n {
            values.push(self.next()?);
        }
        Ok(values)
    }

    /// Reads the next token as a 32-bit signed integer.
    pub fn next_int(&mut self) -> Result<i32> {
        self.next()
    }

    /// Reads the next token as a 64-bit signed integer.
    pub fn next_long(&mut self) -> Result<i64> {
        self.next()
    }

    /// Reads the next token as an `f32`.
    pub fn next_float(&mut self) -> Result<f32> {
        self.next()
    }

    /// Reads the next token as an `f64`.
    pub fn next_double(&mut self) -> Result<f64> {
        self.next()
    }

    /// Returns the first character of the next token.
    pub fn next_char(&mut self) -> Result<char> {
        self.next()
    }

    /// Reads `n` tokens as `i32`s.
    pub fn next_int_array(&mut self, n: usize) -> Result<Vec<i32>> {
        self.next_vec(n)
    }

    /// Reads `n` tokens as `i64`s.
    pub fn next_long_array(&mut self, n: usize) -> Result<Vec<i64>> {
        self.next_vec(n)
    }

    /// Iterates over the remaining tokens.
    ///
    /// The iterator ends at end of input. Any other error is yielded once
    /// and then the iterator ends.
    pub fn tokens(&mut self) -> Tokens<'_, R> {
        Tokens {
            reader: self,
            done: false,
        }
    }

    /// Position of the last token returned.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Number of lines pulled from the stream so far.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Returns true once [`close`](Self::close) has run.
    pub fn is_closed(&self) -> bool {
        self.source.is_none()
    }

    /// Releases the underlying stream. Calling it again does nothing.
    pub fn close(&mut self) {
        if self.source.take().is_some() {
            self.cursor = Cursor::default();
            tracing::debug!(lines = self.line_number, "reader closed");
        }
    }

    fn ensure_open(&self) -> Result<()> {
        if self.source.is_none() {
            return Err(FastIoError::ClosedResource);
        }
        Ok(())
    }

    /// Replaces the exhausted cursor with the next line of input.
    fn refill(&mut self) -> Result<()> {
        let line = match self.read_raw_line()? {
            Some(line) => line,
            None => {
                tracing::debug!(lines = self.line_number, "end of input");
                return Err(FastIoError::EndOfInput);
            }
        };
        tracing::trace!(line = self.line_number, bytes = line.len(), "refilled tokens");
        self.cursor = Cursor::for_line(Arc::from(line), self.line_number);
        Ok(())
    }

    /// Reads one line without its terminator.
    ///
    /// `\n`, `\r\n` and a lone `\r` all end a line. Returns `None` at end of
    /// input.
    fn read_raw_line(&mut self) -> Result<Option<String>> {
        let source = self.source.as_mut().ok_or(FastIoError::ClosedResource)?;

        if self.skip_lf {
            self.skip_lf = false;
            if source.fill_buf()?.first() == Some(&b'\n') {
                source.consume(1);
            }
        }

        let mut bytes = Vec::new();
        let mut terminated = false;
        while !terminated {
            let available = source.fill_buf()?;
            if available.is_empty() {
                break;
            }
            let used = match available.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(end) => {
                    bytes.extend_from_slice(&available[..end]);
                    self.skip_lf = available[end] == b'\r';
                    terminated = true;
                    end + 1
                }
                None => {
                    bytes.extend_from_slice(available);
                    available.len()
                }
            };
            source.consume(used);
        }

        if !terminated && bytes.is_empty() {
            return Ok(None);
        }
        let line = String::from_utf8(bytes)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        self.line_number += 1;
        Ok(Some(line))
    }
}

/// Iterator returned by [`FastReader::tokens`].
#[derive(Debug)]
pub struct Tokens<'a, R> {
    reader: &'a mut FastReader<R>,
    done: bool,
}

impl<R: BufRead> Iterator for Tokens<'_, R> {
    type Item = Result<TextSlice>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.reader.next_token() {
            Ok(token) => Some(Ok(token)),
            Err(err) => {
                self.done = true;
                if err.is_end_of_input() {
                    None
                } else {
                    Some(Err(err))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor as ByteCursor;

    #[test]
    fn test_line_number_tracks_refills() {
        let mut reader = FastReader::new(ByteCursor::new("1\n\n2 3\n"));
        assert_eq!(reader.line_number(), 0);
        reader.next_int().unwrap();
        assert_eq!(reader.line_number(), 1);
        reader.next_int().unwrap();
        assert_eq!(reader.line_number(), 3);
        assert_eq!(reader.position(), Position::at(3, 1, 0));
        reader.next_int().unwrap();
        assert_eq!(reader.position(), Position::at(3, 3, 2));
    }

    #[test]
    fn test_close_drops_pending_tokens() {
        let mut reader = FastReader::new(ByteCursor::new("a b c"));
        assert_eq!(reader.next_token().unwrap(), "a");
        reader.close();
        assert!(reader.is_closed());
        assert!(matches!(
            reader.next_token(),
            Err(FastIoError::ClosedResource)
        ));
    }
}
