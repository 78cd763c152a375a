use crate::cursor::is_delimiter;
use fastio_common::Position;

/// Result of polling a [`StreamingTokenizer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenPoll {
    /// A complete token.
    Token(String),
    /// More text has to be pushed before the next token can be decided.
    NeedInput,
    /// Input is finished and every token has been handed out.
    EndOfInput,
}

/// Tokenizer that is fed text incrementally instead of pulling from a stream.
///
/// A token is only handed out once a delimiter follows it or the input has
/// been marked finished, so a token split across two pushes comes out whole.
#[derive(Debug)]
pub struct StreamingTokenizer {
    buffer: String,
    current: usize,
    finished: bool,
    position: Position,
    last_token: Position,
}

impl StreamingTokenizer {
    /// Creates a new empty tokenizer.
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            current: 0,
            finished: false,
            position: Position::new(),
            last_token: Position::new(),
        }
    }

    /// Pushes a new character into the buffer.
    pub fn push_char(&mut self, ch: char) {
        self.buffer.push(ch);
        self.finished = false;
    }

    /// Pushes a string slice into the buffer.
    pub fn push_str(&mut self, s: &str) {
        self.buffer.push_str(s);
        self.finished = false;
    }

    /// Marks the input as finished; a trailing token no longer needs a
    /// delimiter after it.
    pub fn mark_finished(&mut self) {
        self.finished = true;
    }

    /// Returns true once [`mark_finished`](Self::mark_finished) has run.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Position of the last token handed out.
    pub fn position(&self) -> Position {
        self.last_token
    }

    /// Bytes pushed but not handed out yet.
    pub fn pending(&self) -> &str {
        &self.buffer[self.current..]
    }

    /// Hands out the next complete token, or says why it cannot yet.
    pub fn poll_token(&mut self) -> TokenPoll {
        while let Some(ch) = self.peek() {
            if !is_delimiter(ch) {
                break;
            }
            self.advance(ch);
        }

        if self.current >= self.buffer.len() {
            self.buffer.clear();
            self.current = 0;
            return if self.finished {
                TokenPoll::EndOfInput
            } else {
                TokenPoll::NeedInput
            };
        }

        let rest = &self.buffer[self.current..];
        let len = match rest.find(is_delimiter) {
            Some(len) => len,
            None if self.finished => rest.len(),
            None => {
                self.compact();
                return TokenPoll::NeedInput;
            }
        };

        let token = rest[..len].to_owned();
        self.last_token = self.position;
        self.position.column += token.chars().count();
        self.position.offset += len;
        self.current += len;
        TokenPoll::Token(token)
    }

    fn peek(&self) -> Option<char> {
        self.buffer[self.current..].chars().next()
    }

    fn advance(&mut self, ch: char) {
        self.current += ch.len_utf8();
        if ch == '\n' {
            self.position = Position::line_start(self.position.line + 1);
        } else {
            self.position.column += 1;
            self.position.offset += ch.len_utf8();
        }
    }

    /// Drops consumed text so a long stream does not grow the buffer.
    fn compact(&mut self) {
        self.buffer.drain(..self.current);
        self.current = 0;
    }
}

impl Default for StreamingTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl From<String> for StreamingTokenizer {
    fn from(value: String) -> Self {
        Self {
            buffer: value,
            finished: true,
            ..Self::new()
        }
    }
}

impl From<&str> for StreamingTokenizer {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}
