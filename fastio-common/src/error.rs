use crate::Position;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the fast reader and writer.
#[derive(Error, Debug)]
pub enum FastIoError {
    #[error("end of input")]
    EndOfInput,

    #[error("malformed {kind} literal {token:?} at {position}")]
    MalformedNumber {
        kind: &'static str,
        token: String,
        position: Position,
    },

    #[error("empty token")]
    EmptyToken,

    #[error("file not found: {}", path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot create file: {}", path.display())]
    FileCreateError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("resource already closed")]
    ClosedResource,

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

impl FastIoError {
    /// Returns true if this error only signals that the input ran out.
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, Self::EndOfInput)
    }
}

pub type Result<T> = std::result::Result<T, FastIoError>;
