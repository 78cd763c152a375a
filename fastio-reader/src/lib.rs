//! Whitespace-tokenizing input reader.
//!
//! ```no_run
//! use fastio_reader::FastReader;
//!
//! # fn main() -> fastio_reader::Result<()> {
//! let mut reader = FastReader::stdin();
//! let n = reader.next_int()? as usize;
//! let values = reader.next_long_array(n)?;
//! # let _ = values;
//! # Ok(())
//! # }
//! ```

pub mod cursor;
pub mod reader;
#[cfg(feature = "streaming")]
pub mod streaming;
pub mod traits;

pub use cursor::{is_delimiter, Cursor};
pub use fastio_common::{FastIoError, IoConfig, Position, Result, TextSlice};
pub use reader::{FastReader, StdinReader, Tokens};
pub use traits::FromToken;
