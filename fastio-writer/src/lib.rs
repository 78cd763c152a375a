//! Buffered output writer with typed print helpers.
//!
//! Write failures are not returned from the print calls. They are recorded
//! in a sticky error slot that [`FastWriter::check_error`] reports on, the
//! same way a `PrintWriter` defers its errors.

pub mod line_ending;
pub mod writer;

pub use fastio_common::{FastIoError, IoConfig, Result};
pub use line_ending::LineEnding;
pub use writer::{FastWriter, StdoutWriter};
