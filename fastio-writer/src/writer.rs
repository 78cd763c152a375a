use crate::line_ending::LineEnding;
use fastio_common::{FastIoError, IoConfig, Result};
use std::fmt::{self, Display};
use std::fs::File;
use std::io::{self, BufWriter, StdoutLock, Write};
use std::path::Path;

/// Writer over the process's standard output.
pub type StdoutWriter = FastWriter<StdoutLock<'static>>;

/// A buffered writer with typed print helpers.
///
/// None of the print methods return errors. The first failure of any write,
/// flush or use after [`close`](Self::close) is kept in a sticky slot that
/// is never cleared; poll it with [`check_error`](Self::check_error).
///
/// Dropping the writer flushes and releases the sink.
pub struct FastWriter<W: Write> {
    sink: Option<BufWriter<W>>,
    line_ending: LineEnding,
    autoflush: bool,
    error: Option<FastIoError>,
}

impl StdoutWriter {
    /// Creates a writer over standard output with the default config.
    pub fn stdout() -> Self {
        Self::stdout_with_config(IoConfig::default())
    }

    /// Creates a writer over standard output using `config`.
    pub fn stdout_with_config(config: IoConfig) -> Self {
        FastWriter::with_config(io::stdout().lock(), config)
    }
}

impl FastWriter<File> {
    /// Creates the file at `path`, truncating it if it already exists.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::create_with_config(path, IoConfig::default())
    }

    /// Creates the file at `path` with the buffering taken from `config`.
    pub fn create_with_config<P: AsRef<Path>>(path: P, config: IoConfig) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| FastIoError::FileCreateError {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "created output file");
        Ok(FastWriter::with_config(file, config))
    }
}

impl<W: Write> FastWriter<W> {
    /// Wraps an arbitrary byte sink.
    pub fn new(inner: W) -> Self {
        Self::with_config(inner, IoConfig::default())
    }

    /// Wraps `inner` with the buffer size and autoflush from `config`.
    pub fn with_config(inner: W, config: IoConfig) -> Self {
        Self {
            sink: Some(BufWriter::with_capacity(config.buffer_capacity, inner)),
            line_ending: LineEnding::default(),
            autoflush: config.autoflush,
            error: None,
        }
    }

    /// Sets the terminator used by the line-ending print methods.
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    /// Returns the configured line terminator.
    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// Writes `value` using its `Display` form.
    pub fn print<T: Display>(&mut self, value: T) {
        self.emit(|sink| write!(sink, "{value}"));
    }

    /// Writes `value` followed by the line terminator.
    pub fn println<T: Display>(&mut self, value: T) {
        let terminator = self.line_ending.as_str();
        self.emit(|sink| write!(sink, "{value}{terminator}"));
        self.end_line();
    }

    /// Writes only the line terminator.
    pub fn newline(&mut self) {
        let terminator = self.line_ending.as_str();
        self.emit(|sink| sink.write_all(terminator.as_bytes()));
        self.end_line();
    }

    /// Writes the items separated by single spaces, then the terminator.
    ///
    /// An empty sequence produces an empty line.
    pub fn print_array<I>(&mut self, items: I)
    where
        I: IntoIterator,
        I::Item: Display,
    {
        let terminator = self.line_ending.as_str();
        self.emit(|sink| {
            let mut items = items.into_iter();
            if let Some(first) = items.next() {
                write!(sink, "{first}")?;
                for item in items {
                    write!(sink, " {item}")?;
                }
            }
            sink.write_all(terminator.as_bytes())
        });
        self.end_line();
    }

    /// Target for the `write!` and `writeln!` macros.
    pub fn write_fmt(&mut self, args: fmt::Arguments<'_>) {
        self.emit(|sink| sink.write_fmt(args));
    }

    /// Pushes buffered bytes to the sink.
    pub fn flush(&mut self) {
        self.emit(|sink| sink.flush());
    }

    /// Flushes if still open, then reports whether any write, flush or use
    /// after close has failed so far.
    pub fn check_error(&mut self) -> bool {
        if self.sink.is_some() {
            self.flush();
        }
        self.error.is_some()
    }

    /// The first failure recorded, if any.
    pub fn error(&self) -> Option<&FastIoError> {
        self.error.as_ref()
    }

    /// Returns true once [`close`](Self::close) has run.
    pub fn is_closed(&self) -> bool {
        self.sink.is_none()
    }

    /// Flushes and releases the sink. Calling it again does nothing.
    pub fn close(&mut self) {
        if let Some(mut sink) = self.sink.take() {
            if let Err(err) = sink.flush() {
                self.record(err.into());
            }
            tracing::debug!("writer closed");
        }
    }

    /// Flushes and returns the sink, consuming the writer.
    pub fn into_inner(mut self) -> Result<W> {
        let sink = self.sink.take().ok_or(FastIoError::ClosedResource)?;
        sink.into_inner().map_err(|err| err.into_error().into())
    }

    fn end_line(&mut self) {
        if self.autoflush {
            self.flush();
        }
    }

    fn emit<F>(&mut self, write: F)
    where
        F: FnOnce(&mut BufWriter<W>) -> io::Result<()>,
    {
        let result = match self.sink.as_mut() {
            Some(sink) => write(sink).map_err(FastIoError::from),
            None => Err(FastIoError::ClosedResource),
        };
        if let Err(err) = result {
            self.record(err);
        }
    }

    fn record(&mut self, err: FastIoError) {
        if self.error.is_none() {
            tracing::warn!(error = %err, "output error, further failures are not reported");
            self.error = Some(err);
        }
    }
}

impl<W: Write> fmt::Debug for FastWriter<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FastWriter")
            .field("closed", &self.is_closed())
            .field("line_ending", &self.line_ending)
            .field("autoflush", &self.autoflush)
            .field("error", &self.error)
            .finish()
    }
}

impl<W: Write> Drop for FastWriter<W> {
    fn drop(&mut self) {
        if let Some(mut sink) = self.sink.take() {
            if let Err(err) = sink.flush() {
                tracing::warn!(error = %err, "failed to flush writer on drop");
            }
        }
    }
}
