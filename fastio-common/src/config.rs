/// Environment variable overriding [`IoConfig::buffer_capacity`].
pub const BUFFER_CAPACITY_ENV: &str = "FASTIO_BUFFER_CAPACITY";

/// Environment variable overriding [`IoConfig::autoflush`].
pub const AUTOFLUSH_ENV: &str = "FASTIO_AUTOFLUSH";

/// Default size of the read and write buffers, in bytes.
pub const DEFAULT_BUFFER_CAPACITY: usize = 8 * 1024;

/// Buffering settings shared by the reader and the writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IoConfig {
    /// Capacity of the internal `BufReader` / `BufWriter`.
    pub buffer_capacity: usize,
    /// Flush the writer after every completed line.
    pub autoflush: bool,
}

impl IoConfig {
    /// Default buffer capacity with autoflush off.
    pub fn new() -> Self {
        Self {
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
            autoflush: false,
        }
    }

    /// Builds a config from the defaults overridden by `FASTIO_*` variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from the defaults overridden by whatever `lookup`
    /// returns for the `FASTIO_*` keys. Unparseable values are ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new();

        if let Some(raw) = lookup(BUFFER_CAPACITY_ENV) {
            match raw.trim().parse::<usize>() {
                Ok(capacity) => config = config.with_buffer_capacity(capacity),
                Err(_) => {
                    tracing::debug!(
                        key = BUFFER_CAPACITY_ENV,
                        value = %raw,
                        "ignoring invalid override"
                    );
                }
            }
        }

        if let Some(raw) = lookup(AUTOFLUSH_ENV) {
            match parse_flag(&raw) {
                Some(flag) => config.autoflush = flag,
                None => {
                    tracing::debug!(
                        key = AUTOFLUSH_ENV,
                        value = %raw,
                        "ignoring invalid override"
                    );
                }
            }
        }

        config
    }

    /// Sets the buffer capacity. Zero is clamped to one byte.
    pub fn with_buffer_capacity(mut self, capacity: usize) -> Self {
        self.buffer_capacity = capacity.max(1);
        self
    }

    /// Turns flushing after every completed line on or off.
    pub fn with_autoflush(mut self, autoflush: bool) -> Self {
        self.autoflush = autoflush;
        self
    }
}

impl Default for IoConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
