//! Configuration for the error factory.

use std::backtrace::Backtrace;

/// When constructed errors capture a backtrace.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BacktraceMode {
    /// Follow `RUST_BACKTRACE` / `RUST_LIB_BACKTRACE`.
    #[default]
    Auto,
    /// Always capture, regardless of the environment.
    Force,
    Disabled,
}

impl BacktraceMode {
    pub fn capture(self) -> Backtrace {
        match self {
            BacktraceMode::Auto => Backtrace::capture(),
            BacktraceMode::Force => Backtrace::force_capture(),
            BacktraceMode::Disabled => Backtrace::disabled(),
        }
    }
}

/// Configuration options for an [`ErrorFactory`](crate::ErrorFactory).
///
/// ```
/// use erray::{BacktraceMode, Config, ErrorFactory};
///
/// let factory = ErrorFactory::new(Config::default().backtrace(BacktraceMode::Disabled));
/// assert_eq!(factory.config().backtrace, BacktraceMode::Disabled);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Backtrace capture for errors constructed from the built kinds.
    pub backtrace: BacktraceMode,
}

impl Config {
    pub fn backtrace(mut self, mode: BacktraceMode) -> Self {
        self.backtrace = mode;
        self
    }
}
