use thiserror::Error;

/// Error type in prt.
///
/// The two prefixed variants carry the exact wording the binary prints
/// to stderr before exiting with status 1.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed command-line syntax, raised before any I/O happens.
    #[error("Options parsing error: {0}")]
    Options(#[from] clap::Error),

    /// A stream failed to open, read or write.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A part or chunk size of zero would never make progress.
    #[error("chunk size must be at least one byte, got {0}")]
    InvalidChunkSize(usize),
}

pub type Result<T> = std::result::Result<T, Error>;
