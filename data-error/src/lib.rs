use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TailscanError>;

/// Error type shared by all tailscan crates.
#[derive(Error, Debug)]
pub enum TailscanError {
    /// A scan ran out of data. This is the successful end of a scan,
    /// distinct from a read failure.
    #[error("end of scan")]
    EndOfScan,

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("no parsable timestamp in record: {0}")]
    Timestamp(String),

    #[error("invalid time window: {0}")]
    Parse(String),

    #[error("path error: {0}")]
    Path(String),
}
