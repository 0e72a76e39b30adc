//! # Data Logline
//!
//! `data-logline` holds the record-level concerns of tailscan: pulling the
//! timestamp out of an access-log record and deciding whether it falls in
//! a trailing time window. The byte-level scanning of log files lives in
//! `fs-revscan`; this crate never touches the filesystem.

mod timestamp;
mod window;

pub use timestamp::{extract_timestamp, TIMESTAMP_FORMAT, TIMESTAMP_PATTERN};
pub use window::TrailingWindow;
