use chrono::{DateTime, FixedOffset};
use lazy_static::lazy_static;
use regex::Regex;

use data_error::{Result, TailscanError};

/// Pattern of the timestamps embedded in access-log records, e.g.
/// `06/Dec/2021:18:49:17 +0000`. Long month names are accepted too.
pub const TIMESTAMP_PATTERN: &str = r"\d{1,2}/(Jan(uary)?|Feb(ruary)?|Mar(ch)?|Apr(il)?|May|Jun(e)?|Jul(y)?|Aug(ust)?|Sep(tember)?|Oct(ober)?|Nov(ember)?|Dec(ember)?)/\d{4}:\d{1,2}:\d{1,2}:\d{1,2}\s+\+\d{4}";

/// Chrono format string matching [`TIMESTAMP_PATTERN`].
pub const TIMESTAMP_FORMAT: &str = "%d/%b/%Y:%H:%M:%S %z";

lazy_static! {
    static ref TIMESTAMP_RE: Regex = Regex::new(TIMESTAMP_PATTERN)
        .expect("The timestamp pattern must compile");
}

/// Extract the timestamp of one log record.
///
/// Finds the first [`TIMESTAMP_PATTERN`] match in `record` and parses it.
/// A record without a match, or with a matched time that does not exist,
/// yields [`TailscanError::Timestamp`] carrying the record.
pub fn extract_timestamp(record: &str) -> Result<DateTime<FixedOffset>> {
    let matched = TIMESTAMP_RE
        .find(record)
        .ok_or_else(|| TailscanError::Timestamp(record.to_string()))?;

    log::trace!("Parsing record time {:?}", matched.as_str());

    DateTime::parse_from_str(matched.as_str(), TIMESTAMP_FORMAT)
        .map_err(|_| TailscanError::Timestamp(record.to_string()))
}
