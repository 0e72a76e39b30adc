use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use std::thread;
use std::time::Duration;

use chrono::{DateTime, FixedOffset, Utc};

use data_error::Result;
use data_logline::TIMESTAMP_FORMAT;

/// One generated access-log record stamped with `time`.
fn format_record(time: &DateTime<FixedOffset>) -> String {
    format!(
        "127.0.0.1 user-identifier frank [{}] \"GET /api/endpoint HTTP/1.0\" 200 5134",
        time.format(TIMESTAMP_FORMAT)
    )
}

/// The records of one sample file: `count` records ending at `end`, one
/// minute apart, in ascending time order.
fn records_ending_at(
    end: DateTime<FixedOffset>,
    count: usize,
) -> Vec<String> {
    let mut records: Vec<String> = (0..count)
        .map(|age| format_record(&(end - chrono::Duration::minutes(age as i64))))
        .collect();
    records.reverse();
    records
}

/// Write `files` sample log files of `lines` records each into `dir`.
///
/// An existing target directory is cleared first. Files are named
/// `http-N.log` down to `http-1.log` and created in that order with
/// distinct modification times, so `http-1.log` is the newest by mtime.
pub fn generate_dir(dir: &Path, files: usize, lines: usize) -> Result<()> {
    if dir.exists() {
        log::debug!("Clearing log directory {}", dir.display());
        fs::remove_dir_all(dir)?;
    }
    fs::create_dir_all(dir)?;

    let now = Utc::now().fixed_offset();

    for index in (1..=files).rev() {
        let path = dir.join(format!("http-{}.log", index));
        log::debug!("Writing {} records to {}", lines, path.display());

        let mut file = File::create(&path)?;
        for record in records_ending_at(now, lines) {
            writeln!(file, "{}", record)?;
        }
        drop(file);

        // Space out the modification times so the files stay orderable.
        thread::sleep(Duration::from_millis(10));
    }

    Ok(())
}
