use std::fs::File;
use std::io::Write;
use std::path::Path;

use data_error::{Result, TailscanError};
use data_logline::{extract_timestamp, TrailingWindow};
use fs_revscan::RevLineScanner;

use crate::util::files_newest_first;

/// Outcome counters of an `analyze` run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct AnalyzeSummary {
    /// Records printed, i.e. records inside the window.
    pub printed: u64,
    /// Records skipped for carrying no parsable timestamp.
    pub skipped: u64,
}

/// Write every record of the trailing `minutes` minutes found in `dir` to
/// `out`, newest first.
///
/// Files are visited newest first by modification time and scanned
/// backward, so the newest record overall comes first and anchors the
/// window. The first record older than the window ends the whole run;
/// empty records are passed over, and records without a parsable
/// timestamp are skipped with a warning. A failed read aborts the run
/// with the failure.
pub fn analyze_dir(
    dir: &Path,
    minutes: i64,
    out: &mut impl Write,
) -> Result<AnalyzeSummary> {
    let mut summary = AnalyzeSummary::default();
    let mut window: Option<TrailingWindow> = None;

    for path in files_newest_first(dir)? {
        log::debug!("Scanning {} backward", path.display());

        let file = File::open(&path)?;
        let len = file.metadata()?.len();
        let mut scanner = RevLineScanner::new(file, len);

        loop {
            let line = match scanner.next_line() {
                Ok(line) => line,
                Err(TailscanError::EndOfScan) => break,
                Err(e) => return Err(e),
            };

            if line.bytes().is_empty() {
                continue;
            }

            let text = line.text();
            let time = match extract_timestamp(&text) {
                Ok(time) => time,
                Err(e) => {
                    log::warn!("Skipping record: {}", e);
                    summary.skipped += 1;
                    continue;
                }
            };

            let current = *window.get_or_insert_with(|| {
                TrailingWindow::ending_at(time, minutes)
            });
            if !current.covers(time) {
                return Ok(summary);
            }

            writeln!(out, "{}", text)?;
            summary.printed += 1;
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::thread;
    use std::time::Duration;

    use tempdir::TempDir;

    use super::*;

    fn record(hour: u32, minute: u32) -> String {
        format!(
            "127.0.0.1 user-identifier frank [06/Dec/2021:{:02}:{:02}:00 +0000] \"GET /api/endpoint HTTP/1.0\" 200 5134",
            hour, minute
        )
    }

    /// Write records for every minute of `[from, to]`, ascending.
    fn write_log(dir: &Path, name: &str, hour: u32, from: u32, to: u32) {
        let records: Vec<String> = (from..=to)
            .map(|minute| record(hour, minute))
            .collect();
        fs::write(dir.join(name), records.join("\n") + "\n")
            .expect("Could not write log file");
    }

    fn run(dir: &Path, minutes: i64) -> (AnalyzeSummary, Vec<String>) {
        let mut out = Vec::new();
        let summary = analyze_dir(dir, minutes, &mut out)
            .expect("The analyze run should succeed");
        let lines = String::from_utf8(out)
            .expect("The output is text")
            .lines()
            .map(str::to_string)
            .collect();
        (summary, lines)
    }

    #[test]
    fn analyze_should_print_only_the_trailing_window() {
        let dir = TempDir::new("tailscan-analyze-test")
            .expect("Could not create temp dir");
        write_log(dir.path(), "http.log", 18, 0, 30);

        let (summary, lines) = run(dir.path(), 10);

        // Anchor 18:30, cutoff 18:20; the record at the cutoff is kept.
        assert_eq!(summary.printed, 11);
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], record(18, 30));
        assert_eq!(lines[10], record(18, 20));
    }

    #[test]
    fn analyze_should_stop_at_an_older_file() {
        let dir = TempDir::new("tailscan-analyze-test")
            .expect("Could not create temp dir");
        write_log(dir.path(), "old.log", 17, 0, 30);
        thread::sleep(Duration::from_millis(10));
        write_log(dir.path(), "new.log", 18, 21, 30);

        let (summary, lines) = run(dir.path(), 15);

        // The whole newest file is inside the window; the older file's
        // newest record (17:30) is already outside and ends the run.
        assert_eq!(summary.printed, 10);
        assert_eq!(lines[0], record(18, 30));
        assert_eq!(lines[9], record(18, 21));
    }

    #[test]
    fn analyze_should_continue_into_older_files() {
        let dir = TempDir::new("tailscan-analyze-test")
            .expect("Could not create temp dir");
        write_log(dir.path(), "old.log", 18, 0, 20);
        thread::sleep(Duration::from_millis(10));
        write_log(dir.path(), "new.log", 18, 21, 30);

        let (summary, lines) = run(dir.path(), 30);

        assert_eq!(summary.printed, 31);
        assert_eq!(lines[0], record(18, 30));
        assert_eq!(lines[9], record(18, 21));
        assert_eq!(lines[10], record(18, 20));
        assert_eq!(lines[30], record(18, 0));
    }

    #[test]
    fn analyze_should_skip_blank_and_malformed_records() {
        let dir = TempDir::new("tailscan-analyze-test")
            .expect("Could not create temp dir");
        let content = format!(
            "{}\n\nnot a log record\n{}\n",
            record(18, 29),
            record(18, 30)
        );
        fs::write(dir.path().join("http.log"), content)
            .expect("Could not write log file");

        let (summary, lines) = run(dir.path(), 10);

        assert_eq!(summary.printed, 2);
        assert_eq!(summary.skipped, 1);
        assert_eq!(lines, vec![record(18, 30), record(18, 29)]);
    }

    #[test]
    fn analyze_of_an_empty_directory_should_print_nothing() {
        let dir = TempDir::new("tailscan-analyze-test")
            .expect("Could not create temp dir");

        let (summary, lines) = run(dir.path(), 10);

        assert_eq!(summary, AnalyzeSummary::default());
        assert!(lines.is_empty());
    }
}
