use std::env;
use std::fs::File;

use anyhow::Result;

use data_error::TailscanError;
use fs_revscan::RevLineScanner;

/// A simple example of how to use [`RevLineScanner`] to print the last
/// lines of a file, newest first, without reading the whole file.
fn main() -> Result<()> {
    let path = env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("Usage: tail <file> [count]"))?;
    let count: usize = match env::args().nth(2) {
        Some(raw) => raw.parse()?,
        None => 10,
    };

    let file = File::open(&path)?;
    let len = file.metadata()?.len();

    // Walk backward from the end of the file, one line per call.
    let mut scanner = RevLineScanner::new(file, len);
    for _ in 0..count {
        match scanner.next_line() {
            Ok(line) => println!("{:>10}  {}", line.start(), line.text()),
            Err(TailscanError::EndOfScan) => break,
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}
