use std::borrow::Cow;
use std::io;

use memchr::memrchr;

use data_error::{Result, TailscanError};

use crate::source::RangeRead;

/// How many bytes are pulled from the source per backward read. The final
/// pull (the one reaching offset 0) shrinks to whatever is left.
pub const CHUNK_SIZE: u64 = 1024;

/// One line of a source, as produced by [`RevLineScanner::next_line`].
///
/// The terminal newline is stripped, along with a single `\r` immediately
/// preceding it; carriage returns anywhere else in the line are preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    bytes: Vec<u8>,
    start: u64,
}

impl Line {
    /// Return the raw bytes of the line.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Return the byte offset at which the line starts in the source.
    pub fn start(&self) -> u64 {
        self.start
    }

    /// Return the line as text, replacing invalid UTF-8 sequences.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }

    /// Consume the line, returning its raw bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Sticky end state of a scanner; once set, every further call reports it.
#[derive(Debug)]
enum Terminal {
    EndOfScan,
    Failed { kind: io::ErrorKind, message: String },
}

impl Terminal {
    fn to_error(&self) -> TailscanError {
        match self {
            Terminal::EndOfScan => TailscanError::EndOfScan,
            Terminal::Failed { kind, message } => {
                TailscanError::Io(io::Error::new(*kind, message.clone()))
            }
        }
    }
}

/// Produces the lines of a [`RangeRead`] source in reverse order, walking
/// backward from the end without holding more than the unconsumed tail of
/// the current chunk window in memory.
///
/// Lines come out in strictly decreasing order of starting offset. The
/// scan ends with [`TailscanError::EndOfScan`] once the line starting at
/// offset 0 has been handed out; a read failure ends the scan with that
/// failure instead. Either way the scanner never resumes.
pub struct RevLineScanner<R: RangeRead> {
    source: R,
    /// Offset of the first byte not yet pulled into `buf`.
    pos: u64,
    /// Bytes pulled from the source but not yet emitted as lines.
    buf: Vec<u8>,
    terminal: Option<Terminal>,
    /// The line starting at offset 0 has not been emitted yet.
    head_pending: bool,
    first_pull_done: bool,
}

impl<R: RangeRead> RevLineScanner<R> {
    /// Create a scanner over `source`, whose readable length is `len`
    /// bytes. The length is trusted for the scanner's whole lifetime;
    /// the source must not shrink below it while the scan runs.
    pub fn new(source: R, len: u64) -> Self {
        log::debug!("Scanning {} bytes backward", len);

        RevLineScanner {
            source,
            pos: len,
            buf: Vec::new(),
            terminal: None,
            head_pending: len > 0,
            first_pull_done: false,
        }
    }

    /// Return the next line, walking backward from the end of the source.
    ///
    /// Returns [`TailscanError::EndOfScan`] once the source is exhausted
    /// and the same error again on every later call. A failed read is
    /// returned as-is and repeated the same way.
    pub fn next_line(&mut self) -> Result<Line> {
        if let Some(terminal) = &self.terminal {
            return Err(terminal.to_error());
        }

        loop {
            if let Some(at) = memrchr(b'\n', &self.buf) {
                let bytes = drop_cr(&self.buf[at + 1..]).to_vec();
                let start = self.pos + at as u64 + 1;
                self.buf.truncate(at);
                return Ok(Line { bytes, start });
            }

            if self.pos == 0 {
                if self.head_pending {
                    self.head_pending = false;
                    self.terminal = Some(Terminal::EndOfScan);
                    let bytes = drop_cr(&self.buf).to_vec();
                    self.buf.clear();
                    return Ok(Line { bytes, start: 0 });
                }
                self.terminal = Some(Terminal::EndOfScan);
                return Err(TailscanError::EndOfScan);
            }

            self.pull()?;
        }
    }

    /// Pull one more chunk from the source, prepending it to `buf`.
    fn pull(&mut self) -> Result<()> {
        let size = CHUNK_SIZE.min(self.pos);
        self.pos -= size;
        log::trace!("Pulling {} bytes at offset {}", size, self.pos);

        let mut chunk = vec![0u8; size as usize];
        if let Err(e) = self.source.read_range(&mut chunk, self.pos) {
            self.record_failure(&e);
            return Err(e);
        }

        if !self.first_pull_done {
            self.first_pull_done = true;
            // A newline terminating the whole source closes the last line
            // instead of opening an empty one after it.
            if chunk.last() == Some(&b'\n') {
                chunk.pop();
            }
        }

        chunk.extend_from_slice(&self.buf);
        self.buf = chunk;
        Ok(())
    }

    fn record_failure(&mut self, err: &TailscanError) {
        let (kind, message) = match err {
            TailscanError::Io(e) => (e.kind(), e.to_string()),
            other => (io::ErrorKind::Other, other.to_string()),
        };
        self.terminal = Some(Terminal::Failed { kind, message });
    }
}

/// Drop a single `\r` terminating `bytes`.
fn drop_cr(bytes: &[u8]) -> &[u8] {
    match bytes.split_last() {
        Some((&b'\r', rest)) => rest,
        _ => bytes,
    }
}
