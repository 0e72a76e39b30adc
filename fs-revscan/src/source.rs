use std::fs::File;
use std::io;

use data_error::Result;

/// A finite sequence of bytes supporting random-access reads.
///
/// The scanner holds an implementor of this trait and pulls sub-ranges on
/// demand; it never closes the source and never relies on a read cursor.
/// Implementations must fill the whole buffer or fail: a short read is a
/// failure, not a partial success.
pub trait RangeRead {
    /// Fill `buf` with the bytes at `[offset, offset + buf.len())`.
    fn read_range(&self, buf: &mut [u8], offset: u64) -> Result<()>;
}

impl RangeRead for File {
    #[cfg(unix)]
    fn read_range(&self, buf: &mut [u8], offset: u64) -> Result<()> {
        use std::os::unix::fs::FileExt;

        self.read_exact_at(buf, offset)?;
        Ok(())
    }

    #[cfg(windows)]
    fn read_range(&self, buf: &mut [u8], offset: u64) -> Result<()> {
        use std::os::windows::fs::FileExt;

        // `seek_read` has no exact-read variant, so loop until the buffer
        // is full and treat running out of file as a failed read.
        let mut filled = 0;
        while filled < buf.len() {
            let read =
                self.seek_read(&mut buf[filled..], offset + filled as u64)?;
            if read == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "failed to fill whole buffer",
                )
                .into());
            }
            filled += read;
        }
        Ok(())
    }
}

impl RangeRead for &File {
    fn read_range(&self, buf: &mut [u8], offset: u64) -> Result<()> {
        (**self).read_range(buf, offset)
    }
}

impl RangeRead for &[u8] {
    fn read_range(&self, buf: &mut [u8], offset: u64) -> Result<()> {
        let start = offset as usize;
        let end = start.checked_add(buf.len());
        match end {
            Some(end) if end <= self.len() => {
                buf.copy_from_slice(&self[start..end]);
                Ok(())
            }
            _ => Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "read past the end of the source",
            )
            .into()),
        }
    }
}

impl RangeRead for Vec<u8> {
    fn read_range(&self, buf: &mut [u8], offset: u64) -> Result<()> {
        self.as_slice().read_range(buf, offset)
    }
}
