//! Presentation of audit results.
//!
//! - `text`: colored terminal report with verdicts
//! - `json`: machine-readable bundle, to stdout or a file

mod format;
mod json;
mod text;

use std::io::{self, ErrorKind, Write};

pub use format::{format_bytes, format_time};
pub use json::{save_json, write_json};
pub use text::write_report;

/// Writer that treats a closed downstream pipe (`speed_test ... | head`) as success.
pub struct IgnoreBrokenPipe<W: Write> {
    inner: W,
}

impl<W: Write> IgnoreBrokenPipe<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }
}

impl<W: Write> Write for IgnoreBrokenPipe<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf).or_else(|e| {
            if e.kind() == ErrorKind::BrokenPipe {
                Ok(buf.len())
            } else {
                Err(e)
            }
        })
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush().or_else(|e| {
            if e.kind() == ErrorKind::BrokenPipe {
                Ok(())
            } else {
                Err(e)
            }
        })
    }
}
