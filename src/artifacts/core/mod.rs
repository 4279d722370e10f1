//! Core utilities and shared types
//!
//! - `settings`: environment-driven configuration
//! - `PagerWriter`: `Write` adapter over the minus pager

pub mod settings;

use derive_new::new;
use minus::Pager;
use std::io::{self, Write};

/// `Write` sink feeding the minus pager
///
/// History listings write through this instead of stdout. Nothing is shown until the caller
/// hands the pager to `minus::page_all`, after the command has finished.
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let s =
            std::str::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pager.push_str(s).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
