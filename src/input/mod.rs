use std::{
    fs::File,
    io::{self, BufRead, BufReader},
};

use crate::types::{Config, PageBounds};

const FORM_FEED: u8 = 0x0C;

/// Reads a text source one unit at a time and reports which page each unit
/// belongs to. A unit is a line in line-count mode or a form-feed-delimited
/// chunk in form-feed mode; the delimiter itself is stripped.
pub struct PagedReader {
    reader: Box<dyn BufRead>,
    bounds: PageBounds,
    buffer: Vec<u8>,
    unit_count: usize,
    page_offset: usize,
}

impl PagedReader {
    /// Opens the configured file, or locks stdin when no path is given.
    pub fn open(config: &Config) -> Result<Self, String> {
        let reader: Box<dyn BufRead> = match config.input.as_deref() {
            Some(path) => {
                let file = File::open(path)
                    .map_err(|error| format!("failed to open {}: {error}", path.display()))?;
                Box::new(BufReader::new(file))
            }
            None => {
                let stdin = io::stdin();
                Box::new(stdin.lock())
            }
        };

        // Form-feed chunks are never skipped: the page counter runs from the
        // first requested page, so the range bounds how many chunks are
        // read, not which ones.
        let page_offset = match config.bounds {
            PageBounds::Lines(_) => 0,
            PageBounds::FormFeed => config.start_page,
        };

        Ok(PagedReader {
            reader,
            bounds: config.bounds,
            buffer: Vec::new(),
            unit_count: 0,
            page_offset,
        })
    }

    /// Returns the next `(page_index, unit)` pair, or `None` at end of
    /// stream. In line-count mode the page index is computed from the unit
    /// count before this unit is counted; in form-feed mode the counter
    /// starts at the first requested page.
    pub fn next_unit(&mut self) -> Result<Option<(usize, Vec<u8>)>, String> {
        let terminator = match self.bounds {
            PageBounds::Lines(_) => b'\n',
            PageBounds::FormFeed => FORM_FEED,
        };

        let bytes_read = self
            .reader
            .read_until(terminator, &mut self.buffer)
            .map_err(|error| format!("error while reading: {error}"))?;
        if bytes_read == 0 {
            return Ok(None);
        }

        if self.buffer.last() == Some(&terminator) {
            self.buffer.pop();
            if terminator == b'\n' && self.buffer.last() == Some(&b'\r') {
                self.buffer.pop();
            }
        }

        let page_index = match self.bounds {
            PageBounds::Lines(page_length) => self.unit_count / page_length,
            PageBounds::FormFeed => self.page_offset + self.unit_count,
        };
        self.unit_count += 1;

        Ok(Some((page_index, std::mem::take(&mut self.buffer))))
    }
}
