use std::{
    fs::File,
    io::{self, BufRead, Read},
    path::Path,
};

use flate2::read::MultiGzDecoder;

use crate::Result;

/// Counters reported after reading a table.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ParseStats {
    /// Data lines seen
    pub records: usize,
    /// Records handed on
    pub kept: usize,
    /// Data lines whose fields could not be extracted
    pub malformed: usize,
    /// Records dropped by a filter
    pub discarded: usize,
}

/// Line reader over a RepeatMasker report, plain or gzip compressed.
pub struct Reader<R> {
    rdr: io::BufReader<R>,
    line: u64,
    source: String,
}

impl Reader<Box<dyn Read>> {
    /// Open a report. Files ending in `.gz` are decompressed on the fly.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Reader<Box<dyn Read>>> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let inner: Box<dyn Read> = if is_gzipped(path) {
            Box::new(MultiGzDecoder::new(file))
        } else {
            Box::new(file)
        };
        Ok(Reader::with_source(inner, path.display().to_string()))
    }
}

impl<R: io::Read> Reader<R> {
    pub fn new(rdr: R) -> Reader<R> {
        Reader::with_source(rdr, "<input>")
    }

    /// Like `new`, naming the input for diagnostics.
    pub fn with_source(rdr: R, source: impl Into<String>) -> Reader<R> {
        Reader {
            rdr: io::BufReader::new(rdr),
            line: 0,
            source: source.into(),
        }
    }

    /// Name of the input, usually its path.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// 1-based number of the line read last.
    pub fn line(&self) -> u64 {
        self.line
    }

    /// Read the next line into `buf` without its line terminator. Returns
    /// `false` at the end of the input.
    pub(crate) fn read_line(&mut self, buf: &mut String) -> Result<bool> {
        buf.clear();
        let bytes = self.rdr.read_line(buf)?;
        if bytes == 0 {
            return Ok(false);
        }
        self.line += 1;
        if buf.ends_with('\n') {
            buf.pop();
            if buf.ends_with('\r') {
                buf.pop();
            }
        }
        Ok(true)
    }
}

fn is_gzipped(path: &Path) -> bool {
    path.extension().map_or(false, |ext| ext == "gz")
}
