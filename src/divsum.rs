//! Per-repeat divergence summaries from a RepeatMasker `.divsum` table and
//! the index the merge looks them up in.

use std::collections::btree_map::{self, BTreeMap};
use std::io::Read;

use log::info;

use crate::classify::{divsum_line, LineKind};
use crate::reader::{ParseStats, Reader};
use crate::record::RepeatDivergence;
use crate::{Error, ErrorKind, Result};

impl<R: Read> Reader<R> {
    /// A borrowed iterator over the divergence records of a `.divsum` table.
    pub fn divergences(&mut self) -> DivergencesIter<R> {
        DivergencesIter::new(self)
    }

    fn read_divergence(&mut self) -> Result<Option<RepeatDivergence>> {
        let mut buf = String::new();

        loop {
            if !self.read_line(&mut buf)? {
                return Ok(None);
            }
            if divsum_line(&buf) != LineKind::Data {
                continue;
            }
            return parse_divergence(&buf).map(Some).map_err(|e| {
                Error::new(ErrorKind::Parser(format!(
                    "line {} of {}, {}",
                    self.line(),
                    self.source(),
                    e
                )))
            });
        }
    }
}

/// Columns: class/family, repeat, absLen, wellCharLen, Kimura%.
fn parse_divergence(line: &str) -> Result<RepeatDivergence> {
    let fields: Vec<&str> = line.split('\t').map(str::trim).collect();
    if let [family, id, abs_len, well_char_len, kimura] = &fields[..] {
        Ok(RepeatDivergence {
            family: family.to_string(),
            id: id.to_string(),
            abs_len: abs_len.parse::<u64>()?,
            well_char_len: well_char_len.parse::<u64>()?,
            kimura: kimura.parse::<f64>()? / 100.0,
        })
    } else {
        Err(Error::new(ErrorKind::Parser(
            "could not split into 5 tab separated columns".into(),
        )))
    }
}

/// Divergence records keyed by repeat identifier. Iteration is in
/// ascending identifier order.
#[derive(Debug, Default, Clone)]
pub struct DivergenceIndex {
    records: BTreeMap<String, RepeatDivergence>,
}

impl DivergenceIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a `.divsum` table, dropping records with fewer well
    /// characterized bases than `min_len`. A repeat listed twice keeps its
    /// last record.
    pub fn from_reader<R: Read>(
        rdr: &mut Reader<R>,
        min_len: Option<u64>,
    ) -> Result<(DivergenceIndex, ParseStats)> {
        info!("Parsing divergence summary table...");
        let mut index = DivergenceIndex::new();
        let mut stats = ParseStats::default();

        for result in rdr.divergences() {
            let divergence = result?;
            stats.records += 1;
            if min_len.map_or(false, |min| divergence.well_char_len < min) {
                stats.discarded += 1;
                continue;
            }
            stats.kept += 1;
            index.insert(divergence);
        }

        info!(
            "Extracted {} records from divergence summary table file. Discarded {} records.",
            stats.records, stats.discarded
        );
        Ok((index, stats))
    }

    /// Add a record, replacing any earlier one with the same identifier.
    pub fn insert(&mut self, divergence: RepeatDivergence) -> Option<RepeatDivergence> {
        self.records.insert(divergence.id.clone(), divergence)
    }

    pub fn get(&self, id: &str) -> Option<&RepeatDivergence> {
        self.records.get(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> btree_map::Values<'_, String, RepeatDivergence> {
        self.records.values()
    }
}

impl<'a> IntoIterator for &'a DivergenceIndex {
    type Item = &'a RepeatDivergence;
    type IntoIter = btree_map::Values<'a, String, RepeatDivergence>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A borrowed iterator over the records of a `.divsum` table.
pub struct DivergencesIter<'r, R: 'r> {
    /// The underlying reader
    rdr: &'r mut Reader<R>,
}

impl<'r, R: Read> DivergencesIter<'r, R> {
    fn new(rdr: &'r mut Reader<R>) -> DivergencesIter<'r, R> {
        DivergencesIter { rdr }
    }

    /// Return a reference to the underlying reader.
    pub fn reader(&self) -> &Reader<R> {
        self.rdr
    }
}

impl<'r, R: Read> Iterator for DivergencesIter<'r, R> {
    type Item = Result<RepeatDivergence>;

    fn next(&mut self) -> Option<Result<RepeatDivergence>> {
        self.rdr.read_divergence().transpose()
    }
}
