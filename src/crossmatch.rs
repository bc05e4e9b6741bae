//! Repeat annotations from the cross_match style RepeatMasker `.out` table.

use std::io::Read;

use log::{error, info};

use crate::classify::{cross_match_line, LineKind};
use crate::reader::{ParseStats, Reader};
use crate::record::{RepeatAnnotation, Strand};
use crate::{Error, ErrorKind, Result};

/// Annotations kept from a `.out` table, in file order.
#[derive(Debug, Default)]
pub struct CrossMatchTable {
    pub annotations: Vec<RepeatAnnotation>,
    pub stats: ParseStats,
}

impl<R: Read> Reader<R> {
    /// A borrowed iterator over the annotations of a `.out` table. A data
    /// line that cannot be extracted yields a `MalformedRecord` error and
    /// iteration can carry on with the next line.
    pub fn annotations(&mut self) -> AnnotationsIter<R> {
        AnnotationsIter::new(self)
    }

    /// Read the next data line as an annotation.
    fn read_annotation(&mut self) -> Result<Option<RepeatAnnotation>> {
        let mut buf = String::new();

        loop {
            if !self.read_line(&mut buf)? {
                return Ok(None);
            }
            if cross_match_line(&buf) != LineKind::Data {
                continue;
            }
            return match parse_annotation(&buf) {
                Some(annotation) => Ok(Some(annotation)),
                None => Err(Error::new(ErrorKind::MalformedRecord {
                    source: self.source().to_string(),
                    line: self.line(),
                    content: buf,
                })),
            };
        }
    }
}

/// Pull the positional fields out of a `.out` data line:
/// score (0), sequence (4), begin (5), end (6), strand (8), repeat (9) and
/// class/family (10).
fn parse_annotation(line: &str) -> Option<RepeatAnnotation> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 11 {
        return None;
    }
    Some(RepeatAnnotation {
        score: fields[0].parse().ok()?,
        chrom: fields[4].to_string(),
        start: fields[5].parse().ok()?,
        end: fields[6].parse().ok()?,
        strand: Strand::parse(fields[8])?,
        name: fields[9].to_string(),
        family: fields[10].to_string(),
    })
}

/// Read every annotation of a `.out` table. Malformed rows are logged and
/// left out; any other error stops the read.
pub fn read_cross_match<R: Read>(rdr: &mut Reader<R>) -> Result<CrossMatchTable> {
    info!("Parsing cross match table...");
    let mut table = CrossMatchTable::default();

    for result in rdr.annotations() {
        table.stats.records += 1;
        match result {
            Ok(annotation) => {
                table.stats.kept += 1;
                table.annotations.push(annotation);
            }
            Err(e) if e.is_malformed_record() => {
                table.stats.malformed += 1;
                error!("{}", e);
            }
            Err(e) => return Err(e),
        }
    }

    info!(
        "Read {} records from the cross_match table file. Retained {} records.",
        table.stats.records, table.stats.kept
    );
    Ok(table)
}

/// A borrowed iterator over the annotations of a `.out` table.
pub struct AnnotationsIter<'r, R: 'r> {
    /// The underlying reader
    rdr: &'r mut Reader<R>,
}

impl<'r, R: Read> AnnotationsIter<'r, R> {
    fn new(rdr: &'r mut Reader<R>) -> AnnotationsIter<'r, R> {
        AnnotationsIter { rdr }
    }

    /// Return a reference to the underlying reader.
    pub fn reader(&self) -> &Reader<R> {
        self.rdr
    }
}

impl<'r, R: Read> Iterator for AnnotationsIter<'r, R> {
    type Item = Result<RepeatAnnotation>;

    fn next(&mut self) -> Option<Result<RepeatAnnotation>> {
        self.rdr.read_annotation().transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OUT: &str = "   SW   perc perc perc  query      position in query           matching       repeat              position in  repeat
score   div. del. ins.  sequence    begin     end    (left)    repeat         class/family         begin  end (left)   ID

  463   1.3  0.6  1.7  chr1          10001   10468 (248945954) +  (CCCTAA)n      Simple_repeat            1    463    (0)      1
 3612  11.4 21.5  1.3  chr1          10469   11447 (248944975) C  TAR1           Satellite/telo       (399)   1712    483      2
  484  25.1 13.2  0.0  chr1          11505   11675 (248944747) C  L1MC5a         LINE/L1             (2382)   5648   5452      3
";

    #[test]
    fn test_read_cross_match() {
        let table = read_cross_match(&mut Reader::new(OUT.as_bytes())).unwrap();
        assert_eq!(table.stats.records, 3);
        assert_eq!(table.stats.kept, 3);
        assert_eq!(table.stats.malformed, 0);

        let tar1 = &table.annotations[1];
        assert_eq!(tar1.score, 3612);
        assert_eq!(tar1.chrom, "chr1");
        assert_eq!(tar1.start, 10469);
        assert_eq!(tar1.end, 11447);
        assert_eq!(tar1.strand, Strand::Reverse);
        assert_eq!(tar1.name, "TAR1");
        assert_eq!(tar1.family, "Satellite/telo");
        assert_eq!(tar1.class(), "Satellite");
        assert_eq!(table.annotations[0].strand, Strand::Forward);
    }

    #[test]
    fn test_short_line_is_skipped() {
        let out = "# comment\n  463   1.3  0.6  1.7  chr1  10001\n  484  25.1 13.2  0.0  chr1  11505  11675 (2) C  L1MC5a  LINE/L1\n";
        let table = read_cross_match(&mut Reader::new(out.as_bytes())).unwrap();
        assert_eq!(table.stats.records, 2);
        assert_eq!(table.stats.kept, 1);
        assert_eq!(table.stats.malformed, 1);
        assert_eq!(table.annotations.len(), 1);
        assert_eq!(table.annotations[0].name, "L1MC5a");
    }

    #[test]
    fn test_malformed_error_names_line() {
        let out = "header\n  463   1.3  0.6\n";
        let mut rdr = Reader::with_source(out.as_bytes(), "genome.out");
        let err = rdr.annotations().next().unwrap().unwrap_err();
        assert!(err.is_malformed_record());
        match err.kind() {
            ErrorKind::MalformedRecord { source, line, content } => {
                assert_eq!(source, "genome.out");
                assert_eq!(*line, 2);
                assert_eq!(content, "  463   1.3  0.6");
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_non_numeric_coordinate_is_malformed() {
        let out = "  463 1.3 0.6 1.7 chr1 start 10468 (1) + AluY SINE/Alu\n";
        let table = read_cross_match(&mut Reader::new(out.as_bytes())).unwrap();
        assert_eq!(table.stats.malformed, 1);
        assert!(table.annotations.is_empty());
    }
}
