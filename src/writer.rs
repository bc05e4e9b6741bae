//! Tab separated output tables. Values are written as they are, nothing is
//! quoted.

use std::{
    fs::File,
    io::{self, Write},
    path::Path,
};

use crate::divsum::DivergenceIndex;
use crate::format::format_sig;
use crate::merge::MergedRow;
use crate::proportions::ProportionTable;
use crate::Result;

/// Written in place of divergence values for annotations without a
/// divergence record.
pub const MISSING: &str = "None";

/// The three output tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Proportions,
    Merged,
    Divsum,
}

impl Table {
    pub fn suffix(&self) -> &'static str {
        match self {
            Table::Proportions => "repeat_proportions",
            Table::Merged => "repeat_masked_merged",
            Table::Divsum => "divsum",
        }
    }

    pub fn header(&self) -> &'static [&'static str] {
        match self {
            Table::Proportions => &[
                "SequenceID",
                "TotalSeqLen_BP",
                "Masked_BP",
                "Masked_Prop",
                "Interspersed_BP",
                "Interspersed_Prop",
                "DNA_BP",
                "DNA_Prop",
                "LTR_BP",
                "LTR_Prop",
                "LINE_BP",
                "LINE_Prop",
                "SINE_BP",
                "SINE_Prop",
                "smallRNA_BP",
                "smallRNA_Prop",
                "Unclassified_BP",
                "Unclassified_Prop",
            ],
            Table::Merged => &[
                "#Chromosome",
                "StartBP",
                "EndBP",
                "Strand",
                "Name",
                "Class",
                "Family",
                "WellCharLen",
                "Kimura",
                "SwScore",
            ],
            Table::Divsum => &["Class", "Repeat", "absLen", "wellCharLen", "Kimura"],
        }
    }
}

pub struct Writer<W: Write> {
    wtr: io::BufWriter<W>,
}

impl Writer<File> {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Writer<File>> {
        Ok(Writer::new(File::create(path)?))
    }
}

impl<W: Write> Writer<W> {
    pub fn new(wtr: W) -> Writer<W> {
        Writer {
            wtr: io::BufWriter::new(wtr),
        }
    }

    fn write_row<S: AsRef<str>>(&mut self, fields: &[S]) -> Result<()> {
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                self.wtr.write_all(b"\t")?;
            }
            self.wtr.write_all(field.as_ref().as_bytes())?;
        }
        self.wtr.write_all(b"\n")?;
        Ok(())
    }

    /// Header and the single row of the proportions table. Fractions keep 8
    /// significant digits.
    pub fn write_proportions(&mut self, table: &ProportionTable) -> Result<()> {
        self.write_row(Table::Proportions.header())?;
        let mut row = Vec::with_capacity(18);
        row.push(table.seq_id.clone());
        row.push(table.total_length.to_string());
        for value in &table.values {
            row.push(value.bp.to_string());
            row.push(format_sig(value.fraction, 8));
        }
        self.write_row(&row)?;
        self.wtr.flush()?;
        Ok(())
    }

    /// Header and one row per merged annotation. Kimura and the alignment
    /// score keep 6 significant digits.
    pub fn write_merged(&mut self, rows: &[MergedRow]) -> Result<()> {
        self.write_row(Table::Merged.header())?;
        for row in rows {
            let a = &row.annotation;
            self.write_row(&[
                a.chrom.clone(),
                a.start.to_string(),
                a.end.to_string(),
                a.strand.to_string(),
                a.name.clone(),
                a.class().to_string(),
                a.family.clone(),
                row.well_char_len
                    .map_or_else(|| MISSING.to_string(), |len| len.to_string()),
                row.kimura
                    .map_or_else(|| MISSING.to_string(), |k| format_sig(k, 6)),
                format_sig(a.score as f64, 6),
            ])?;
        }
        self.wtr.flush()?;
        Ok(())
    }

    /// Header and the retained divergence records in identifier order.
    /// Kimura keeps 8 significant digits.
    pub fn write_divsum(&mut self, index: &DivergenceIndex) -> Result<()> {
        self.write_row(Table::Divsum.header())?;
        for div in index {
            self.write_row(&[
                div.family.clone(),
                div.id.clone(),
                div.abs_len.to_string(),
                div.well_char_len.to_string(),
                format_sig(div.kimura, 8),
            ])?;
        }
        self.wtr.flush()?;
        Ok(())
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(self) -> Result<W> {
        self.wtr.into_inner().map_err(|e| e.into_error().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{RepeatAnnotation, RepeatDivergence, RepeatProportions, Strand};

    fn written<F: FnOnce(&mut Writer<Vec<u8>>) -> Result<()>>(f: F) -> String {
        let mut wtr = Writer::new(Vec::new());
        f(&mut wtr).unwrap();
        String::from_utf8(wtr.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn test_write_proportions() {
        let mut props = RepeatProportions::new("hg38");
        props.total_length = 1000;
        props.total_masked = 250;
        props.dna = 1;
        let table = ProportionTable::compute(&props).unwrap();

        let out = written(|w| w.write_proportions(&table));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].split('\t').count(), 18);
        assert_eq!(
            lines[1],
            "hg38\t1000\t250\t0.25\t0\t0\t1\t0.001\t0\t0\t0\t0\t0\t0\t0\t0\t0\t0"
        );
        assert!(out.ends_with('\n'));
    }

    #[test]
    fn test_write_merged() {
        let annotation = RepeatAnnotation {
            name: "AluY".to_string(),
            family: "SINE/Alu".to_string(),
            chrom: "chr1".to_string(),
            start: 100,
            end: 400,
            strand: Strand::Reverse,
            score: 2345678,
        };
        let rows = vec![
            MergedRow {
                annotation: annotation.clone(),
                well_char_len: Some(4800),
                kimura: Some(0.0452),
            },
            MergedRow {
                annotation,
                well_char_len: None,
                kimura: None,
            },
        ];

        let out = written(|w| w.write_merged(&rows));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines[0],
            "#Chromosome\tStartBP\tEndBP\tStrand\tName\tClass\tFamily\tWellCharLen\tKimura\tSwScore"
        );
        assert_eq!(lines[1], "chr1\t100\t400\t-\tAluY\tSINE\tSINE/Alu\t4800\t0.0452\t2.34568e+06");
        assert_eq!(lines[2], "chr1\t100\t400\t-\tAluY\tSINE\tSINE/Alu\tNone\tNone\t2.34568e+06");
    }

    #[test]
    fn test_write_divsum() {
        let mut index = DivergenceIndex::new();
        for (family, id, kimura) in [("SINE/Alu", "AluY", 0.0452), ("DNA/hAT", "Charlie1", 0.205)] {
            index.insert(RepeatDivergence {
                family: family.to_string(),
                id: id.to_string(),
                abs_len: 10,
                well_char_len: 9,
                kimura,
            });
        }

        let out = written(|w| w.write_divsum(&index));
        assert_eq!(
            out,
            "Class\tRepeat\tabsLen\twellCharLen\tKimura\nSINE/Alu\tAluY\t10\t9\t0.0452\nDNA/hAT\tCharlie1\t10\t9\t0.205\n"
        );
    }
}
