use std::fmt;

/// Top level repeat class of a `class/family` string, e.g. `LINE` for
/// `LINE/L1`. A string without a `/` is its own class.
pub fn repeat_class(family: &str) -> &str {
    family.split('/').next().unwrap_or(family)
}

/// Aggregate repeat content of one sequence, from a RepeatMasker `.tbl`.
/// All values are in base pairs; a line missing from the table leaves 0.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RepeatProportions {
    /// Name given to the analysed sequence
    pub seq_id: String,
    pub total_length: u64,
    pub total_masked: u64,
    /// Total interspersed repeats
    pub interspersed: u64,
    pub dna: u64,
    pub ltr: u64,
    pub line: u64,
    pub sine: u64,
    pub small_rna: u64,
    pub unclassified: u64,
}

impl RepeatProportions {
    pub fn new(seq_id: impl Into<String>) -> Self {
        RepeatProportions {
            seq_id: seq_id.into(),
            ..Default::default()
        }
    }
}

impl fmt::Display for RepeatProportions {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Sequence ID:   {}", self.seq_id)?;
        let rows = [
            ("Total length:", self.total_length),
            ("Total masked:", self.total_masked),
            ("Interspersed:", self.interspersed),
            ("DNA:", self.dna),
            ("LTR:", self.ltr),
            ("LINE:", self.line),
            ("SINE:", self.sine),
            ("Small RNA:", self.small_rna),
            ("Unclassified:", self.unclassified),
        ];
        for (i, (label, bp)) in rows.iter().enumerate() {
            write!(f, "{:<15}{} bp", label, thousands(*bp))?;
            if i + 1 < rows.len() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// `1234567` -> `1,234,567`
fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Strand of an annotated repeat copy. RepeatMasker writes `C` for the
/// complement strand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strand {
    Forward,
    Reverse,
}

impl Strand {
    /// Parse a strand column. Anything other than `+`, `-` or `C` is rejected.
    pub fn parse(s: &str) -> Option<Strand> {
        match s {
            "+" => Some(Strand::Forward),
            "-" | "C" => Some(Strand::Reverse),
            _ => None,
        }
    }
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Strand::Forward => write!(f, "+"),
            Strand::Reverse => write!(f, "-"),
        }
    }
}

/// One annotated repeat copy, a data row of a RepeatMasker `.out` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepeatAnnotation {
    /// Name of the matching repeat, the join key into the divergence index
    pub name: String,
    /// Full `class/family` string
    pub family: String,
    /// Query sequence (chromosome or contig)
    pub chrom: String,
    /// Coordinates as written in the table (1-based, inclusive)
    pub start: u64,
    pub end: u64,
    pub strand: Strand,
    /// Smith-Waterman alignment score
    pub score: u64,
}

impl RepeatAnnotation {
    pub fn class(&self) -> &str {
        repeat_class(&self.family)
    }
}

/// Divergence summary of one repeat, a data row of a `.divsum` table.
#[derive(Debug, Clone, PartialEq)]
pub struct RepeatDivergence {
    /// Full `class/family` string
    pub family: String,
    /// Repeat identifier
    pub id: String,
    /// Absolute length covered by the repeat
    pub abs_len: u64,
    /// Well characterized bases
    pub well_char_len: u64,
    /// Kimura divergence as a fraction (the table holds a percentage)
    pub kimura: f64,
}

impl RepeatDivergence {
    pub fn class(&self) -> &str {
        repeat_class(&self.family)
    }
}
