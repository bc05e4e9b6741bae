//! Per-line heuristics deciding which lines of a RepeatMasker report carry
//! data. Each format gets its own classifier; the summary table is driven
//! by an ordered rule table so new report lines only need a new entry.

use crate::record::RepeatProportions;

/// What a raw line of a report turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Empty or whitespace only
    Blank,
    /// Starts with `#`
    Comment,
    /// Column headers, separators and category rows
    Header,
    /// A record to extract
    Data,
}

/// First column values of `.divsum` rows that are never records.
pub const DIVSUM_REJECT: [&str; 4] = ["Class", "ARTEFACT", "Simple_repeat", "-----"];

/// Number of tab separated columns of a `.divsum` record.
pub const DIVSUM_COLUMNS: usize = 5;

/// Classify a line of a cross_match style `.out` table. A row is data when
/// its first whitespace delimited field is made of decimal digits.
pub fn cross_match_line(line: &str) -> LineKind {
    if line.starts_with('#') {
        return LineKind::Comment;
    }
    match line.split_whitespace().next() {
        None => LineKind::Blank,
        Some(first) if first.bytes().all(|b| b.is_ascii_digit()) => LineKind::Data,
        Some(_) => LineKind::Header,
    }
}

/// Classify a line of a `.divsum` table. Only rows with exactly five tab
/// separated columns whose first column is not a known placeholder are data.
pub fn divsum_line(line: &str) -> LineKind {
    if line.starts_with('#') {
        return LineKind::Comment;
    }
    if line.is_empty() {
        return LineKind::Blank;
    }
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() != DIVSUM_COLUMNS || DIVSUM_REJECT.contains(&fields[0]) {
        return LineKind::Header;
    }
    LineKind::Data
}

/// Table borders of the `.tbl` summary start with `-` or `=`.
pub fn is_border(line: &str) -> bool {
    line.starts_with('-') || line.starts_with('=')
}

/// One recognised line of the `.tbl` summary: the prefix that identifies
/// it, the whitespace field holding the base pair count, and where the
/// count goes.
pub struct SummaryRule {
    pub prefix: &'static str,
    pub field: usize,
    pub set: fn(&mut RepeatProportions, u64),
}

impl SummaryRule {
    pub fn matches(&self, line: &str) -> bool {
        line.starts_with(self.prefix)
    }
}

/// Recognised `.tbl` lines, first match wins.
pub const SUMMARY_RULES: &[SummaryRule] = &[
    SummaryRule {
        prefix: "total length",
        field: 2,
        set: |p, bp| p.total_length = bp,
    },
    SummaryRule {
        prefix: "bases masked",
        field: 2,
        set: |p, bp| p.total_masked = bp,
    },
    SummaryRule {
        prefix: "Total interspersed",
        field: 3,
        set: |p, bp| p.interspersed = bp,
    },
    SummaryRule {
        prefix: "DNA transposons",
        field: 3,
        set: |p, bp| p.dna = bp,
    },
    SummaryRule {
        prefix: "LTR elements",
        field: 3,
        set: |p, bp| p.ltr = bp,
    },
    SummaryRule {
        prefix: "LINEs",
        field: 2,
        set: |p, bp| p.line = bp,
    },
    SummaryRule {
        prefix: "SINEs",
        field: 2,
        set: |p, bp| p.sine = bp,
    },
    SummaryRule {
        prefix: "Small RNA",
        field: 3,
        set: |p, bp| p.small_rna = bp,
    },
    SummaryRule {
        prefix: "Unclassified",
        field: 2,
        set: |p, bp| p.unclassified = bp,
    },
];

/// Find the rule for an already left-trimmed summary line.
pub fn summary_rule(line: &str) -> Option<&'static SummaryRule> {
    SUMMARY_RULES.iter().find(|rule| rule.matches(line))
}
