//! Fraction of the sequence taken up by each repeat total.

use crate::record::RepeatProportions;
use crate::{Error, ErrorKind, Result};

/// A base pair total and its fraction of the sequence length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Proportion {
    pub bp: u64,
    pub fraction: f64,
}

/// Every total of a `RepeatProportions` divided by its sequence length, in
/// output column order: masked, interspersed, DNA, LTR, LINE, SINE, small
/// RNA, unclassified.
#[derive(Debug, Clone, PartialEq)]
pub struct ProportionTable {
    pub seq_id: String,
    pub total_length: u64,
    pub values: [Proportion; 8],
}

impl ProportionTable {
    /// Compute the fractions. A zero total length leaves nothing to divide
    /// by and is an error. The class totals are not checked against the
    /// interspersed total.
    pub fn compute(props: &RepeatProportions) -> Result<ProportionTable> {
        if props.total_length == 0 {
            return Err(Error::new(ErrorKind::ZeroLength(props.seq_id.clone())));
        }
        let total = props.total_length as f64;
        let ratio = |bp: u64| Proportion {
            bp,
            fraction: bp as f64 / total,
        };

        Ok(ProportionTable {
            seq_id: props.seq_id.clone(),
            total_length: props.total_length,
            values: [
                ratio(props.total_masked),
                ratio(props.interspersed),
                ratio(props.dna),
                ratio(props.ltr),
                ratio(props.line),
                ratio(props.sine),
                ratio(props.small_rna),
                ratio(props.unclassified),
            ],
        })
    }
}
