//! Repeat totals from the RepeatMasker summary table (`.tbl`).

use std::io::Read;

use log::debug;

use crate::classify::{is_border, summary_rule};
use crate::reader::Reader;
use crate::record::RepeatProportions;
use crate::{Error, ErrorKind, Result};

impl<R: Read> Reader<R> {
    /// Read the whole summary table into a `RepeatProportions` named
    /// `seq_id`. Unrecognised lines are ignored and totals missing from
    /// the table stay at 0.
    pub fn read_proportions(&mut self, seq_id: &str) -> Result<RepeatProportions> {
        let mut props = RepeatProportions::new(seq_id);
        let mut buf = String::new();

        while self.read_line(&mut buf)? {
            if buf.is_empty() || is_border(&buf) {
                continue;
            }
            let line = buf.trim_start_matches(' ');
            let rule = match summary_rule(line) {
                Some(rule) => rule,
                None => continue,
            };
            let bp = line
                .split_whitespace()
                .nth(rule.field)
                .and_then(|field| field.parse::<u64>().ok())
                .ok_or_else(|| {
                    Error::new(ErrorKind::Parser(format!(
                        "line {} of {}, no base pair count in field {} of '{}'",
                        self.line(),
                        self.source(),
                        rule.field,
                        line
                    )))
                })?;
            debug!("{}: {} bp", rule.prefix, bp);
            (rule.set)(&mut props, bp);
        }

        Ok(props)
    }
}
