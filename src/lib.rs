//! Parse the text reports of RepeatMasker into tidy tab separated tables.
//!
//! Two jobs are supported:
//!
//! - the summary table (`.tbl`) is reduced to one row of repeat totals and
//!   their fraction of the sequence length;
//! - the annotation table (`.out`) is merged with the divergence summary
//!   (`.divsum`), adding the well characterized length and the Kimura
//!   divergence of each repeat to every annotated copy.
//!
//! Inputs ending in `.gz` are decompressed on the fly.
//!
//! ```no_run
//! use rmtab::{merge_reports, MergeOptions, OutputConfig};
//!
//! let out = OutputConfig::new("results", "hg38");
//! let options = MergeOptions { min_len: Some(100), ..Default::default() };
//! let report = merge_reports("hg38.fa.out.gz", "hg38.divsum", &out, &options)?;
//! println!("{} rows", report.merge.exported);
//! # Ok::<(), rmtab::Error>(())
//! ```

pub mod classify;
pub mod config;
pub mod crossmatch;
pub mod divsum;
mod error;
pub mod format;
pub mod merge;
pub mod proportions;
pub mod reader;
pub mod record;
pub mod summary;
pub mod workflow;
pub mod writer;

pub use config::{MergeOptions, OutputConfig};
pub use crossmatch::{read_cross_match, CrossMatchTable};
pub use divsum::DivergenceIndex;
pub use error::{Error, ErrorKind, Result};
pub use merge::{merge, MergeStats, MergedRow};
pub use proportions::ProportionTable;
pub use reader::{ParseStats, Reader};
pub use record::{repeat_class, RepeatAnnotation, RepeatDivergence, RepeatProportions, Strand};
pub use workflow::{extract_proportions, merge_reports, MergeReport};
pub use writer::{Table, Writer};
