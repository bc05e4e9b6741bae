use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::writer::Table;
use crate::{Error, ErrorKind, Result};

/// Where the output tables go: `{outdir}/{basename}.{suffix}.tsv`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    pub outdir: PathBuf,
    pub basename: String,
}

impl OutputConfig {
    pub fn new(outdir: impl Into<PathBuf>, basename: impl Into<String>) -> Self {
        OutputConfig {
            outdir: outdir.into(),
            basename: basename.into(),
        }
    }

    /// `RepeatMasker_YYYYMMDD` for the given day.
    pub fn default_basename(date: NaiveDate) -> String {
        format!("RepeatMasker_{}", date.format("%Y%m%d"))
    }

    pub fn path(&self, table: Table) -> PathBuf {
        self.outdir
            .join(format!("{}.{}.tsv", self.basename, table.suffix()))
    }

    /// The output directory has to exist already.
    pub fn validate(&self) -> Result<()> {
        if !self.outdir.is_dir() {
            return Err(Error::new(ErrorKind::Usage(format!(
                "Error: '{}' not found.",
                self.outdir.display()
            ))));
        }
        Ok(())
    }
}

/// Settings of the annotation/divergence merge.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MergeOptions {
    /// Minimum well characterized length for a divergence record to be
    /// kept. `None` keeps everything.
    pub min_len: Option<u64>,
    /// Also require the full `class/family` strings to agree.
    pub strict_family: bool,
}

/// Fail with a usage error when an input file is missing.
pub fn check_input(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(Error::new(ErrorKind::Usage(format!(
            "Error: '{}' not found.",
            path.display()
        ))));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_basename() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(OutputConfig::default_basename(date), "RepeatMasker_20240307");
    }

    #[test]
    fn test_paths() {
        let out = OutputConfig::new("results/", "hg38");
        assert_eq!(
            out.path(Table::Proportions),
            Path::new("results/hg38.repeat_proportions.tsv")
        );
        assert_eq!(
            out.path(Table::Merged),
            Path::new("results/hg38.repeat_masked_merged.tsv")
        );
        assert_eq!(out.path(Table::Divsum), Path::new("results/hg38.divsum.tsv"));
    }

    #[test]
    fn test_usage_errors() {
        let out = OutputConfig::new("/definitely/not/here", "x");
        assert!(matches!(out.validate().unwrap_err().kind(), ErrorKind::Usage(_)));
        assert!(check_input(Path::new("/definitely/not/here.out")).is_err());
    }
}
