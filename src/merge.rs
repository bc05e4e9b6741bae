//! Join repeat annotations against the divergence index.

use log::info;

use crate::divsum::DivergenceIndex;
use crate::record::RepeatAnnotation;
use crate::{Error, ErrorKind, Result};

/// An annotation with the divergence values of its repeat, when the
/// divergence summary has one.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedRow {
    pub annotation: RepeatAnnotation,
    pub well_char_len: Option<u64>,
    pub kimura: Option<f64>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MergeStats {
    /// Rows produced, one per annotation
    pub exported: usize,
    /// Rows that found a divergence record
    pub matched: usize,
}

/// Merge every annotation with the divergence record of the same name,
/// ordered by start coordinate (ties keep read order). A matched pair with
/// different repeat classes means the two tables come from different runs
/// and stops the merge. With `strict_family` the full family must agree
/// as well.
pub fn merge(
    mut annotations: Vec<RepeatAnnotation>,
    index: &DivergenceIndex,
    strict_family: bool,
) -> Result<(Vec<MergedRow>, MergeStats)> {
    info!("Matching cross_match and divsum records...");
    // stable sort
    annotations.sort_by_key(|a| a.start);

    let mut stats = MergeStats::default();
    let mut rows = Vec::with_capacity(annotations.len());

    for annotation in annotations {
        let (well_char_len, kimura) = match index.get(&annotation.name) {
            Some(divergence) => {
                if annotation.class() != divergence.class() {
                    return Err(Error::new(ErrorKind::ClassMismatch {
                        name: annotation.name.clone(),
                        annotation: annotation.class().to_string(),
                        divergence: divergence.class().to_string(),
                    }));
                }
                if strict_family && annotation.family != divergence.family {
                    return Err(Error::new(ErrorKind::FamilyMismatch {
                        name: annotation.name.clone(),
                        annotation: annotation.family.clone(),
                        divergence: divergence.family.clone(),
                    }));
                }
                stats.matched += 1;
                (Some(divergence.well_char_len), Some(divergence.kimura))
            }
            None => (None, None),
        };
        stats.exported += 1;
        rows.push(MergedRow {
            annotation,
            well_char_len,
            kimura,
        });
    }

    info!(
        "Exported a total of {} records, {} with a divergence summary.",
        stats.exported, stats.matched
    );
    Ok((rows, stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{RepeatDivergence, Strand};

    fn annotation(name: &str, family: &str, start: u64) -> RepeatAnnotation {
        RepeatAnnotation {
            name: name.to_string(),
            family: family.to_string(),
            chrom: "chr1".to_string(),
            start,
            end: start + 300,
            strand: Strand::Forward,
            score: 1000,
        }
    }

    fn divergence(id: &str, family: &str) -> RepeatDivergence {
        RepeatDivergence {
            family: family.to_string(),
            id: id.to_string(),
            abs_len: 5000,
            well_char_len: 4800,
            kimura: 0.0452,
        }
    }

    #[test]
    fn test_matched_row_is_populated() {
        let mut index = DivergenceIndex::new();
        index.insert(divergence("AluY", "SINE/Alu"));

        let (rows, stats) = merge(vec![annotation("AluY", "SINE/Alu", 10)], &index, false).unwrap();
        assert_eq!(stats, MergeStats { exported: 1, matched: 1 });
        assert_eq!(rows[0].annotation.name, "AluY");
        assert_eq!(rows[0].well_char_len, Some(4800));
        assert_eq!(rows[0].kimura, Some(0.0452));
    }

    #[test]
    fn test_unmatched_row_is_kept() {
        let mut index = DivergenceIndex::new();
        index.insert(divergence("L1HS", "LINE/L1"));

        let (rows, stats) = merge(vec![annotation("AluY", "SINE/Alu", 10)], &index, false).unwrap();
        assert_eq!(stats, MergeStats { exported: 1, matched: 0 });
        assert_eq!(rows[0].well_char_len, None);
        assert_eq!(rows[0].kimura, None);
    }

    #[test]
    fn test_class_mismatch_is_fatal() {
        let mut index = DivergenceIndex::new();
        index.insert(divergence("AluY", "LINE/L1"));

        let err = merge(vec![annotation("AluY", "SINE/Alu", 10)], &index, false).unwrap_err();
        match err.kind() {
            ErrorKind::ClassMismatch { name, annotation, divergence } => {
                assert_eq!(name, "AluY");
                assert_eq!(annotation, "SINE");
                assert_eq!(divergence, "LINE");
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_family_mismatch_only_when_strict() {
        let mut index = DivergenceIndex::new();
        index.insert(divergence("AluY", "SINE/MIR"));
        let annotations = vec![annotation("AluY", "SINE/Alu", 10)];

        assert!(merge(annotations.clone(), &index, false).is_ok());
        let err = merge(annotations, &index, true).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::FamilyMismatch { .. }));
    }

    #[test]
    fn test_sorted_by_start_and_stable() {
        let annotations = vec![
            annotation("c", "LINE/L1", 500),
            annotation("a", "SINE/Alu", 100),
            annotation("b", "DNA/TcMar", 500),
            annotation("d", "LTR/ERVL", 100),
        ];
        let (rows, stats) = merge(annotations, &DivergenceIndex::new(), false).unwrap();
        let names: Vec<&str> = rows.iter().map(|r| r.annotation.name.as_str()).collect();
        assert_eq!(names, vec!["a", "d", "c", "b"]);
        assert_eq!(stats.exported, 4);
    }
}
