//! The two jobs of the tool, from input paths to written tables.

use std::path::Path;

use log::info;

use crate::config::{check_input, MergeOptions, OutputConfig};
use crate::crossmatch::read_cross_match;
use crate::divsum::DivergenceIndex;
use crate::merge::{merge, MergeStats};
use crate::proportions::ProportionTable;
use crate::reader::{ParseStats, Reader};
use crate::record::RepeatProportions;
use crate::writer::{Table, Writer};
use crate::Result;

/// Read a `.tbl` summary and write `{basename}.repeat_proportions.tsv`.
/// The basename doubles as the sequence identifier.
pub fn extract_proportions<P: AsRef<Path>>(
    rm_table: P,
    out: &OutputConfig,
) -> Result<RepeatProportions> {
    let rm_table = rm_table.as_ref();
    out.validate()?;
    check_input(rm_table)?;

    let props = Reader::from_path(rm_table)?.read_proportions(&out.basename)?;
    let table = ProportionTable::compute(&props)?;
    Writer::from_path(out.path(Table::Proportions))?.write_proportions(&table)?;

    info!("\n{}", props);
    Ok(props)
}

/// What `merge_reports` read and wrote.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MergeReport {
    pub cross_match: ParseStats,
    pub divsum: ParseStats,
    pub merge: MergeStats,
}

/// Read a `.out` table and a `.divsum` table, then write the merged
/// annotation table and the cleaned divergence table. Nothing is written
/// when the merge finds inconsistent records.
pub fn merge_reports<P: AsRef<Path>, Q: AsRef<Path>>(
    cross_match: P,
    divsum: Q,
    out: &OutputConfig,
    options: &MergeOptions,
) -> Result<MergeReport> {
    let (cross_match, divsum) = (cross_match.as_ref(), divsum.as_ref());
    out.validate()?;
    check_input(cross_match)?;
    check_input(divsum)?;

    let table = read_cross_match(&mut Reader::from_path(cross_match)?)?;
    let (index, divsum_stats) =
        DivergenceIndex::from_reader(&mut Reader::from_path(divsum)?, options.min_len)?;

    let (rows, merge_stats) = merge(table.annotations, &index, options.strict_family)?;
    Writer::from_path(out.path(Table::Merged))?.write_merged(&rows)?;

    info!("Printing clean divsum file...");
    Writer::from_path(out.path(Table::Divsum))?.write_divsum(&index)?;

    Ok(MergeReport {
        cross_match: table.stats,
        divsum: divsum_stats,
        merge: merge_stats,
    })
}
