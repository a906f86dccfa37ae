//! Selection of clinically interesting records.

use crate::consts::HIGH_IMPACT;
use crate::models::AnnotationRecord;

/// Whether a record belongs in the report.
///
/// A record qualifies when the service has no frequency data for its variant
/// (novel), or when the frequency is strictly below `maf_threshold` and the
/// putative impact is exactly `HIGH`. Novelty alone qualifies; rarity
/// without high impact does not. The impact match is case-sensitive and a
/// frequency equal to the threshold is not rare.
pub fn is_reportable(record: &AnnotationRecord, maf_threshold: f64) -> bool {
    match record.maf {
        None => true,
        Some(maf) => {
            maf < maf_threshold && record.putative_impact.as_deref() == Some(HIGH_IMPACT)
        }
    }
}

/// Keep the qualifying subset of one variant's records, preserving order.
pub fn retain_reportable(
    records: Vec<AnnotationRecord>,
    maf_threshold: f64,
) -> Vec<AnnotationRecord> {
    records
        .into_iter()
        .filter(|record| is_reportable(record, maf_threshold))
        .collect()
}
