//! Flattening of annotation payloads into per-transcript records.

use crate::models::{AnnotationRecord, EffectResponse};

/// Project one variant's payload and allele frequency into flat records.
///
/// Returns `None` when the payload itself is absent (the effect lookup
/// failed after retry) so the caller can log the skip and move on. A present
/// payload yields one record per transcript annotation, in service order,
/// with the same `maf` attached to each; a payload without annotations
/// yields an empty vector.
///
/// Records carry the identifier the pipeline queried with, not the service's
/// `_id` echo.
pub fn records_for_variant(
    payload: Option<EffectResponse>,
    maf: Option<f64>,
    variant_id: &str,
) -> Option<Vec<AnnotationRecord>> {
    let payload = payload?;

    let annotations = payload
        .snpeff
        .and_then(|snpeff| snpeff.ann)
        .map(|ann| ann.into_vec())
        .unwrap_or_default();

    let records = annotations
        .into_iter()
        .map(|ann| AnnotationRecord {
            variant_id: variant_id.to_string(),
            gene_id: ann.gene_id,
            gene_name: ann.genename,
            feature_id: ann.feature_id,
            putative_impact: ann.putative_impact,
            maf,
            feature_type: ann.feature_type,
            effect: ann.effect,
            hgvs_c: ann.hgvs_c,
            rank: ann.rank,
            total: ann.total,
            transcript_biotype: ann.transcript_biotype,
        })
        .collect();

    Some(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn two_transcript_payload() -> EffectResponse {
        serde_json::from_value(json!({
            "_id": "1:g.12345A>G",
            "snpeff": {
                "ann": [
                    {
                        "effect": "stop_gained",
                        "feature_id": "NM_000001.1",
                        "feature_type": "transcript",
                        "gene_id": "ENSG00000000001",
                        "genename": "GENE1",
                        "hgvs_c": "c.100A>G",
                        "putative_impact": "HIGH",
                        "rank": 1,
                        "total": 5,
                        "transcript_biotype": "protein_coding"
                    },
                    {
                        "effect": "downstream_gene_variant",
                        "putative_impact": "MODIFIER"
                    }
                ]
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_absent_payload_yields_no_records_signal() {
        assert_eq!(records_for_variant(None, Some(0.5), "1:g.12345A>G"), None);
    }

    #[test]
    fn test_each_transcript_becomes_one_record() {
        let records =
            records_for_variant(Some(two_transcript_payload()), Some(0.0001), "1:g.12345A>G")
                .unwrap();

        assert_eq!(records.len(), 2);
        for record in &records {
            assert_eq!(record.variant_id, "1:g.12345A>G");
            assert_eq!(record.maf, Some(0.0001));
        }
        assert_eq!(records[0].gene_name.as_deref(), Some("GENE1"));
        assert_eq!(records[0].rank, Some(1));
        assert_eq!(records[1].putative_impact.as_deref(), Some("MODIFIER"));
        // Sub-fields the service omitted default to absent.
        assert_eq!(records[1].gene_id, None);
        assert_eq!(records[1].rank, None);
    }

    #[test]
    fn test_missing_annotation_list_yields_empty_records() {
        let payload: EffectResponse =
            serde_json::from_value(json!({"_id": "1:g.12345A>G"})).unwrap();
        let records = records_for_variant(Some(payload), None, "1:g.12345A>G").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_novel_variant_records_have_no_maf() {
        let records =
            records_for_variant(Some(two_transcript_payload()), None, "1:g.12345A>G").unwrap();
        assert!(records.iter().all(|r| r.maf.is_none()));
    }
}
