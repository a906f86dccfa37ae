//! The annotation pipeline: identifier → lookups → flatten → filter.

use log::{info, warn};

use crate::client::MyVariantClient;
use crate::consts::DEFAULT_MAF_THRESHOLD;
use crate::filter::retain_reportable;
use crate::models::{AnnotationRecord, VariantRow};
use crate::normalize::records_for_variant;

/// Builder for constructing an [`Annotator`] with custom configuration.
#[derive(Default)]
pub struct AnnotatorBuilder {
    client: Option<MyVariantClient>,
    maf_threshold: Option<f64>,
}

impl AnnotatorBuilder {
    /// Creates a new, empty AnnotatorBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the annotation service client.
    pub fn with_client(mut self, client: MyVariantClient) -> Self {
        self.client = Some(client);
        self
    }

    /// Sets the rarity threshold for the impact filter.
    pub fn with_maf_threshold(mut self, maf_threshold: f64) -> Self {
        self.maf_threshold = Some(maf_threshold);
        self
    }

    /// Consumes the builder and creates an Annotator.
    pub fn finish(self) -> Annotator {
        Annotator {
            client: self.client.unwrap_or_default(),
            maf_threshold: self.maf_threshold.unwrap_or(DEFAULT_MAF_THRESHOLD),
        }
    }
}

/// Runs the annotation pipeline over a list of input variants.
///
/// Variants are processed strictly in input order, one at a time; within a
/// variant, records keep the transcript order the service returned. One
/// variant's unreachable annotation never aborts the run: it contributes
/// zero records and processing continues.
pub struct Annotator {
    client: MyVariantClient,
    maf_threshold: f64,
}

impl Default for Annotator {
    fn default() -> Self {
        Self::builder().finish()
    }
}

impl Annotator {
    /// Creates a new builder for constructing an [`Annotator`].
    pub fn builder() -> AnnotatorBuilder {
        AnnotatorBuilder::default()
    }

    /// Annotate every input row and accumulate the qualifying records.
    pub fn annotate(&self, rows: &[VariantRow]) -> Vec<AnnotationRecord> {
        let mut reportable = Vec::new();

        for row in rows {
            let variant_id = row.hgvs_id();
            info!("Annotating {}", variant_id);

            let payload = self.client.fetch_effect_annotation(&variant_id);
            let maf = self.client.fetch_frequency(&variant_id);

            match records_for_variant(payload, maf, &variant_id) {
                Some(records) => {
                    reportable.extend(retain_reportable(records, self.maf_threshold));
                }
                None => {
                    warn!("Skipping {}: no annotation payload", variant_id);
                }
            }
        }

        reportable
    }
}
