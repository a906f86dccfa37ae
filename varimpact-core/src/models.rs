//! Data models for the annotation pipeline.
//!
//! Input rows, the myvariant.info payload shapes, and the flat
//! per-transcript record the report is built from.

use serde::Deserialize;

/// One variant from the input table.
///
/// Deserialized from a tab-delimited row with `Chr`, `Position`, `Ref` and
/// `ALT` columns. An empty `ALT` cell becomes `None`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VariantRow {
    #[serde(rename = "Chr")]
    pub chr: String,
    #[serde(rename = "Position")]
    pub position: u64,
    #[serde(rename = "Ref")]
    pub reference: String,
    #[serde(rename = "ALT")]
    pub alt: Option<String>,
}

impl VariantRow {
    /// Build the HGVS-style identifier used to query the annotation service,
    /// e.g. `1:g.12345A>G`.
    ///
    /// A missing alternate allele yields a trailing `>` with no allele
    /// letter. The service resolves identifiers in that form, so the shape
    /// is kept as-is.
    pub fn hgvs_id(&self) -> String {
        format!(
            "{}:g.{}{}>{}",
            self.chr,
            self.position,
            self.reference,
            self.alt.as_deref().unwrap_or("")
        )
    }
}

/// A JSON value that the service returns either as a single object or as a
/// list of objects.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(value) => vec![value],
            OneOrMany::Many(values) => values,
        }
    }
}

/// Response body of the effect-annotation lookup (`fields=snpeff`).
#[derive(Debug, Clone, Deserialize)]
pub struct EffectResponse {
    /// Identifier echo from the service.
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub snpeff: Option<SnpeffBlock>,
}

/// The `snpeff` sub-document of an effect response.
#[derive(Debug, Clone, Deserialize)]
pub struct SnpeffBlock {
    /// One annotation per affected transcript; a single object when the
    /// service collapses a one-element list.
    pub ann: Option<OneOrMany<TranscriptAnnotation>>,
}

/// One transcript-level snpEff annotation. Every field is optional; the
/// service omits whatever it has no value for.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TranscriptAnnotation {
    pub effect: Option<String>,
    pub feature_id: Option<String>,
    pub feature_type: Option<String>,
    pub gene_id: Option<String>,
    pub genename: Option<String>,
    pub hgvs_c: Option<String>,
    pub putative_impact: Option<String>,
    pub rank: Option<u32>,
    pub total: Option<u32>,
    pub transcript_biotype: Option<String>,
}

/// Response body of the frequency lookup (`fields=exac.alleles,exac.af`).
#[derive(Debug, Clone, Deserialize)]
pub struct FrequencyResponse {
    pub exac: Option<ExacBlock>,
}

/// The `exac` sub-document of a frequency response.
#[derive(Debug, Clone, Deserialize)]
pub struct ExacBlock {
    pub alleles: Option<Vec<String>>,
    pub af: Option<f64>,
}

impl FrequencyResponse {
    /// Extract the allele frequency, distinguishing a missing field from a
    /// recorded value of `0.0`.
    pub fn allele_frequency(&self) -> Option<f64> {
        self.exac.as_ref().and_then(|exac| exac.af)
    }
}

/// The flat unit of work: one transcript annotation joined with the owning
/// variant identifier and the variant's allele frequency.
///
/// All records of a variant carry the same `maf`; frequency is a per-variant
/// value, not a per-transcript one. `maf == None` means the service has no
/// frequency record at all (a novel variant), which is distinct from a
/// recorded frequency of `0.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationRecord {
    pub variant_id: String,
    pub gene_id: Option<String>,
    pub gene_name: Option<String>,
    pub feature_id: Option<String>,
    pub putative_impact: Option<String>,
    pub maf: Option<f64>,
    pub feature_type: Option<String>,
    pub effect: Option<String>,
    pub hgvs_c: Option<String>,
    pub rank: Option<u32>,
    pub total: Option<u32>,
    pub transcript_biotype: Option<String>,
}
