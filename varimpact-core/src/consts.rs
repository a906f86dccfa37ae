//! Named defaults for the annotation pipeline.

use std::time::Duration;

/// Base URL of the myvariant.info API.
pub const DEFAULT_MYVARIANT_API: &str = "https://myvariant.info/v1";

/// Field subset requested for the effect-annotation lookup.
pub const EFFECT_FIELDS: &str = "snpeff";

/// Field subset requested for the allele-frequency lookup.
pub const FREQUENCY_FIELDS: &str = "exac.alleles,exac.af";

/// Total attempts for the effect-annotation lookup (one retry).
pub const DEFAULT_FETCH_ATTEMPTS: u32 = 2;

/// Pause between effect-annotation attempts.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(1);

/// A variant is rare when its allele frequency is strictly below this.
pub const DEFAULT_MAF_THRESHOLD: f64 = 0.001;

/// The snpEff impact tier that qualifies a rare variant for the report.
pub const HIGH_IMPACT: &str = "HIGH";

/// Columns the input table must carry.
pub const REQUIRED_COLUMNS: [&str; 4] = ["Chr", "Position", "Ref", "ALT"];

/// Worksheet name of the report.
pub const REPORT_SHEET_NAME: &str = "Annotated Variants";

/// Report columns, in display order.
pub const REPORT_COLUMNS: [&str; 12] = [
    "Variant ID",
    "Gene ID",
    "Gene Name",
    "Feature ID",
    "Putative Impact",
    "MAF",
    "Feature Type",
    "Effect",
    "HGVS.c",
    "Rank",
    "Total",
    "Transcript Biotype",
];
