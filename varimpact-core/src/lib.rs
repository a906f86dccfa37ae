//! # Rare/high-impact variant annotation via myvariant.info
//!
//! This crate annotates genomic variants with snpEff functional effects and
//! ExAC allele frequencies fetched from the myvariant.info API, and keeps
//! the variant–transcript pairs that are clinically interesting: novel
//! variants (no frequency record at all) and rare variants (frequency below
//! a threshold) whose putative impact is `HIGH`. It provides:
//!
//! - Typed input rows and HGVS-style identifier construction
//! - A blocking API client with bounded retry for the effect lookup
//! - Payload flattening into one record per affected transcript
//! - The novelty/rarity/severity filter and the sequential pipeline
//! - Tab-delimited input reading and xlsx report writing

pub mod client;
pub mod consts;
pub mod errors;
pub mod filter;
pub mod input;
pub mod models;
pub mod normalize;
pub mod pipeline;
pub mod report;

pub use client::MyVariantClient;
pub use errors::VarimpactError;
pub use filter::{is_reportable, retain_reportable};
pub use input::read_variants;
pub use models::{AnnotationRecord, EffectResponse, VariantRow};
pub use normalize::records_for_variant;
pub use pipeline::Annotator;
pub use report::write_report;
