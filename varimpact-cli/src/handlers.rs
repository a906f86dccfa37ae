use anyhow::Result;
use clap::ArgMatches;
use log::info;

use varimpact_core::client::MyVariantClient;
use varimpact_core::input::read_variants;
use varimpact_core::pipeline::Annotator;
use varimpact_core::report::write_report;

/// Execute an annotation run from CLI arguments.
///
/// Reads and validates the input table before any network activity, runs the
/// pipeline, and writes the report only when at least one record qualifies.
pub fn run_annotate(matches: &ArgMatches) -> Result<()> {
    let input = matches
        .get_one::<String>("input")
        .expect("Input path is required");
    let output = matches
        .get_one::<String>("output")
        .expect("Output path is required");
    let api_url = matches
        .get_one::<String>("api-url")
        .expect("API URL has a default");
    let maf_threshold = *matches
        .get_one::<f64>("maf-threshold")
        .expect("MAF threshold has a default");

    let rows = read_variants(input)?;
    info!("Read {} variants from {}", rows.len(), input);

    let client = MyVariantClient::builder()
        .with_base_url(api_url.clone())
        .finish();
    let annotator = Annotator::builder()
        .with_client(client)
        .with_maf_threshold(maf_threshold)
        .finish();

    let records = annotator.annotate(&rows);

    if records.is_empty() {
        println!("No rare high-impact or novel variants found.");
        return Ok(());
    }

    write_report(&records, output)?;
    println!(
        "Wrote {} variant-transcript records to {}",
        records.len(),
        output
    );

    Ok(())
}
