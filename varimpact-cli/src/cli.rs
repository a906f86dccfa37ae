use clap::{Arg, Command, value_parser};

use varimpact_core::consts::DEFAULT_MYVARIANT_API;

use crate::consts;

pub fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about(
            "Annotate genomic variants with snpEff and allele frequency annotations from myvariant.info. \
             Queries the service for every input variant and writes an excel report containing only \
             rare + high impact (transcripts of) variants and novel variants.",
        )
        .arg(
            Arg::new("input")
                .required(true)
                .help("Path to the tab-delimited input file containing variants"),
        )
        .arg(
            Arg::new("output")
                .required(true)
                .help("Path to the output xlsx file to save annotated variants"),
        )
        .arg(
            Arg::new("api-url")
                .long("api-url")
                .default_value(DEFAULT_MYVARIANT_API)
                .help("Base URL of the myvariant.info API"),
        )
        .arg(
            Arg::new("maf-threshold")
                .long("maf-threshold")
                .value_parser(value_parser!(f64))
                .default_value(consts::DEFAULT_MAF_THRESHOLD_STR)
                .help("Keep rare high-impact records with allele frequency strictly below this"),
        )
}
