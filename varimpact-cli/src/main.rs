mod cli;
mod handlers;

use log::{Level, error};
use simple_logger::init_with_level;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "varimpact";

    /// String form of [`varimpact_core::consts::DEFAULT_MAF_THRESHOLD`] for
    /// the clap default; checked against the core value in the cli tests.
    pub const DEFAULT_MAF_THRESHOLD_STR: &str = "0.001";
}

fn main() {
    init_with_level(Level::Info).expect("Failed to initialize logger");

    let matches = cli::build_parser().get_matches();

    if let Err(e) = handlers::run_annotate(&matches) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}
