use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use tracing::error;

use loyaltee::{analysis, utils, Args};

fn main() -> Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(_) => {
            // Usage errors go to stdout with exit code 1, not clap's
            // stderr/2 default.
            println!("Usage: loyaltee <day1.txt> <day2.txt>");
            std::process::exit(1);
        }
    };

    utils::setup_logging(args.verbose);

    match analysis::analyze_visit_logs(&args) {
        Ok(loyal_customers) => {
            analysis::print_loyalty_report(&loyal_customers);
            Ok(())
        }
        Err(e) => {
            error!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
