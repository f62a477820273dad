use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "loyaltee",
    about = "Find loyal customers from two daily page-visit log files",
    version,
    long_about = None
)]
pub struct Args {
    /// Path to the day-1 log file
    pub day1: PathBuf,

    /// Path to the day-2 log file
    pub day2: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
