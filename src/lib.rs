pub mod analysis;
pub mod args;
pub mod loyalty;
pub mod parser;
pub mod stats;
pub mod utils;

pub use analysis::{analyze_visit_logs, format_loyalty_report, print_loyalty_report};
pub use args::Args;
pub use loyalty::{find_loyal_customers, DEFAULT_THRESHOLD};
pub use parser::parse_log_file;
pub use stats::{DailyVisitMap, PageSet};
