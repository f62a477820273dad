use anyhow::Result;
use std::time::Instant;
use tracing::info;

use crate::{loyalty, parser, Args};

/// Runs the full pipeline: parse both daily logs in sequence, then keep the
/// customers loyal across both days. Fails fast if either file cannot be
/// read; day 2 is never opened when day 1 fails.
pub fn analyze_visit_logs(args: &Args) -> Result<Vec<String>> {
    let total_start_time = Instant::now();
    info!(action = "start", component = "loyalty_analysis", "Starting loyalty analysis");

    let day1_visits = parser::parse_log_file(&args.day1)?;
    let day2_visits = parser::parse_log_file(&args.day2)?;

    let loyal_customers =
        loyalty::find_loyal_customers(&day1_visits, &day2_visits, loyalty::DEFAULT_THRESHOLD);

    info!(
        action = "complete",
        component = "loyalty_analysis",
        day1_customers = day1_visits.len(),
        day2_customers = day2_visits.len(),
        loyal_count = loyal_customers.len(),
        duration_ms = total_start_time.elapsed().as_millis(),
        "Loyalty analysis completed"
    );

    Ok(loyal_customers)
}

/// Renders the report exactly as emitted on stdout, trailing newline included.
pub fn format_loyalty_report(loyal_customers: &[String]) -> String {
    let mut report = String::from("Loyal Customers ID:\n");

    if loyal_customers.is_empty() {
        report.push_str("Loyal customers not available.\n");
    } else {
        for customer_id in loyal_customers {
            report.push_str(customer_id);
            report.push('\n');
        }
    }

    report
}

pub fn print_loyalty_report(loyal_customers: &[String]) {
    print!("{}", format_loyalty_report(loyal_customers));
}
