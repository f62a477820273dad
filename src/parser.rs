use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;
use tracing::info;

use crate::stats::DailyVisitMap;

/// Parses one day's visit log into a customer -> distinct-pages mapping.
///
/// Each meaningful line is `<timestamp> <pageId> <customerId>` separated by
/// runs of whitespace. The timestamp is read but unused. Lines with fewer
/// than three fields are dropped silently; fields past the third are ignored.
pub fn parse_log_file(path: &Path) -> Result<DailyVisitMap> {
    let start_time = Instant::now();
    info!(action = "start", component = "log_parse", path = ?path, "Parsing visit log");

    let file =
        File::open(path).with_context(|| format!("Could not open file: {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut visits = DailyVisitMap::new();
    let mut line_count: usize = 0;

    for line in reader.lines() {
        let line = line.with_context(|| format!("Could not read file: {}", path.display()))?;
        line_count += 1;

        let mut fields = line.split_whitespace();
        let (Some(_timestamp), Some(page_id), Some(customer_id)) =
            (fields.next(), fields.next(), fields.next())
        else {
            continue;
        };

        visits
            .entry(customer_id.to_string())
            .or_default()
            .insert(page_id.to_string());
    }

    info!(
        action = "complete",
        component = "log_parse",
        path = ?path,
        line_count,
        customer_count = visits.len(),
        duration_ms = start_time.elapsed().as_millis(),
        "Visit log parsed"
    );
    Ok(visits)
}
