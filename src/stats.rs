use indexmap::IndexMap;
use std::collections::HashSet;

/// Distinct pages a single customer visited in one day.
pub type PageSet = HashSet<String>;

/// Per-day aggregation: customer ID -> set of distinct pages visited.
/// IndexMap keeps customers in first-seen order, so downstream results
/// follow the order customers appear in the day-1 log.
pub type DailyVisitMap = IndexMap<String, PageSet>;
