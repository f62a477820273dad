use crate::stats::DailyVisitMap;

/// Minimum distinct pages per day to count as loyal.
pub const DEFAULT_THRESHOLD: usize = 2;

/// Returns the customers present on both days with at least `threshold`
/// distinct pages on each, in day-1 iteration order. Customers seen only
/// on day 2 are never considered.
pub fn find_loyal_customers(
    day1: &DailyVisitMap,
    day2: &DailyVisitMap,
    threshold: usize,
) -> Vec<String> {
    let mut loyal = Vec::new();

    for (customer_id, day1_pages) in day1 {
        if let Some(day2_pages) = day2.get(customer_id) {
            if day1_pages.len() >= threshold && day2_pages.len() >= threshold {
                loyal.push(customer_id.clone());
            }
        }
    }

    loyal
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::PageSet;

    fn day(entries: &[(&str, &[&str])]) -> DailyVisitMap {
        entries
            .iter()
            .map(|(customer, pages)| {
                let set: PageSet = pages.iter().map(|p| p.to_string()).collect();
                (customer.to_string(), set)
            })
            .collect()
    }

    #[test]
    fn threshold_boundary_is_inclusive() {
        let day1 = day(&[("cust1", &["a", "b"])]);
        let day2 = day(&[("cust1", &["c", "d"])]);

        assert_eq!(
            find_loyal_customers(&day1, &day2, DEFAULT_THRESHOLD),
            ["cust1"]
        );
    }

    #[test]
    fn one_page_on_day1_excludes() {
        let day1 = day(&[("cust1", &["a"])]);
        let day2 = day(&[("cust1", &["b", "c", "d"])]);

        assert!(find_loyal_customers(&day1, &day2, DEFAULT_THRESHOLD).is_empty());
    }

    #[test]
    fn one_page_on_day2_excludes() {
        let day1 = day(&[("cust1", &["a", "b", "c"])]);
        let day2 = day(&[("cust1", &["d"])]);

        assert!(find_loyal_customers(&day1, &day2, DEFAULT_THRESHOLD).is_empty());
    }

    #[test]
    fn day2_only_customers_are_ignored() {
        let day1 = day(&[("cust1", &["a", "b"])]);
        let day2 = day(&[("cust1", &["c", "d"]), ("cust2", &["e", "f", "g"])]);

        assert_eq!(
            find_loyal_customers(&day1, &day2, DEFAULT_THRESHOLD),
            ["cust1"]
        );
    }

    #[test]
    fn result_follows_day1_order() {
        let day1 = day(&[
            ("custC", &["a", "b"]),
            ("custA", &["a", "b"]),
            ("custB", &["a", "b"]),
        ]);
        let day2 = day(&[
            ("custA", &["c", "d"]),
            ("custB", &["c", "d"]),
            ("custC", &["c", "d"]),
        ]);

        assert_eq!(
            find_loyal_customers(&day1, &day2, DEFAULT_THRESHOLD),
            ["custC", "custA", "custB"]
        );
    }

    #[test]
    fn empty_days_produce_empty_result() {
        let empty = DailyVisitMap::new();
        assert!(find_loyal_customers(&empty, &empty, DEFAULT_THRESHOLD).is_empty());
    }

    #[test]
    fn custom_threshold_is_honored() {
        let day1 = day(&[("cust1", &["a", "b"]), ("cust2", &["a", "b", "c"])]);
        let day2 = day(&[("cust1", &["c", "d"]), ("cust2", &["d", "e", "f"])]);

        assert_eq!(find_loyal_customers(&day1, &day2, 3), ["cust2"]);
    }
}
