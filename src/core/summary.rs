// LogTally - core/summary.rs
//
// Per-level occurrence counting.

use crate::core::model::{LevelCounts, LogCollection};

/// Count records per level in a single pass.
///
/// Levels appear in the result in the order they are first seen, regardless
/// of how often they occur. An empty collection gives empty counts.
pub fn count_by_level(logs: &LogCollection) -> LevelCounts {
    let mut counts = LevelCounts::default();
    for record in logs {
        counts.record(&record.level);
    }

    tracing::debug!(
        records = logs.len(),
        levels = counts.len(),
        "Level counts computed"
    );
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filter::filter_by_level;
    use crate::core::model::LogRecord;

    fn collection(levels: &[&str]) -> LogCollection {
        levels
            .iter()
            .enumerate()
            .map(|(i, level)| LogRecord {
                date: "2024-01-15".to_string(),
                time: format!("10:00:{i:02}"),
                level: level.to_string(),
                message: format!("event {i}"),
            })
            .collect()
    }

    #[test]
    fn test_count_scenario_info_then_error() {
        let logs = collection(&["INFO", "ERROR", "INFO", "ERROR"]);
        let counts = count_by_level(&logs);
        let pairs: Vec<_> = counts.iter().collect();
        assert_eq!(pairs, vec![("INFO", 2), ("ERROR", 2)]);
    }

    #[test]
    fn test_count_after_filter_has_single_key() {
        let logs = collection(&["INFO", "ERROR", "INFO", "ERROR"]);
        let counts = count_by_level(&filter_by_level(&logs, "ERROR"));
        let pairs: Vec<_> = counts.iter().collect();
        assert_eq!(pairs, vec![("ERROR", 2)]);

        let none = count_by_level(&filter_by_level(&logs, "WARN"));
        assert!(none.is_empty());
    }

    #[test]
    fn test_order_follows_first_sighting_not_frequency() {
        let logs = collection(&["DEBUG", "ERROR", "ERROR", "ERROR", "WARN", "DEBUG"]);
        let levels: Vec<_> = count_by_level(&logs).levels().map(str::to_string).collect();
        assert_eq!(levels, vec!["DEBUG", "ERROR", "WARN"]);
    }

    #[test]
    fn test_total_matches_collection_length() {
        for levels in [
            &[][..],
            &["INFO"][..],
            &["A", "B", "A", "C", "C", "C", "b"][..],
        ] {
            let logs = collection(levels);
            assert_eq!(count_by_level(&logs).total(), logs.len());
        }
    }

    #[test]
    fn test_levels_differing_in_case_are_distinct() {
        let counts = count_by_level(&collection(&["INFO", "info", "Info"]));
        assert_eq!(counts.len(), 3);
        assert_eq!(counts.get("info"), Some(1));
    }
}
