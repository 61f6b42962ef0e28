#![deny(missing_docs)]

//! # Table Assembly
//!
//! Groups operation records by title.

use crate::oas::models::OperationRecord;
use std::collections::BTreeMap;

/// Groups records by `title`.
///
/// Titles are ordered lexicographically; records keep their input order
/// within a group.
pub fn group_by_title(records: Vec<OperationRecord>) -> BTreeMap<String, Vec<OperationRecord>> {
    let mut table_map: BTreeMap<String, Vec<OperationRecord>> = BTreeMap::new();
    for record in records {
        table_map.entry(record.title.clone()).or_default().push(record);
    }
    table_map
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, url: &str) -> OperationRecord {
        OperationRecord {
            title: title.into(),
            url: url.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_groups_sorted_by_title() {
        let grouped = group_by_title(vec![
            record("user", "/users"),
            record("Pet", "/pets"),
            record("store", "/store"),
            record("Pet", "/pets/{id}"),
        ]);

        let titles: Vec<_> = grouped.keys().map(String::as_str).collect();
        assert_eq!(titles, vec!["Pet", "store", "user"]);

        let urls: Vec<_> = grouped["Pet"].iter().map(|r| r.url.as_str()).collect();
        assert_eq!(urls, vec!["/pets", "/pets/{id}"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(group_by_title(Vec::new()).is_empty());
    }
}
