//! Derived, filtered, sorted view of the roster.

use crate::core::types::{SortDirection, SortKey, SortSpec};
use crate::record::EmployeeRecord;

/// Project records into display order under the given view parameters.
///
/// The sort is stable: records comparing equal on the sort key keep their
/// relative insertion order, in both directions. With no sort key the input
/// order is preserved. The filter keeps records whose name or department
/// contains `search_term` case-insensitively; an empty term keeps everything.
pub fn project<'a>(
    records: &'a [EmployeeRecord],
    search_term: &str,
    sort: SortSpec,
) -> Vec<&'a EmployeeRecord> {
    let mut view: Vec<&EmployeeRecord> = records.iter().collect();

    if let Some(key) = sort.key {
        view.sort_by(|a, b| {
            let ordering = sort_value(a, key).cmp(sort_value(b, key));
            match sort.direction {
                SortDirection::Ascending => ordering,
                // Reversing keeps ties Equal, so stability is preserved.
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }

    let term = search_term.to_lowercase();
    view.retain(|record| matches_term(record, &term));
    view
}

fn sort_value(record: &EmployeeRecord, key: SortKey) -> &str {
    match key {
        SortKey::Name => &record.name,
        SortKey::Department => &record.department,
    }
}

fn matches_term(record: &EmployeeRecord, lowered_term: &str) -> bool {
    lowered_term.is_empty()
        || record.name.to_lowercase().contains(lowered_term)
        || record.department.to_lowercase().contains(lowered_term)
}
