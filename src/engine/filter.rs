use crate::domain::query::FilterSpec;
use crate::domain::value::Fields;

/// Keeps items satisfying every constraining filter.
///
/// Comparison is exact and case-sensitive against the textual form of the
/// field. Items lacking a constrained field are dropped.
pub fn apply_filters<T: Fields>(items: Vec<T>, filters: &[FilterSpec]) -> Vec<T> {
    let constraints: Vec<(&str, &str)> = filters
        .iter()
        .filter_map(|filter| filter.constraint().map(|value| (filter.field.as_str(), value)))
        .collect();

    if constraints.is_empty() {
        return items;
    }

    items
        .into_iter()
        .filter(|item| {
            constraints.iter().all(|&(field, expected)| {
                item.field(field)
                    .is_some_and(|value| value.as_text() == expected)
            })
        })
        .collect()
}
