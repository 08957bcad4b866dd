use std::cmp::Ordering;

use crate::domain::query::{SortDirection, SortSpec};
use crate::domain::value::{Collation, FieldValue, Fields, SortKey};
use crate::engine::errors::{QueryError, QueryResult};

/// Stable sort of `items` by one field.
///
/// The collation is picked once from every value of the field, so fields
/// mixing numbers, dates and text sort by their textual form instead of
/// failing. Descending order reverses the comparator, so items with equal
/// keys keep their relative order in both directions. Items without the
/// field sort after those that have it (before them when descending).
pub fn apply_sort<T: Fields>(items: Vec<T>, sort: &SortSpec) -> QueryResult<Vec<T>> {
    let field = sort.field.trim();
    if field.is_empty() {
        return Err(QueryError::EmptySortField);
    }

    let keys = sort_keys(&items, field);
    let mut keyed: Vec<(Option<SortKey>, T)> = keys.into_iter().zip(items).collect();

    keyed.sort_by(|(a, _), (b, _)| {
        let ordering = compare_keys(a.as_ref(), b.as_ref());
        match sort.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });

    Ok(keyed.into_iter().map(|(_, item)| item).collect())
}

fn sort_keys<T: Fields>(items: &[T], field: &str) -> Vec<Option<SortKey>> {
    let values: Vec<Option<FieldValue<'_>>> = items.iter().map(|item| item.field(field)).collect();
    let collation = Collation::detect(values.iter().flatten());

    values
        .iter()
        .map(|value| value.as_ref().map(|value| collation.key(value)))
        .collect()
}

fn compare_keys(a: Option<&SortKey>, b: Option<&SortKey>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;

    fn ids(items: &[Value]) -> Vec<i64> {
        items.iter().filter_map(|v| v["id"].as_i64()).collect()
    }

    #[test]
    fn numeric_fields_sort_numerically() {
        let items = vec![
            json!({"id": 1, "price": 10}),
            json!({"id": 2, "price": 9.5}),
            json!({"id": 3, "price": 100}),
        ];
        let sorted = apply_sort(items, &SortSpec::asc("price")).unwrap();
        assert_eq!(ids(&sorted), vec![2, 1, 3]);
    }

    #[test]
    fn descending_keeps_ties_in_original_order() {
        let items = vec![
            json!({"id": 1, "stock": 5}),
            json!({"id": 2, "stock": 7}),
            json!({"id": 3, "stock": 5}),
            json!({"id": 4, "stock": 7}),
        ];
        let asc = apply_sort(items.clone(), &SortSpec::asc("stock")).unwrap();
        let desc = apply_sort(items, &SortSpec::desc("stock")).unwrap();

        assert_eq!(ids(&asc), vec![1, 3, 2, 4]);
        assert_eq!(ids(&desc), vec![2, 4, 1, 3]);
    }

    #[test]
    fn dates_sort_chronologically() {
        let items = vec![
            json!({"id": 1, "created_at": "2024-03-01T09:00:00Z"}),
            json!({"id": 2, "created_at": "2023-11-20"}),
            json!({"id": 3, "created_at": "2024-01-15 12:00:00"}),
        ];
        let sorted = apply_sort(items, &SortSpec::desc("created_at")).unwrap();
        assert_eq!(ids(&sorted), vec![1, 3, 2]);
    }

    #[test]
    fn strings_sort_lexicographically() {
        let items = vec![
            json!({"id": 1, "code": "b10"}),
            json!({"id": 2, "code": "b9"}),
            json!({"id": 3, "code": "a"}),
        ];
        let sorted = apply_sort(items, &SortSpec::asc("code")).unwrap();
        assert_eq!(ids(&sorted), vec![3, 1, 2]);
    }

    #[test]
    fn missing_values_go_last_when_ascending() {
        let items = vec![
            json!({"id": 1}),
            json!({"id": 2, "rank": 2}),
            json!({"id": 3, "rank": null}),
            json!({"id": 4, "rank": 1}),
        ];
        let sorted = apply_sort(items, &SortSpec::asc("rank")).unwrap();
        assert_eq!(ids(&sorted), vec![4, 2, 1, 3]);
    }

    #[test]
    fn unknown_field_keeps_order() {
        let items = vec![json!({"id": 2}), json!({"id": 1})];
        let sorted = apply_sort(items, &SortSpec::asc("weight")).unwrap();
        assert_eq!(ids(&sorted), vec![2, 1]);
    }

    #[test]
    fn mixed_numbers_and_numeric_text_sort_as_text() {
        let items: Vec<Value> = (0..80_i64)
            .map(|n| {
                let price = (n * 37) % 101;
                if n % 3 == 0 {
                    json!({"id": n, "price": price.to_string()})
                } else {
                    json!({"id": n, "price": price})
                }
            })
            .collect();

        let asc = apply_sort(items.clone(), &SortSpec::asc("price")).unwrap();
        let desc = apply_sort(items, &SortSpec::desc("price")).unwrap();

        let prices: Vec<String> = asc
            .iter()
            .map(|v| match &v["price"] {
                Value::String(text) => text.clone(),
                other => other.to_string(),
            })
            .collect();
        let mut expected = prices.clone();
        expected.sort();
        assert_eq!(prices, expected);
        assert_eq!(asc.len(), 80);
        assert_eq!(desc.len(), 80);
    }

    #[test]
    fn offset_timestamps_mixed_with_text_do_not_panic() {
        let items: Vec<Value> = (0..60_i64)
            .map(|n| match n % 4 {
                0 => json!({"id": n, "seen": format!("2024-02-01T{:02}:00:00+05:00", n % 24)}),
                1 => json!({"id": n, "seen": format!("2024-02-01T{:02}:30:00Z", (n * 7) % 24)}),
                2 => json!({"id": n, "seen": "unknown"}),
                _ => json!({"id": n, "seen": n}),
            })
            .collect();

        let first = apply_sort(items.clone(), &SortSpec::desc("seen")).unwrap();
        let second = apply_sort(items, &SortSpec::desc("seen")).unwrap();
        assert_eq!(ids(&first), ids(&second));
    }

    #[test]
    fn large_integer_ids_sort_exactly() {
        let items = vec![
            json!({"id": 1, "external_id": 9007199254740993_u64}),
            json!({"id": 2, "external_id": 9007199254740992_u64}),
            json!({"id": 3, "external_id": 12.5}),
        ];
        let sorted = apply_sort(items, &SortSpec::asc("external_id")).unwrap();
        assert_eq!(ids(&sorted), vec![3, 2, 1]);
    }

    #[test]
    fn blank_field_is_rejected() {
        let result = apply_sort(vec![json!({"id": 1})], &SortSpec::asc("  "));
        assert_eq!(result, Err(QueryError::EmptySortField));
    }
}
