use crate::domain::value::Fields;

/// Keeps items where any searchable field contains `term`, ignoring case.
///
/// A blank term returns `items` untouched.
pub fn apply_search<T, S>(items: Vec<T>, term: &str, searchable_fields: &[S]) -> Vec<T>
where
    T: Fields,
    S: AsRef<str>,
{
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return items;
    }

    items
        .into_iter()
        .filter(|item| matches_term(item, &needle, searchable_fields))
        .collect()
}

fn matches_term<T: Fields, S: AsRef<str>>(item: &T, needle: &str, fields: &[S]) -> bool {
    fields.iter().any(|name| {
        item.field(name.as_ref())
            .is_some_and(|value| value.as_text().to_lowercase().contains(needle))
    })
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;

    fn products() -> Vec<Value> {
        vec![
            json!({"name": "Desk Lamp", "category": "Lighting"}),
            json!({"name": "Oak Table", "category": "Furniture"}),
            json!({"name": "Floor lamp", "category": "Lighting"}),
            json!({"sku": "LAMP-1"}),
        ]
    }

    fn names(items: &[Value]) -> Vec<&str> {
        items.iter().filter_map(|v| v["name"].as_str()).collect()
    }

    #[test]
    fn blank_term_keeps_everything_in_order() {
        let items = products();
        let result = apply_search(items.clone(), "   ", &["name"]);
        assert_eq!(result, items);
    }

    #[test]
    fn matches_case_insensitive_substrings() {
        let result = apply_search(products(), "LAMP", &["name"]);
        assert_eq!(names(&result), vec!["Desk Lamp", "Floor lamp"]);
    }

    #[test]
    fn any_searchable_field_can_match() {
        let result = apply_search(products(), "furn", &["name", "category"]);
        assert_eq!(names(&result), vec!["Oak Table"]);
    }

    #[test]
    fn term_is_trimmed() {
        let result = apply_search(products(), "  oak ", &["name"]);
        assert_eq!(names(&result), vec!["Oak Table"]);
    }

    #[test]
    fn missing_fields_do_not_match() {
        let result = apply_search(products(), "lamp", &["title"]);
        assert!(result.is_empty());
    }

    #[test]
    fn numbers_are_searchable_by_text() {
        let items = vec![json!({"total": 1250}), json!({"total": 99})];
        let result = apply_search(items, "125", &["total"]);
        assert_eq!(result, vec![json!({"total": 1250})]);
    }
}
