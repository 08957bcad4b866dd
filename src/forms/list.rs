use serde::Deserialize;
use validator::Validate;

use crate::domain::query::{FilterSpec, SortDirection, SortSpec};
use crate::dto::list::ListParams;
use crate::forms::FormError;

/// Query string of an admin list page, e.g.
/// `?q=lamp&page=2&sort=price&dir=desc&field=category&value=lighting`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ListQueryForm {
    /// Free-form search string.
    #[validate(length(max = 200))]
    pub q: Option<String>,
    /// Requested page, starting at 1.
    #[validate(range(min = 1))]
    pub page: Option<usize>,
    /// Field to sort by.
    pub sort: Option<String>,
    /// `asc` or `desc`; defaults to `asc`.
    pub dir: Option<String>,
    /// Filter fields, paired positionally with `value`.
    #[serde(default)]
    pub field: Vec<String>,
    #[serde(default)]
    pub value: Vec<String>,
}

impl ListQueryForm {
    /// Parses and validates a URL query string (without the leading `?`).
    pub fn parse(query: &str) -> Result<Self, FormError> {
        let form: Self = serde_html_form::from_str(query)
            .map_err(|err| FormError::Malformed(err.to_string()))?;
        form.validate()?;
        Ok(form)
    }
}

impl TryFrom<ListQueryForm> for ListParams {
    type Error = FormError;

    fn try_from(form: ListQueryForm) -> Result<Self, Self::Error> {
        if form.field.len() != form.value.len() {
            return Err(FormError::UnpairedFilter);
        }

        let direction = form
            .dir
            .as_deref()
            .filter(|dir| !dir.trim().is_empty())
            .map(str::parse::<SortDirection>)
            .transpose()
            .map_err(|_| FormError::InvalidSortDirection)?;

        let sort_field = form
            .sort
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let sort = match (sort_field, direction) {
            (Some(field), direction) => Some(SortSpec::new(field, direction.unwrap_or_default())),
            (None, Some(_)) => return Err(FormError::MissingSortField),
            (None, None) => None,
        };

        let filters = form
            .field
            .into_iter()
            .zip(form.value)
            .map(|(field, value)| FilterSpec::new(field.trim(), Some(value)))
            .collect();

        Ok(ListParams {
            search: form.q,
            page: form.page,
            sort,
            filters,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_query_string() {
        let query = "q=desk+lamp&page=2&sort=price&dir=DESC&field=category&value=lighting";
        let form = ListQueryForm::parse(query).unwrap();
        let params = ListParams::try_from(form).unwrap();

        assert_eq!(params.search.as_deref(), Some("desk lamp"));
        assert_eq!(params.page, Some(2));
        assert_eq!(params.sort, Some(SortSpec::desc("price")));
        assert_eq!(params.filters, vec![FilterSpec::matching("category", "lighting")]);
    }

    #[test]
    fn empty_query_string_gives_defaults() {
        let params = ListParams::try_from(ListQueryForm::parse("").unwrap()).unwrap();
        assert_eq!(params, ListParams::default());
    }

    #[test]
    fn repeated_filters_pair_up() {
        let form =
            ListQueryForm::parse("field=status&value=paid&field=payment_status&value=").unwrap();
        let params = ListParams::try_from(form).unwrap();

        assert_eq!(
            params.filters,
            vec![
                FilterSpec::matching("status", "paid"),
                FilterSpec::matching("payment_status", ""),
            ]
        );
    }

    #[test]
    fn sort_defaults_to_ascending() {
        let form = ListQueryForm::parse("sort=name").unwrap();
        let params = ListParams::try_from(form).unwrap();
        assert_eq!(params.sort, Some(SortSpec::asc("name")));
    }

    #[test]
    fn page_zero_fails_validation() {
        assert!(matches!(
            ListQueryForm::parse("page=0"),
            Err(FormError::Validation(_))
        ));
    }

    #[test]
    fn non_numeric_page_is_malformed() {
        assert!(matches!(
            ListQueryForm::parse("page=two"),
            Err(FormError::Malformed(_))
        ));
    }

    #[test]
    fn overlong_search_fails_validation() {
        let query = format!("q={}", "a".repeat(201));
        assert!(matches!(
            ListQueryForm::parse(&query),
            Err(FormError::Validation(_))
        ));
    }

    #[test]
    fn unknown_direction_is_rejected() {
        let form = ListQueryForm::parse("sort=name&dir=sideways").unwrap();
        assert!(matches!(
            ListParams::try_from(form),
            Err(FormError::InvalidSortDirection)
        ));
    }

    #[test]
    fn direction_without_field_is_rejected() {
        let form = ListQueryForm::parse("dir=desc").unwrap();
        assert!(matches!(
            ListParams::try_from(form),
            Err(FormError::MissingSortField)
        ));
    }

    #[test]
    fn unpaired_filter_is_rejected() {
        let form = ListQueryForm::parse("field=status").unwrap();
        assert!(matches!(
            ListParams::try_from(form),
            Err(FormError::UnpairedFilter)
        ));
    }
}
