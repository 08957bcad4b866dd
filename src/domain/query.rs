//! Query value objects describing which view of a collection is requested.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::types::TypeConstraintError;

/// Direction applied to a sort comparator.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl Display for SortDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown sort direction `{other}`"
            ))),
        }
    }
}

/// Equality constraint on one field. `None` or an empty value leaves the
/// field unconstrained.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterSpec {
    pub field: String,
    pub value: Option<String>,
}

impl FilterSpec {
    pub fn new(field: impl Into<String>, value: Option<String>) -> Self {
        Self {
            field: field.into(),
            value,
        }
    }

    /// Shorthand for a filter that requires `field == value`.
    pub fn matching(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(field, Some(value.into()))
    }

    /// Returns the required value, or `None` when the filter imposes nothing.
    pub fn constraint(&self) -> Option<&str> {
        self.value.as_deref().filter(|value| !value.is_empty())
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Asc)
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Desc)
    }
}

/// Parameters of one list view.
///
/// Builder methods consume the query and return a new one; a changed view is
/// expressed by building a new `Query`, never by editing one that is in use.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Query {
    pub search_term: String,
    pub filters: Vec<FilterSpec>,
    /// `None` keeps the collection order.
    pub sort: Option<SortSpec>,
    pub page: usize,
    pub page_size: usize,
}

impl Query {
    /// First page of the unfiltered collection.
    pub fn new(page_size: usize) -> Self {
        Self {
            search_term: String::new(),
            filters: Vec::new(),
            sort: None,
            page: 1,
            page_size,
        }
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn filter(mut self, filter: FilterSpec) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn filters(mut self, filters: impl IntoIterator<Item = FilterSpec>) -> Self {
        self.filters.extend(filters);
        self
    }

    pub fn sort_by(mut self, sort: SortSpec) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn paginate(mut self, page: usize, page_size: usize) -> Self {
        self.page = page;
        self.page_size = page_size;
        self
    }

    /// Same query pointing at another page.
    pub fn with_page(&self, page: usize) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }
}
