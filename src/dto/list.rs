use serde::Serialize;

use crate::domain::query::{FilterSpec, SortSpec};
use crate::domain::record::Record;
use crate::pagination::Paginated;

/// Parameters a list screen receives from the user interface.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListParams {
    /// Optional search string entered by the user.
    pub search: Option<String>,
    /// Page number requested by the user interface.
    pub page: Option<usize>,
    /// Sort chosen by the user; the screen default applies when absent.
    pub sort: Option<SortSpec>,
    pub filters: Vec<FilterSpec>,
}

impl ListParams {
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn page(mut self, page: usize) -> Self {
        self.page = Some(page);
        self
    }

    pub fn sort(mut self, sort: SortSpec) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn filter(mut self, filter: FilterSpec) -> Self {
        self.filters.push(filter);
        self
    }
}

/// Data required to render an admin list template.
#[derive(Debug, Serialize)]
pub struct ListPageData {
    /// Screen the data belongs to.
    pub screen: String,
    /// Paginated records to show in the table.
    pub list: Paginated<Record>,
    /// Search query echoed back to the template when present.
    pub search_query: Option<String>,
    /// Sort actually applied, including the screen default.
    pub sort: Option<SortSpec>,
    /// Filters that constrained the result.
    pub filters: Vec<FilterSpec>,
}
