//! Declarative descriptions of the admin list screens.

use serde::{Deserialize, Serialize};

use crate::domain::query::SortSpec;
use crate::domain::types::{FieldName, PageSize, TypeConstraintError};

/// Fields a list screen lets the user search, filter and sort by.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListScreen {
    /// Screen identifier used in URLs and configuration.
    pub name: String,
    /// Name of the collection fetched from the API.
    pub collection: String,
    pub searchable_fields: Vec<FieldName>,
    #[serde(default)]
    pub filterable_fields: Vec<FieldName>,
    #[serde(default)]
    pub sortable_fields: Vec<FieldName>,
    #[serde(default)]
    pub default_sort: Option<SortSpec>,
    #[serde(default)]
    pub page_size: PageSize,
}

fn field_names(names: &[&str]) -> Result<Vec<FieldName>, TypeConstraintError> {
    names.iter().map(|&name| FieldName::new(name)).collect()
}

impl ListScreen {
    pub fn new(
        name: impl Into<String>,
        collection: impl Into<String>,
        searchable_fields: &[&str],
    ) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            name: name.into(),
            collection: collection.into(),
            searchable_fields: field_names(searchable_fields)?,
            filterable_fields: Vec::new(),
            sortable_fields: Vec::new(),
            default_sort: None,
            page_size: PageSize::default(),
        })
    }

    pub fn filterable(mut self, fields: &[&str]) -> Result<Self, TypeConstraintError> {
        self.filterable_fields = field_names(fields)?;
        Ok(self)
    }

    pub fn sortable(mut self, fields: &[&str]) -> Result<Self, TypeConstraintError> {
        self.sortable_fields = field_names(fields)?;
        Ok(self)
    }

    pub fn default_sort(mut self, sort: SortSpec) -> Self {
        self.default_sort = Some(sort);
        self
    }

    pub fn page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn is_filterable(&self, field: &str) -> bool {
        self.filterable_fields.iter().any(|f| f.as_str() == field)
    }

    pub fn is_sortable(&self, field: &str) -> bool {
        self.sortable_fields.iter().any(|f| f.as_str() == field)
    }

    pub fn products() -> Result<Self, TypeConstraintError> {
        Self::new("products", "products", &["name", "description", "category"])?
            .filterable(&["category", "status"])?
            .sortable(&["name", "price", "stock", "created_at"])
            .map(|screen| screen.default_sort(SortSpec::desc("created_at")))
    }

    pub fn blogs() -> Result<Self, TypeConstraintError> {
        Self::new("blogs", "blogs", &["title", "author", "content"])?
            .filterable(&["author", "category"])?
            .sortable(&["title", "author", "created_at"])
            .map(|screen| screen.default_sort(SortSpec::desc("created_at")))
    }

    pub fn orders() -> Result<Self, TypeConstraintError> {
        Self::new(
            "orders",
            "orders",
            &["order_number", "customer_name", "customer_email"],
        )?
        .filterable(&["status", "payment_status"])?
        .sortable(&["order_number", "total", "status", "created_at"])
        .map(|screen| screen.default_sort(SortSpec::desc("created_at")))
    }

    pub fn social_links() -> Result<Self, TypeConstraintError> {
        Self::new("social_links", "social-links", &["platform", "url"])?
            .filterable(&["platform"])?
            .sortable(&["platform"])
            .map(|screen| screen.default_sort(SortSpec::asc("platform")))
    }

    /// Every screen of the admin back-office.
    pub fn builtin() -> Result<Vec<Self>, TypeConstraintError> {
        Ok(vec![
            Self::products()?,
            Self::blogs()?,
            Self::orders()?,
            Self::social_links()?,
        ])
    }
}
