//! Client-side list query pipeline.
//!
//! Every call runs search, filter, sort and paginate in that order over the
//! full collection. The engine holds no state between calls and performs no
//! I/O, so one instance can serve any number of screens concurrently.

use crate::DEFAULT_WINDOW_DELTA;
use crate::domain::page::Page;
use crate::domain::query::Query;
use crate::domain::screen::ListScreen;
use crate::domain::value::Fields;
use crate::pagination::{PageToken, build_page_window};

pub mod errors;
pub mod filter;
pub mod paginate;
pub mod search;
pub mod sort;

pub use errors::{QueryError, QueryResult};
pub use filter::apply_filters;
pub use paginate::{paginate, total_pages, validate_paging};
pub use search::apply_search;
pub use sort::apply_sort;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListQueryEngine {
    searchable_fields: Vec<String>,
    window_delta: usize,
}

impl ListQueryEngine {
    pub fn new<I, S>(searchable_fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            searchable_fields: searchable_fields.into_iter().map(Into::into).collect(),
            window_delta: DEFAULT_WINDOW_DELTA,
        }
    }

    /// Engine searching the fields declared by `screen`.
    pub fn for_screen(screen: &ListScreen) -> Self {
        Self::new(screen.searchable_fields.iter().map(|field| field.as_str()))
    }

    pub fn with_window_delta(mut self, delta: usize) -> Self {
        self.window_delta = delta;
        self
    }

    pub fn searchable_fields(&self) -> &[String] {
        &self.searchable_fields
    }

    /// Produces the page of `collection` described by `query`.
    ///
    /// The returned page borrows from `collection`; use [`Page::cloned`] for
    /// an owned copy. A page number past the last page yields an empty page.
    pub fn run<'a, T: Fields>(
        &self,
        collection: &'a [T],
        query: &Query,
    ) -> QueryResult<Page<&'a T>> {
        validate_paging(query.page, query.page_size)?;

        let items: Vec<&'a T> = collection.iter().collect();
        let items = apply_search(items, &query.search_term, &self.searchable_fields);
        let items = apply_filters(items, &query.filters);
        let items = match &query.sort {
            Some(sort) => apply_sort(items, sort)?,
            None => items,
        };

        paginate(items, query.page, query.page_size)
    }

    /// Pager tokens for a page produced by [`ListQueryEngine::run`].
    pub fn window<T>(&self, page: &Page<T>) -> Vec<PageToken> {
        build_page_window(page.page, page.total_pages, self.window_delta)
    }
}
