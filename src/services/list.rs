use crate::domain::query::{FilterSpec, Query};
use crate::domain::screen::ListScreen;
use crate::dto::list::{ListPageData, ListParams};
use crate::engine::{ListQueryEngine, QueryError, QueryResult};
use crate::pagination::Paginated;
use crate::repository::CollectionReader;
use crate::services::{ServiceError, ServiceResult};

/// Looks up a screen by name.
pub fn find_screen<'a>(screens: &'a [ListScreen], name: &str) -> ServiceResult<&'a ListScreen> {
    screens
        .iter()
        .find(|screen| screen.name == name)
        .ok_or_else(|| ServiceError::NotFound(format!("screen `{name}`")))
}

/// Translates user parameters into a query for `screen`.
///
/// Missing or zero page numbers become 1 and a missing sort falls back to the
/// screen default. Sorting or filtering by a field the screen does not declare
/// is rejected.
pub fn build_query(screen: &ListScreen, params: &ListParams) -> QueryResult<Query> {
    let page = params.page.unwrap_or(1).max(1);
    let page_size = screen.page_size.get();
    let mut query = Query::new(page_size).paginate(page, page_size);

    if let Some(term) = params
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
    {
        query = query.search(term);
    }

    if let Some(sort) = params.sort.as_ref().or(screen.default_sort.as_ref()) {
        if sort.field.trim().is_empty() {
            return Err(QueryError::EmptySortField);
        }
        if !screen.is_sortable(&sort.field) {
            return Err(unsupported(screen, &sort.field, "sortable"));
        }
        query = query.sort_by(sort.clone());
    }

    let mut filters: Vec<FilterSpec> = Vec::new();
    for filter in &params.filters {
        if filter.constraint().is_none() {
            continue;
        }
        if !screen.is_filterable(&filter.field) {
            return Err(unsupported(screen, &filter.field, "filterable"));
        }
        filters.push(filter.clone());
    }

    Ok(query.filters(filters))
}

fn unsupported(screen: &ListScreen, field: &str, capability: &'static str) -> QueryError {
    QueryError::UnsupportedField {
        screen: screen.name.clone(),
        field: field.to_string(),
        capability,
    }
}

/// Loads one page of an admin list screen.
///
/// When the requested page lies past the last page of the filtered result,
/// the last page is shown instead.
pub fn load_list_page<R>(
    repo: &R,
    screen: &ListScreen,
    params: ListParams,
    window_delta: usize,
) -> ServiceResult<ListPageData>
where
    R: CollectionReader + ?Sized,
{
    let query = build_query(screen, &params).map_err(|err| {
        log::error!("Rejected query for screen {}: {err}", screen.name);
        err
    })?;

    let records = repo.list_records(&screen.collection).map_err(|err| {
        log::error!("Failed to load collection {}: {err}", screen.collection);
        ServiceError::from(err)
    })?;

    let engine = ListQueryEngine::for_screen(screen).with_window_delta(window_delta);
    let mut page = engine.run(&records, &query)?;

    if page.is_out_of_range() {
        log::debug!(
            "Page {} of screen {} is past the last page {}, re-querying",
            page.page,
            screen.name,
            page.total_pages
        );
        page = engine.run(&records, &query.with_page(page.total_pages))?;
    }

    let list = Paginated::new(page.cloned(), window_delta);
    let search_query = Some(query.search_term).filter(|term| !term.is_empty());

    Ok(ListPageData {
        screen: screen.name.clone(),
        list,
        search_query,
        sort: query.sort,
        filters: query.filters,
    })
}
