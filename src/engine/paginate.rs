use crate::domain::page::Page;
use crate::engine::errors::{QueryError, QueryResult};

/// Number of pages needed for `total_items`; zero for an empty collection.
pub fn total_pages(total_items: usize, page_size: usize) -> QueryResult<usize> {
    if page_size == 0 {
        return Err(QueryError::InvalidPageSize(page_size));
    }
    Ok(total_items.div_ceil(page_size))
}

/// Rejects page numbers and sizes below one.
pub fn validate_paging(page: usize, page_size: usize) -> QueryResult<()> {
    if page == 0 {
        return Err(QueryError::InvalidPage(page));
    }
    if page_size == 0 {
        return Err(QueryError::InvalidPageSize(page_size));
    }
    Ok(())
}

/// Cuts the requested page out of `items`.
///
/// Pages past the end are returned empty rather than clamped; re-clamping is
/// left to the caller.
pub fn paginate<T>(items: Vec<T>, page: usize, page_size: usize) -> QueryResult<Page<T>> {
    validate_paging(page, page_size)?;

    let total_items = items.len();
    let start_index = (page - 1).saturating_mul(page_size);
    let end_index = start_index.saturating_add(page_size).min(total_items);

    let items = items
        .into_iter()
        .skip(start_index)
        .take(page_size)
        .collect();

    Ok(Page {
        items,
        page,
        page_size,
        total_items,
        total_pages: total_pages(total_items, page_size)?,
        start_index,
        end_index,
    })
}
