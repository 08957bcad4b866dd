use serde::Serialize;

/// One materialized page of a queried collection.
///
/// `start_index` and `end_index` are zero-based offsets into the filtered and
/// sorted collection; `end_index` is exclusive.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub start_index: usize,
    pub end_index: usize,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the page number lies past the last page of the result.
    pub fn is_out_of_range(&self) -> bool {
        self.total_pages > 0 && self.page > self.total_pages
    }

    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            page_size: self.page_size,
            total_items: self.total_items,
            total_pages: self.total_pages,
            start_index: self.start_index,
            end_index: self.end_index,
        }
    }
}

impl<T: Clone> Page<&T> {
    /// Converts a page borrowing from the collection into an owned page.
    pub fn cloned(self) -> Page<T> {
        self.map(Clone::clone)
    }
}
