use std::fmt::{Display, Formatter};

use serde::{Serialize, Serializer};

use crate::domain::page::Page;

pub const ELLIPSIS: &str = "...";

/// One entry of the pager control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageToken {
    Page(usize),
    Ellipsis,
}

impl Display for PageToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PageToken::Page(number) => write!(f, "{number}"),
            PageToken::Ellipsis => f.write_str(ELLIPSIS),
        }
    }
}

impl Serialize for PageToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageToken::Page(number) => serializer.serialize_u64(*number as u64),
            PageToken::Ellipsis => serializer.serialize_str(ELLIPSIS),
        }
    }
}

/// Builds the pager tokens around `current_page`.
///
/// The first and last pages are always present, plus up to `delta` pages on
/// each side of the current one. Skipped runs collapse into one ellipsis.
/// Nothing is produced when there is at most one page.
pub fn build_page_window(
    current_page: usize,
    total_pages: usize,
    delta: usize,
) -> Vec<PageToken> {
    let last_page = total_pages;

    if last_page <= 1 {
        return vec![];
    }

    let mid_start = current_page.saturating_sub(delta).max(2);
    let mid_end = current_page.saturating_add(delta).min(last_page - 1);

    let mut pages = vec![1];
    pages.extend(mid_start..=mid_end);
    pages.push(last_page);

    let mut tokens = Vec::with_capacity(pages.len() + 2);
    let mut previous = 0;
    for page in pages {
        if previous != 0 && page > previous + 1 {
            tokens.push(PageToken::Ellipsis);
        }
        tokens.push(PageToken::Page(page));
        previous = page;
    }

    tokens
}

/// Page of items together with the pager tokens a template needs.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<PageToken>,
    pub page: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T> Paginated<T> {
    pub fn new(page: Page<T>, delta: usize) -> Self {
        let pages = build_page_window(page.page, page.total_pages, delta);

        Self {
            items: page.items,
            pages,
            page: page.page,
            total_items: page.total_items,
            total_pages: page.total_pages,
        }
    }
}
