//! Pagination types for list operations.

use serde::{Deserialize, Serialize};

/// A request for a page of results.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageRequest {
    /// The page number (0-indexed).
    pub page: usize,
    /// The number of items per page.
    pub size: usize,
}

impl PageRequest {
    /// The default page size.
    pub const DEFAULT_SIZE: usize = 10;
    /// The maximum allowed page size.
    pub const MAX_SIZE: usize = 100;

    /// Creates a new page request.
    #[must_use]
    pub fn new(page: usize, size: usize) -> Self {
        Self {
            page,
            size: size.min(Self::MAX_SIZE),
        }
    }

    /// Creates a page request for the first page with default size.
    #[must_use]
    pub fn first() -> Self {
        Self::new(0, Self::DEFAULT_SIZE)
    }

    /// Returns the offset for database queries.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.page * self.size
    }

    /// Returns the limit for database queries.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first()
    }
}

/// Information about a page of results.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageInfo {
    /// The current page number (0-indexed).
    pub page: usize,
    /// The number of items per page.
    pub size: usize,
    /// The total number of items across all pages.
    pub total_elements: u64,
    /// The total number of pages.
    pub total_pages: u64,
    /// Whether this is the first page.
    pub first: bool,
    /// Whether this is the last page.
    pub last: bool,
    /// The number of items on this page.
    pub number_of_elements: usize,
}

impl PageInfo {
    /// Creates a new page info.
    #[must_use]
    pub fn new(page: usize, size: usize, total_elements: u64, number_of_elements: usize) -> Self {
        let total_pages = if size > 0 {
            (total_elements + size as u64 - 1) / size as u64
        } else {
            0
        };

        Self {
            page,
            size,
            total_elements,
            total_pages,
            first: page == 0,
            last: page as u64 >= total_pages.saturating_sub(1),
            number_of_elements,
        }
    }
}

/// A page of results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// The items on this page.
    pub content: Vec<T>,
    /// Information about this page.
    #[serde(flatten)]
    pub info: PageInfo,
}

impl<T> Page<T> {
    /// Creates a new page.
    #[must_use]
    pub fn new(content: Vec<T>, page: usize, size: usize, total_elements: u64) -> Self {
        let number_of_elements = content.len();
        Self {
            content,
            info: PageInfo::new(page, size, total_elements, number_of_elements),
        }
    }

    /// Creates an empty page.
    #[must_use]
    pub fn empty(page: usize, size: usize) -> Self {
        Self::new(Vec::new(), page, size, 0)
    }

    /// Maps the page content to a different type.
    #[must_use]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            info: self.info,
        }
    }

    /// Returns true if the page is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Returns the number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Returns the total number of elements across all pages.
    #[must_use]
    pub const fn total_elements(&self) -> u64 {
        self.info.total_elements
    }

    /// Returns the total number of pages.
    #[must_use]
    pub const fn total_pages(&self) -> u64 {
        self.info.total_pages
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.content.into_iter()
    }
}

/// The contiguous range of page-number links shown in a paginated UI,
/// bounded by a block size.
///
/// `begin_page = ((page - 1) / block) * block + 1` and
/// `end_page = min(begin_page + block - 1, total_page)`, where `page` is the
/// 1-based current page. A catalog with zero pages yields `begin_page = 1`,
/// `end_page = 0`; callers render nothing in that case.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PageWindow {
    /// Total number of items across all pages.
    pub total_count: u64,
    /// The current page number (1-based).
    pub page: u64,
    /// The number of items per page.
    pub size: usize,
    /// Maximum count of page links displayed at once.
    pub page_per_block: u64,
    /// The total number of pages.
    pub total_page: u64,
    /// First page number shown in the window.
    pub begin_page: u64,
    /// Last page number shown in the window.
    pub end_page: u64,
    /// Whether the current page is the first page.
    pub is_first: bool,
    /// Whether the current page is the last page.
    pub is_last: bool,
}

impl PageWindow {
    /// The block size used by the catalog listing.
    pub const DEFAULT_BLOCK: u64 = 5;

    /// Computes the display window for a page of results.
    #[must_use]
    pub fn new(info: &PageInfo, page_per_block: u64) -> Self {
        let page = info.page as u64 + 1;
        let begin_page = (page - 1) / page_per_block * page_per_block + 1;
        let end_page = std::cmp::min(begin_page + page_per_block - 1, info.total_pages);

        Self {
            total_count: info.total_elements,
            page,
            size: info.size,
            page_per_block,
            total_page: info.total_pages,
            begin_page,
            end_page,
            is_first: info.first,
            is_last: info.last,
        }
    }
}
