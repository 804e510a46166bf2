use serde::Serialize;

use crate::error::PagerError;
use crate::window::{self, PageButton};

/// Sentinel page number meaning "no such page": the target of a navigation
/// move that would leave the valid range.
pub const NO_PAGE: i64 = -1;

/// Items per page when the caller does not choose one.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Buttons in the windowed listing when the caller does not choose.
pub const DEFAULT_BUTTON_COUNT: i64 = 7;

/// Pagination metadata derived from a requested page, a total result count,
/// a page size, and a button count.
///
/// A `Pager` is built in one step and never mutated; every field is a pure
/// function of the four inputs. Callers slice their data source with
/// [`skip`](Self::skip)/[`take`](Self::take), compare the navigation fields
/// against [`NO_PAGE`] to enable or disable controls, and iterate
/// [`between_pages`](Self::between_pages) (or [`all_pages`](Self::all_pages))
/// in order to render the page buttons.
#[derive(Debug, Clone, Serialize)]
pub struct Pager {
    pub current_page: i64,
    pub page_size: i64,
    pub button_count: i64,
    /// Total number of pages; 0 when there are no results.
    pub page_count: i64,
    pub first: i64,
    pub last: i64,
    pub previous: i64,
    pub next: i64,
    /// Zero-based offset of the first item on the current page.
    pub skip: i64,
    pub take: i64,
    /// Cumulative item count visible through the current page.
    pub current_count: i64,
    pub total_count: i64,
    /// Page buttons to display in the pagination bar, windowed around the
    /// current page.
    pub between_pages: Vec<PageButton>,
}

impl Pager {
    /// Build a pager with the default page size (10) and button count (7).
    ///
    /// An absent `current_page` means the first page; an explicitly supplied
    /// non-positive one is rejected.
    pub fn new(current_page: Option<i64>, results_count: i64) -> Result<Self, PagerError> {
        Self::with_layout(
            current_page,
            results_count,
            DEFAULT_PAGE_SIZE,
            DEFAULT_BUTTON_COUNT,
        )
    }

    /// Build a pager with an explicit page size and button count.
    ///
    /// Fails with [`PagerError::PageOutOfRange`] when the requested page lies
    /// beyond the last page (use [`Pager::clamped`] to clamp instead).
    pub fn with_layout(
        current_page: Option<i64>,
        results_count: i64,
        page_size: i64,
        button_count: i64,
    ) -> Result<Self, PagerError> {
        Self::build(current_page, results_count, page_size, button_count, false)
    }

    /// Like [`Pager::with_layout`], but forgives a bad page request:
    /// non-positive or absent pages become 1, and a page beyond the last one
    /// becomes the last page. The remaining arguments are still validated.
    pub fn clamped(
        current_page: Option<i64>,
        results_count: i64,
        page_size: i64,
        button_count: i64,
    ) -> Result<Self, PagerError> {
        Self::build(current_page, results_count, page_size, button_count, true)
    }

    fn build(
        current_page: Option<i64>,
        results_count: i64,
        page_size: i64,
        button_count: i64,
        clamp: bool,
    ) -> Result<Self, PagerError> {
        if results_count < 0 {
            return Err(PagerError::InvalidArgument {
                name: "results_count",
                value: results_count,
            });
        }
        if page_size <= 0 {
            return Err(PagerError::InvalidArgument {
                name: "page_size",
                value: page_size,
            });
        }
        if button_count < 1 {
            return Err(PagerError::InvalidArgument {
                name: "button_count",
                value: button_count,
            });
        }

        let requested = current_page.unwrap_or(1);
        let current_page = if clamp {
            requested.max(1)
        } else if requested <= 0 {
            return Err(PagerError::InvalidArgument {
                name: "current_page",
                value: requested,
            });
        } else {
            requested
        };

        let page_count = if results_count == 0 {
            0
        } else {
            // Exact integer ceiling; results_count == page_size yields 1.
            (results_count - 1) / page_size + 1
        };

        let current_page = if clamp && page_count > 0 {
            current_page.min(page_count)
        } else {
            current_page
        };
        if page_count > 0 && current_page > page_count {
            return Err(PagerError::PageOutOfRange {
                page: current_page,
                last: page_count,
            });
        }

        let page_start = (current_page - 1)
            .checked_mul(page_size)
            .ok_or(PagerError::ArithmeticOverflow)?
            .max(0);
        // Items through the end of the current page, before capping at the
        // total.
        let through = page_start
            .checked_add(page_size)
            .ok_or(PagerError::ArithmeticOverflow)?;
        let current_count = through.min(results_count);
        let skip = if current_page > 1 { page_start } else { 0 };

        let previous = if page_count > 1 && page_start > 0 {
            current_page - 1
        } else {
            NO_PAGE
        };
        let next = if page_count > 1 && through < results_count {
            current_page + 1
        } else {
            NO_PAGE
        };

        let between_pages = window::button_window(current_page, page_count, button_count);

        Ok(Self {
            current_page,
            page_size,
            button_count,
            page_count,
            first: 1,
            last: page_count,
            previous,
            next,
            skip,
            take: page_size,
            current_count,
            total_count: results_count,
            between_pages,
        })
    }

    /// Zero-based offset of the first item on the current page (same value
    /// as [`skip`](Self::skip)).
    pub fn page_start(&self) -> i64 {
        self.skip
    }

    /// Page reached by jumping `n` pages back, or [`NO_PAGE`] when the jump
    /// would leave the valid range.
    pub fn previous_by(&self, n: i64) -> i64 {
        if self.page_count > 1
            && self.skip > 0
            && let Some(target) = self.current_page.checked_sub(n)
            && target > 0
        {
            target
        } else {
            NO_PAGE
        }
    }

    /// Page reached by jumping `n` pages forward, or [`NO_PAGE`] when the
    /// jump would leave the valid range.
    pub fn next_by(&self, n: i64) -> i64 {
        if self.page_count > 1
            && let Some(target) = self.current_page.checked_add(n)
            && target <= self.page_count
        {
            target
        } else {
            NO_PAGE
        }
    }

    // Fixed-step jumps; same boundary rules as previous_by/next_by.

    pub fn previous_ten(&self) -> i64 {
        self.previous_by(10)
    }

    pub fn previous_twenty(&self) -> i64 {
        self.previous_by(20)
    }

    pub fn previous_thirty(&self) -> i64 {
        self.previous_by(30)
    }

    pub fn previous_forty(&self) -> i64 {
        self.previous_by(40)
    }

    pub fn previous_fifty(&self) -> i64 {
        self.previous_by(50)
    }

    pub fn previous_hundred(&self) -> i64 {
        self.previous_by(100)
    }

    pub fn next_ten(&self) -> i64 {
        self.next_by(10)
    }

    pub fn next_twenty(&self) -> i64 {
        self.next_by(20)
    }

    pub fn next_thirty(&self) -> i64 {
        self.next_by(30)
    }

    pub fn next_forty(&self) -> i64 {
        self.next_by(40)
    }

    pub fn next_fifty(&self) -> i64 {
        self.next_by(50)
    }

    pub fn next_hundred(&self) -> i64 {
        self.next_by(100)
    }

    /// Every page from 1 to `page_count` as a tagged button listing.
    ///
    /// Computed on demand: unlike `between_pages` it is not bounded by
    /// `button_count`.
    pub fn all_pages(&self) -> Vec<PageButton> {
        window::all_pages(self.current_page, self.page_count)
    }
}
