//! Pagination metadata calculator.
//!
//! Builds a [`Pager`] from a requested page, a total result count, a page
//! size, and a button count, and derives page boundaries, skip/take offsets,
//! previous/next targets (with jump-by-N variants), and the windowed
//! page-button listings a UI renders.

pub mod config;
pub mod error;
pub mod pager;
pub mod window;

pub use error::PagerError;
pub use pager::{DEFAULT_BUTTON_COUNT, DEFAULT_PAGE_SIZE, NO_PAGE, Pager};
pub use window::{PageButton, PageState};
