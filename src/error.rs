/// Errors surfaced while constructing a [`Pager`](crate::pager::Pager).
///
/// Every variant is fatal to construction: the pager is either fully valid
/// or not created at all.
#[derive(Debug, thiserror::Error)]
pub enum PagerError {
    #[error("invalid {name}: {value}")]
    InvalidArgument { name: &'static str, value: i64 },

    #[error("page {page} is out of range: the last page is {last}")]
    PageOutOfRange { page: i64, last: i64 },

    #[error("page arithmetic overflowed")]
    ArithmeticOverflow,
}
