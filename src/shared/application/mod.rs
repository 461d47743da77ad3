/// Shared application layer patterns
///
/// Pagination building blocks used across bounded contexts.
pub mod page_bar;
pub mod pagination;

pub use page_bar::*;
pub use pagination::*;
