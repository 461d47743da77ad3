pub mod modules;
pub mod shared;

// Re-exports for the common entry points
pub use modules::catalog::{
    Actor, ActorService, CatalogStore, InMemoryCatalogStore, Movie, MovieService,
};
pub use modules::data_import::{CatalogImporter, ImportService, ImportSummary, MovieRecord};
pub use shared::application::{
    page_bar, paginate, PageBarEntry, PageSource, PaginatedResult, PaginationParams,
};
pub use shared::errors::{AppError, AppResult};
