pub mod application;
pub mod domain;

// Re-exports for easy external access
pub use application::service::ImportService;
pub use domain::services::importer::CatalogImporter;
pub use domain::types::{ImportSummary, MovieRecord};
