pub mod services;
pub mod types;

pub use services::importer::CatalogImporter;
pub use types::{ImportSummary, MovieRecord};
