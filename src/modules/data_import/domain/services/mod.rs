pub mod importer;

pub use importer::CatalogImporter;
