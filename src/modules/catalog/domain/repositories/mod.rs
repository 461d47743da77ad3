pub mod catalog_store;

pub use catalog_store::CatalogStore;

#[cfg(test)]
pub use catalog_store::MockCatalogStore;
