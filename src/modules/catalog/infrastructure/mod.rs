pub mod persistence;

pub use persistence::InMemoryCatalogStore;
