pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::{ActorService, MovieService};
pub use domain::entities::{Actor, Movie};
pub use domain::repositories::CatalogStore;
pub use infrastructure::persistence::InMemoryCatalogStore;
